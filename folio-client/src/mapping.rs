//! Request mapping between [`ChatRequest`] and the backend chat wire format.

use folio_types::ChatRequest;

/// Convert a [`ChatRequest`] into the chat endpoint's JSON body.
///
/// The wire format carries the selection as a `context` list (empty, or one
/// entry), not an optional string. The document id does not appear in the
/// body — it is part of the route.
#[must_use]
pub fn to_chat_body(req: &ChatRequest) -> serde_json::Value {
    let context: Vec<&str> = req.selected_context.as_deref().into_iter().collect();

    serde_json::json!({
        "query": req.query,
        "conversation_history": req.history,
        "context": context,
        "use_tools": req.use_tools,
        "detailed_response": req.detailed_response,
        "current_page": req.current_page,
    })
}
