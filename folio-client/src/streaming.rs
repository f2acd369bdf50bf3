//! SSE parsing for the chat stream endpoint.
//!
//! The backend streams `data:` lines whose payload is either a JSON object
//! carrying a `response` fragment or the `[DONE]` sentinel. Lines are framed
//! by `\n`; other SSE line kinds (`event:`, `id:`, comments) are ignored.

use bytes::Bytes;
use folio_types::{StreamEvent, StreamHandle};
use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

/// End-of-stream sentinel payload.
const DONE_SENTINEL: &str = "[DONE]";

/// Wrap an open HTTP response into a [`StreamHandle`].
///
/// The response body is consumed chunk by chunk; nothing is buffered beyond
/// the current partial line.
pub(crate) fn stream_answer(response: reqwest::Response) -> StreamHandle {
    let cancel = CancellationToken::new();
    let events = parse_event_stream(response.bytes_stream(), cancel.clone());
    StreamHandle::new(Box::pin(events), cancel)
}

/// Parse a raw byte stream into a stream of [`StreamEvent`]s.
///
/// Emits at most one terminal event. Cancellation is observed at every chunk
/// boundary and before each event delivery; once the token fires, remaining
/// chunks are discarded and nothing further is emitted — not even a terminal
/// event.
fn parse_event_stream<E>(
    byte_stream: impl Stream<Item = Result<Bytes, E>> + Send + 'static,
    cancel: CancellationToken,
) -> impl Stream<Item = StreamEvent> + Send + 'static
where
    E: std::fmt::Display + Send + 'static,
{
    async_stream::stream! {
        let mut bytes_stream = std::pin::pin!(byte_stream);
        // Kept as raw bytes: a multi-byte character split across chunks is
        // only decoded once its line is complete.
        let mut line_buf: Vec<u8> = Vec::new();

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                next = bytes_stream.next() => next,
            };
            let Some(chunk_result) = next else { break };
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    yield StreamEvent::Error(format!("stream read error: {e}"));
                    return;
                }
            };

            line_buf.extend_from_slice(&chunk);

            // Split off complete lines, keeping any partial line for the next chunk
            while let Some(newline_pos) = line_buf.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = line_buf.drain(..=newline_pos).collect();
                if cancel.is_cancelled() {
                    return;
                }
                if let Some(event) = parse_line(&line[..newline_pos]) {
                    let terminal = event.is_terminal();
                    yield event;
                    if terminal {
                        return;
                    }
                }
            }
        }

        // End of body without the sentinel: flush any trailing partial line,
        // then treat the stream as completed.
        if cancel.is_cancelled() {
            return;
        }
        if !line_buf.is_empty() {
            if let Some(event) = parse_line(&line_buf) {
                let terminal = event.is_terminal();
                yield event;
                if terminal {
                    return;
                }
            }
        }
        yield StreamEvent::Done;
    }
}

/// Parse one SSE line into the event it produces, if any.
///
/// Malformed lines never abort the stream — they are logged and skipped.
fn parse_line(raw: &[u8]) -> Option<StreamEvent> {
    let line = match std::str::from_utf8(raw) {
        Ok(s) => s.trim(),
        Err(e) => {
            tracing::warn!(error = %e, "skipping stream line that is not valid UTF-8");
            return None;
        }
    };
    if line.is_empty() {
        return None;
    }

    // Only `data:` lines carry payload
    let payload = line.strip_prefix("data:")?.trim();

    if payload == DONE_SENTINEL {
        return Some(StreamEvent::Done);
    }

    let json: serde_json::Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(payload, error = %e, "skipping malformed stream payload");
            return None;
        }
    };

    if let Some(error) = json.get("error") {
        let detail = error["message"]
            .as_str()
            .or_else(|| error.as_str())
            .unwrap_or("unknown streaming error");
        return Some(StreamEvent::Error(detail.to_string()));
    }

    match json["response"].as_str() {
        Some(text) if !text.is_empty() => Some(StreamEvent::Fragment(text.to_string())),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
