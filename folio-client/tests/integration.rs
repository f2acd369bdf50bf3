//! Integration tests for the request/response operations, using wiremock.

use folio_client::FolioClient;
use folio_types::{ApiError, NewHighlight, NewNote, Session, UserProfile};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_session() -> Session {
    Session::new(
        "test-token",
        UserProfile {
            id: 1,
            email: "ada@example.com".into(),
            username: "ada".into(),
        },
    )
}

fn client_for(server: &MockServer) -> FolioClient {
    FolioClient::new(server.uri()).with_session(test_session())
}

fn document_record() -> serde_json::Value {
    serde_json::json!({
        "id": "a1b2c",
        "title": "Attention Is All You Need",
        "filename": "attention.pdf",
        "file_size": 2_184_190,
        "total_pages": 15,
        "description": null,
        "processing_status": "processed",
        "uploaded_at": "2025-11-02T09:30:00Z"
    })
}

// ─── Auth ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_builds_a_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "fresh-token",
            "token_type": "bearer",
            "user": { "id": 1, "email": "ada@example.com", "username": "ada" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri());
    let session = client.login("ada@example.com", "hunter2").await.unwrap();

    assert_eq!(session.token(), "fresh-token");
    assert_eq!(session.user().username, "ada");
}

#[tokio::test]
async fn login_rejection_maps_to_authentication() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect email or password"))
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri());
    let err = client.login("ada@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication(_)));
}

#[tokio::test]
async fn register_returns_the_new_profile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 2, "email": "new@example.com", "username": "newbie"
        })))
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri());
    let profile = client
        .register("new@example.com", "newbie", "s3cret")
        .await
        .unwrap();
    assert_eq!(profile.id, 2);
}

#[tokio::test]
async fn verify_session_sends_the_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/check-auth"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1, "email": "ada@example.com", "username": "ada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profile = client.verify_session().await.unwrap();
    assert_eq!(profile.email, "ada@example.com");
}

// ─── Documents ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_documents_passes_paging_and_parses_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pdfs/"))
        .and(query_param("skip", "20"))
        .and(query_param("limit", "10"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([document_record()])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let docs = client.list_documents(20, 10).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "a1b2c");
    assert_eq!(docs[0].total_pages, Some(15));
}

#[tokio::test]
async fn fetch_document_returns_raw_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pdfs/a1b2c"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7 ...".to_vec(), "application/pdf"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client.fetch_document("a1b2c").await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn upload_document_returns_the_stored_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/pdfs/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "z9y8x",
            "title": "My Paper",
            "filename": "paper.pdf",
            "file_size": 1024,
            "total_pages": null,
            "description": null,
            "processing_status": "pending",
            "uploaded_at": "2026-01-15T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let doc = client
        .upload_document("My Paper", "paper.pdf", b"%PDF-1.7".to_vec())
        .await
        .unwrap();
    assert_eq!(doc.id, "z9y8x");
    assert_eq!(
        doc.processing_status,
        folio_types::ProcessingStatus::Pending
    );
}

#[tokio::test]
async fn rename_document_patches_the_title() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/pdfs/a1b2c"))
        .and(body_json(serde_json::json!({ "title": "Renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut rec = document_record();
            rec["title"] = "Renamed".into();
            rec
        }))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let doc = client.rename_document("a1b2c", "Renamed").await.unwrap();
    assert_eq!(doc.title, "Renamed");
}

#[tokio::test]
async fn delete_document_accepts_204() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/pdfs/a1b2c"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_document("a1b2c").await.unwrap();
}

#[tokio::test]
async fn thumbnail_retries_transient_failures() {
    let server = MockServer::start().await;

    // First attempt hits a 503 while the render completes, second succeeds
    Mock::given(method("GET"))
        .and(path("/api/pdfs/a1b2c/thumbnail"))
        .respond_with(ResponseTemplate::new(503).set_body_string("rendering"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/pdfs/a1b2c/thumbnail"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0xFF, 0xD8, 0xFF], "image/jpeg"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client.fetch_thumbnail("a1b2c").await.unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[tokio::test]
async fn thumbnail_does_not_retry_terminal_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pdfs/missing/thumbnail"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no thumbnail"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_thumbnail("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn rate_limit_maps_to_retryable_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pdfs/"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_documents(0, 20).await.unwrap_err();
    assert!(matches!(err, ApiError::RateLimit { .. }));
    assert!(err.is_retryable());
}

// ─── Annotations ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_note_posts_the_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/pdfs/a1b2c/notes"))
        .and(body_json(serde_json::json!({
            "content": "check this derivation",
            "page_number": 4,
            "x_position": 0.25,
            "y_position": 0.75,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 11,
            "document_id": "a1b2c",
            "content": "check this derivation",
            "page_number": 4,
            "x_position": 0.25,
            "y_position": 0.75,
            "created_at": "2026-01-15T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let note = client
        .create_note(
            "a1b2c",
            &NewNote {
                content: "check this derivation".into(),
                page_number: 4,
                x_position: Some(0.25),
                y_position: Some(0.75),
            },
        )
        .await
        .unwrap();
    assert_eq!(note.id, 11);
    assert_eq!(note.page_number, 4);
}

#[tokio::test]
async fn list_notes_parses_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pdfs/a1b2c/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 11,
            "document_id": "a1b2c",
            "content": "check this derivation",
            "page_number": 4,
            "x_position": null,
            "y_position": null,
            "created_at": "2026-01-15T12:00:00Z"
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let notes = client.list_notes("a1b2c").await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].x_position.is_none());
}

#[tokio::test]
async fn delete_note_hits_the_nested_route() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/pdfs/a1b2c/notes/11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_note("a1b2c", 11).await.unwrap();
}

#[tokio::test]
async fn create_highlight_roundtrips() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/pdfs/a1b2c/highlights"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 7,
            "document_id": "a1b2c",
            "content": "the key insight",
            "page_number": 4,
            "color": "yellow",
            "note": null,
            "x_start": null, "y_start": null, "x_end": null, "y_end": null,
            "created_at": "2026-01-15T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let highlight = client
        .create_highlight("a1b2c", &NewHighlight::text_only("the key insight", 4))
        .await
        .unwrap();
    assert_eq!(highlight.color, "yellow");
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn preferences_unwrap_the_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/preferences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "preferences": { "theme": "dark", "page_fit": "width" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let prefs = client.preferences().await.unwrap();
    assert_eq!(prefs["theme"], "dark");
}

#[tokio::test]
async fn update_preferences_wraps_the_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/users/preferences"))
        .and(body_json(serde_json::json!({
            "preferences": { "theme": "light" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "preferences": { "theme": "light" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut prefs = folio_types::Preferences::new();
    prefs.insert("theme".into(), "light".into());
    let updated = client.update_preferences(prefs).await.unwrap();
    assert_eq!(updated["theme"], "light");
}

#[tokio::test]
async fn operations_without_a_session_fail_fast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FolioClient::new(server.uri());
    assert!(matches!(
        client.list_documents(0, 20).await.unwrap_err(),
        ApiError::MissingAuth
    ));
    assert!(matches!(
        client.list_notes("a1b2c").await.unwrap_err(),
        ApiError::MissingAuth
    ));
    assert!(matches!(
        client.profile().await.unwrap_err(),
        ApiError::MissingAuth
    ));
}
