//! Basic example: log in, list documents, ask one question without streaming.
//!
//! Set FOLIO_EMAIL / FOLIO_PASSWORD and run:
//!   cargo run --example basic -p folio-client

use folio_client::FolioClient;
use folio_types::ChatRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let email = std::env::var("FOLIO_EMAIL").expect("FOLIO_EMAIL must be set");
    let password = std::env::var("FOLIO_PASSWORD").expect("FOLIO_PASSWORD must be set");

    let client = FolioClient::localhost();
    let session = client.login(&email, &password).await?;
    println!("logged in as {}", session.user().username);
    let client = client.with_session(session);

    let documents = client.list_documents(0, 20).await?;
    for doc in &documents {
        println!(
            "{}  {}  ({:?}, {} pages)",
            doc.id,
            doc.title,
            doc.processing_status,
            doc.total_pages.unwrap_or(0),
        );
    }

    if let Some(doc) = documents.first() {
        let answer = client
            .chat(&ChatRequest::new(&doc.id, "What is this document about?"))
            .await?;
        println!("\n{}", answer.response);
    }

    Ok(())
}
