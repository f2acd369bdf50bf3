//! Streaming example: ask a question and print the answer as it arrives.
//!
//! Set FOLIO_EMAIL / FOLIO_PASSWORD and run:
//!   cargo run --example streaming -p folio-client -- <document-id> "your question"

use std::io::Write;

use folio_client::FolioClient;
use folio_types::{ChatRequest, StreamEvent};
use futures::StreamExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let document_id = args.next().expect("usage: streaming <document-id> <question>");
    let question = args.next().expect("usage: streaming <document-id> <question>");

    let email = std::env::var("FOLIO_EMAIL").expect("FOLIO_EMAIL must be set");
    let password = std::env::var("FOLIO_PASSWORD").expect("FOLIO_PASSWORD must be set");

    let client = FolioClient::localhost();
    let session = client.login(&email, &password).await?;
    let client = client.with_session(session);

    let request = ChatRequest::new(document_id, question);

    let mut handle = match client.chat_stream(&request).await {
        Ok(handle) => handle,
        Err(err) => {
            // Stream never opened — fall back to the one-shot request
            eprintln!("stream open failed ({err}), falling back");
            let answer = client.chat(&request).await?;
            println!("{}", answer.response);
            return Ok(());
        }
    };

    while let Some(event) = handle.events.next().await {
        match event {
            StreamEvent::Fragment(text) => {
                print!("{text}");
                std::io::stdout().flush()?;
            }
            StreamEvent::Done => {
                println!();
                break;
            }
            StreamEvent::Error(detail) => {
                eprintln!("\nstream failed: {detail}");
                break;
            }
        }
    }

    Ok(())
}
