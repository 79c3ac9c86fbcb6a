//! Credential listing example.
//!
//! This example creates a tunnel credential, walks every credential on the
//! account with the paginated stream and then deletes the one it created.
//!
//! Run with: NGROK_API_KEY=... cargo run --example list_credentials

use futures_util::StreamExt;
use ngrok_api_rs::NgrokClient;

#[tokio::main]
async fn main() -> ngrok_api_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Reads NGROK_API_KEY and, if set, NGROK_API_BASE_URL
    let client = NgrokClient::from_env()?;

    let created = client
        .credentials()
        .create()
        .description("list_credentials example")
        .metadata(r#"{"source":"ngrok-api-rs"}"#)
        .call()
        .await?;
    println!("Created credential {}", created.id);

    let mut stream = client
        .credentials()
        .list()
        .limit(50)
        .call()
        .await?
        .into_stream();

    let mut count = 0;
    while let Some(credential) = stream.next().await {
        let credential = credential?;
        count += 1;
        println!(
            "  - {} {:?} acl={:?}",
            credential.id, credential.description, credential.acl
        );
    }
    println!("\nFound {count} credential(s)");

    client.credentials().delete(&created.id)?.call().await?;
    println!("Deleted credential {}", created.id);

    Ok(())
}
