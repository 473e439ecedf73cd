#[cfg(feature = "yup-oauth2")]
use gdocs_tools::{client, convert_document_to_html, derive_file_name, errors::DocsError};

#[cfg(feature = "yup-oauth2")]
use dotenvy::dotenv;

#[cfg(feature = "yup-oauth2")]
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "yup-oauth2")]
    {
        env_logger::builder()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
        dotenv()
            .expect("Failed to load .env file. Make sure it exists and is in the project root.");

        let args: Vec<String> = env::args().collect();
        if args.len() < 2 {
            eprintln!("Usage: cargo run --example fetch_document --features yup-oauth2 -- <DOCUMENT_ID> [--upload]");
            eprintln!(
                "Ensure GOOGLE_APPLICATION_CREDENTIALS is set in your environment or .env file."
            );
            return Ok(());
        }
        let document_id = &args[1];
        let upload = args.iter().any(|a| a == "--upload");

        log::info!("Attempting to fetch document: {}", document_id);
        let http_client = reqwest::Client::new();

        let document = match client::fetch_document_sa(document_id, &http_client).await {
            Ok(document) => document,
            Err(DocsError::ApiError { status, message }) => {
                log::error!("API error ({}): {}", status, message);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        log::info!(
            "Fetched '{}' with {} top-level nodes.",
            document.name,
            document.body.len()
        );

        let html = convert_document_to_html(&document)?;
        let file_name = derive_file_name(&document.name);

        if upload {
            let location = client::upload_html_to_drive(&file_name, &html, &http_client).await?;
            log::info!("HTML file has been saved to your Google Drive: {}", location);
        } else {
            std::fs::write(&file_name, &html)?;
            log::info!("HTML written to {}", file_name);
        }
    }

    #[cfg(not(feature = "yup-oauth2"))]
    eprintln!("This example requires the `yup-oauth2` feature.");

    Ok(())
}
