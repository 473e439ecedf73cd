use std::env;
use std::fs;

use gdocs_tools::{derive_file_name, Document, FsSink, HtmlConverterBuilder, HtmlSink};

fn main() {
    // Reads RUST_LOG, defaulting to Info.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example convert_document -- <DOCUMENT_JSON> [OUTPUT_DIR] [--escape]");
        return;
    }
    let json_path = &args[1];
    let output_dir = args.get(2).filter(|a| !a.starts_with("--")).map_or(".", |s| s.as_str());
    let escape_text = args.iter().any(|a| a == "--escape");

    log::info!("Loading document from {}...", json_path);
    let json_string =
        fs::read_to_string(json_path).expect("Should have been able to read the file");
    let document: Document =
        serde_json::from_str(&json_string).expect("Failed to deserialize document JSON");
    log::info!(
        "Document '{}' loaded with {} top-level nodes.",
        document.name,
        document.body.len()
    );

    let converter = HtmlConverterBuilder::new()
        .set_escape_text(escape_text)
        .build();

    match converter.convert(&document) {
        Ok(html) => {
            let file_name = derive_file_name(&document.name);
            let sink = FsSink::new(output_dir);
            match sink.store(&file_name, &html) {
                Ok(location) => log::info!("HTML file has been saved to {}", location),
                Err(e) => log::error!("Saving HTML failed: {}", e),
            }
        }
        Err(e) => {
            log::error!("HTML conversion failed: {}", e);
            panic!("HTML conversion failed: {}", e);
        }
    }
}
