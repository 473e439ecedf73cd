#[cfg(not(target_arch = "wasm32"))]
#[cfg(feature = "yup-oauth2")]
pub mod client;

#[cfg(not(target_arch = "wasm32"))]
#[cfg(feature = "yup-oauth2")]
pub use client::{fetch_document_sa, get_document_sa, upload_html_to_drive};

pub mod converters;
pub mod errors;
pub mod models;
pub mod output;

pub use converters::html::{convert_document_to_html, HtmlConverter, HtmlConverterBuilder};
pub use errors::{DocsError, Result};
pub use models::{content::ContentNode, document::Document};
pub use output::{derive_file_name, FsSink, HtmlSink};

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::models::api::{document::DocsDocument, mapping::to_document};

/// Routes `log` output and panics to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second call only fails because a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Converts a JSON-encoded `Document` content tree into a complete HTML page.
#[wasm_bindgen(js_name = convertDocumentToHtml)]
pub fn convert_document_json_to_html(document_json: &str) -> std::result::Result<String, JsError> {
    Ok(document_json_to_html(document_json)?)
}

/// Converts a Google Docs API `documents.get` response into a complete HTML page.
/// Inline images are dropped since their bytes are not part of the response.
#[wasm_bindgen(js_name = convertDocsApiJsonToHtml)]
pub fn convert_docs_api_json_to_html(api_json: &str) -> std::result::Result<String, JsError> {
    Ok(docs_api_json_to_html(api_json)?)
}

fn document_json_to_html(document_json: &str) -> Result<String> {
    let document: Document = serde_json::from_str(document_json)?;
    Ok(convert_document_to_html(&document)?)
}

fn docs_api_json_to_html(api_json: &str) -> Result<String> {
    let api_document: DocsDocument = serde_json::from_str(api_json)?;
    let document = to_document(&api_document, &HashMap::new());
    Ok(convert_document_to_html(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_tree_json() {
        let html = document_json_to_html(
            r#"{"name":"n","body":[{"type":"paragraph","heading":"HEADING3","children":[{"text":"Hi"}]}]}"#,
        )
        .unwrap();
        assert!(html.contains("<h3>Hi</h3>"));
    }

    #[test]
    fn converts_docs_api_json() {
        let html = docs_api_json_to_html(
            r#"{"documentId":"d","body":{"content":[{"paragraph":{"elements":[{"textRun":{"content":"Hello\n"}}]}}]}}"#,
        )
        .unwrap();
        assert!(html.contains("<p style=\"font-size:12pt;\">Hello</p>"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            document_json_to_html("{"),
            Err(DocsError::JsonDeserialization(_))
        ));
    }
}
