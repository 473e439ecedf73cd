use crate::errors::{DocsError, Result};
use crate::models::api::{
    document::DocsDocument,
    mapping::{to_document, ImageBlob},
};
use crate::models::document::Document;
use crate::output::HTML_MIME_TYPE;
use log::{debug, error, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator};

const DOCS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/documents.readonly";
const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";
const DRIVE_UPLOAD_URL: &str =
    "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart&fields=id,webViewLink";
const MULTIPART_BOUNDARY: &str = "gdocs_tools_html_upload";

/// Helper struct to attempt parsing standard Google API error responses.
#[derive(Deserialize, Debug)]
struct GoogleApiErrorResponse {
    error: GoogleApiErrorDetail,
}

/// Details within a standard Google API error response.
#[allow(unused)]
#[derive(Deserialize, Debug)]
struct GoogleApiErrorDetail {
    code: i32,
    message: String,
    status: String,
}

/// The fields requested back from a Drive upload.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    web_view_link: Option<String>,
}

/// Obtains an access token for `scopes` using the service account key named by the
/// `GOOGLE_APPLICATION_CREDENTIALS` environment variable.
async fn service_account_token(scopes: &[&str]) -> Result<String> {
    let key_file_path = env::var("GOOGLE_APPLICATION_CREDENTIALS")?;
    let sa_key = read_service_account_key(Path::new(&key_file_path))
        .await
        .map_err(|e| {
            DocsError::AuthSetupError(format!(
                "Failed to read service account key from '{}': {}",
                key_file_path, e
            ))
        })?;
    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;
    let token = auth.token(scopes).await?;
    token
        .token()
        .map(str::to_string)
        .ok_or_else(|| DocsError::AuthSetupError("OAuth token response had no token".to_string()))
}

/// Turns a non-2xx response into `DocsError::ApiError`, preferring Google's error message.
async fn api_error(response: reqwest::Response) -> DocsError {
    let status = response.status();
    let error_text = match response.text().await {
        Ok(text) => text,
        Err(e) => return DocsError::Network(e),
    };
    let message = match serde_json::from_str::<GoogleApiErrorResponse>(&error_text) {
        Ok(google_error) => google_error.error.message,
        Err(_) => format!("API request failed with status {}: {}", status, error_text),
    };
    DocsError::ApiError { status, message }
}

/// Fetches a document resource from the Google Docs API using Service Account credentials.
///
/// Reads the service account key file path from the `GOOGLE_APPLICATION_CREDENTIALS`
/// environment variable. Ensure `dotenvy::dotenv().ok();` has been called beforehand.
/// If JSON deserialization fails, writes the raw JSON response to `deserialization_error.json`.
///
/// # Arguments
///
/// * `document_id` - The ID of the document to fetch.
/// * `http_client` - An asynchronous `reqwest::Client` instance.
///
/// # Errors
///
/// Returns `DocsError` for authentication, network, API and deserialization failures.
pub async fn get_document_sa(
    document_id: &str,
    http_client: &reqwest::Client,
) -> Result<DocsDocument> {
    if document_id.is_empty() {
        return Err(DocsError::InvalidInput(
            "Document ID cannot be empty".to_string(),
        ));
    }

    let access_token = service_account_token(&[DOCS_READONLY_SCOPE]).await?;
    let api_url = format!("https://docs.googleapis.com/v1/documents/{}", document_id);

    let response = http_client
        .get(&api_url)
        .header(AUTHORIZATION, format!("Bearer {}", access_token))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(api_error(response).await);
    }

    let bytes = response.bytes().await?;
    match serde_json::from_slice::<DocsDocument>(&bytes) {
        Ok(document) => {
            debug!("Fetched document '{}'", document.document_id);
            Ok(document)
        }
        Err(e) => {
            let filename = "deserialization_error.json";
            error!("JSON Deserialization Error: {}", e);
            match fs::write(filename, &bytes) {
                Ok(_) => error!("Raw JSON response body saved to '{}' for debugging.", filename),
                Err(io_err) => error!(
                    "Failed to write error JSON to file '{}': {}",
                    filename, io_err
                ),
            }
            Err(DocsError::JsonDeserialization(e))
        }
    }
}

/// Downloads every inline image of `document`, keyed by inline object ID.
///
/// Content URIs are pre-authorized, so no token is sent. Images the server refuses are
/// skipped with a warning; they simply do not appear in the converted output.
pub async fn fetch_inline_images(
    document: &DocsDocument,
    http_client: &reqwest::Client,
) -> Result<HashMap<String, ImageBlob>> {
    let mut images = HashMap::new();

    for (object_id, uri) in document.image_uris() {
        let response = http_client.get(uri).send().await?;
        if !response.status().is_success() {
            warn!(
                "Image '{}' could not be downloaded (status {}), skipping",
                object_id,
                response.status()
            );
            continue;
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await?.to_vec();
        debug!("Downloaded image '{}' ({} bytes, {})", object_id, bytes.len(), mime_type);

        images.insert(object_id.to_string(), ImageBlob { bytes, mime_type });
    }

    Ok(images)
}

/// Fetches a document and its images and maps them into a convertible `Document`.
pub async fn fetch_document_sa(
    document_id: &str,
    http_client: &reqwest::Client,
) -> Result<Document> {
    let api_document = get_document_sa(document_id, http_client).await?;
    let images = fetch_inline_images(&api_document, http_client).await?;
    Ok(to_document(&api_document, &images))
}

/// Uploads `html` to Google Drive as `file_name` with MIME type `text/html`.
///
/// Returns the file's web view link, or its ID when Drive does not report a link.
pub async fn upload_html_to_drive(
    file_name: &str,
    html: &str,
    http_client: &reqwest::Client,
) -> Result<String> {
    if file_name.is_empty() {
        return Err(DocsError::InvalidInput(
            "Output file name cannot be empty".to_string(),
        ));
    }

    let access_token = service_account_token(&[DRIVE_FILE_SCOPE]).await?;
    let metadata = serde_json::json!({ "name": file_name, "mimeType": HTML_MIME_TYPE });
    let metadata = metadata.to_string();
    let boundary = multipart_boundary(&[&metadata, html]);
    let body = multipart_related_body(&boundary, &metadata, html);

    let response = http_client
        .post(DRIVE_UPLOAD_URL)
        .header(AUTHORIZATION, format!("Bearer {}", access_token))
        .header(
            CONTENT_TYPE,
            format!("multipart/related; boundary={}", boundary),
        )
        .body(body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(api_error(response).await);
    }

    let file: DriveFile = response.json().await?;
    info!("Uploaded '{}' to Drive as {}", file_name, file.id);
    Ok(file.web_view_link.unwrap_or(file.id))
}

/// Picks a boundary that occurs in none of `parts`, suffixing a counter to the base
/// boundary until it is unique.
fn multipart_boundary(parts: &[&str]) -> String {
    let mut boundary = MULTIPART_BOUNDARY.to_string();
    let mut suffix = 0u32;
    while parts.iter().any(|part| part.contains(boundary.as_str())) {
        suffix += 1;
        boundary = format!("{}_{}", MULTIPART_BOUNDARY, suffix);
    }
    boundary
}

fn multipart_related_body(boundary: &str, metadata_json: &str, html: &str) -> String {
    format!(
        "--{b}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{meta}\r\n\
         --{b}\r\nContent-Type: {mime}; charset=UTF-8\r\n\r\n{html}\r\n--{b}--",
        b = boundary,
        meta = metadata_json,
        mime = HTML_MIME_TYPE,
        html = html
    )
}
