use thiserror::Error;

use crate::converters::html::HtmlConversionError;

/// Represents errors that can occur while fetching, converting or storing a document.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Error originating from the underlying HTTP client (`reqwest`).
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Error occurred during the deserialization of a JSON document.
    #[error("Failed to deserialize JSON: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// An error reported by a Google API itself (e.g., 4xx or 5xx status code).
    #[error("API returned an error: Status {status}, Message: {message}")]
    ApiError {
        status: reqwest::StatusCode,
        message: String,
    },

    /// An error related to authentication or authorization setup.
    #[error("Authentication setup/configuration error: {0}")]
    AuthSetupError(String),

    /// An error from the authentication library (yup-oauth2) during token fetching.
    #[cfg(not(target_arch = "wasm32"))]
    #[cfg(feature = "yup-oauth2")]
    #[error("Authentication library error: {0}")]
    AuthLibError(#[from] yup_oauth2::Error),

    /// Invalid input was provided to a library function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),

    /// An I/O error, e.g. while reading the service account key or writing output.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTML conversion failed: {0}")]
    HtmlConversion(#[from] HtmlConversionError),
}

/// A type alias for `Result<T, DocsError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DocsError>;
