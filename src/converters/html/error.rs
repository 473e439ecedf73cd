use thiserror::Error;

/// Errors that can occur while producing HTML from a content tree.
///
/// The traversal itself is total over its input: unknown nodes and malformed tables
/// contribute nothing instead of failing. Only writing into the output buffer can error.
#[derive(Error, Debug)]
pub enum HtmlConversionError {
    #[error("Formatting error during HTML generation: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// A specialized Result type for HTML conversion operations.
pub type Result<T> = std::result::Result<T, HtmlConversionError>;
