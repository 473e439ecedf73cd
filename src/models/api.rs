//! A subset of the Google Docs REST API v1 `Document` resource and its mapping onto
//! the content tree.

pub mod document;
pub mod mapping;
pub mod text;
