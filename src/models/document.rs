// src/models/document.rs

use serde::{Deserialize, Serialize};

use crate::models::content::ContentNode;

/// A document ready for conversion: its display name and the ordered top-level
/// content of its body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: Vec<ContentNode>,
}

impl Document {
    pub fn new(name: impl Into<String>, body: Vec<ContentNode>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}
