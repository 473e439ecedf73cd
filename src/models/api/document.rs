// src/models/api/document.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::api::text::Paragraph;

/// The contents and style of a cell in a table.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#TableCell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// The content of the cell.
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// The contents and style of a row in a table.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#TableRow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

/// A table.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub rows: Option<i32>,
    pub columns: Option<i32>,
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

/// A block of structural content. Exactly one of the content fields is expected to be set;
/// section breaks and tables of contents are kept opaque.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#StructuralElement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_break: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<serde_json::Value>,
}

/// The document body.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

/// The look of the bullets at one nesting level of a list.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#NestingLevel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingLevel {
    /// Set for numbered levels, e.g. `DECIMAL`, `ALPHA`, `ROMAN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_type: Option<String>,
    /// Set for bulleted levels, e.g. `●`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_symbol: Option<String>,
}

/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#ListProperties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProperties {
    /// Nesting levels 0 through 8, in order.
    #[serde(default)]
    pub nesting_levels: Vec<NestingLevel>,
}

/// A List represents the list attributes for a group of paragraphs.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#List
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_properties: Option<ListProperties>,
}

impl List {
    pub fn nesting_level(&self, level: usize) -> Option<&NestingLevel> {
        self.list_properties
            .as_ref()
            .and_then(|props| props.nesting_levels.get(level))
    }
}

/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#ImageProperties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    /// A short-lived URI from which the image can be downloaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}

/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#EmbeddedObject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_properties: Option<ImageProperties>,
}

/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#InlineObjectProperties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_object: Option<EmbeddedObject>,
}

/// An object that appears inline with text, such as an image.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#InlineObject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_object_properties: Option<InlineObjectProperties>,
}

impl InlineObject {
    /// The download URI of the embedded image, if this object is an image.
    pub fn content_uri(&self) -> Option<&str> {
        self.inline_object_properties
            .as_ref()?
            .embedded_object
            .as_ref()?
            .image_properties
            .as_ref()?
            .content_uri
            .as_deref()
    }
}

/// A Google Docs document as returned by `documents.get`. Only the parts needed for
/// HTML conversion are modeled.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsDocument {
    #[serde(default)]
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    /// The lists in the document, keyed by list ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<IndexMap<String, List>>,
    /// The inline objects in the document, keyed by object ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_objects: Option<IndexMap<String, InlineObject>>,
}

impl DocsDocument {
    /// Pairs of (inline object ID, content URI) for every inline image in the document.
    pub fn image_uris(&self) -> Vec<(&str, &str)> {
        self.inline_objects
            .iter()
            .flatten()
            .filter_map(|(id, object)| object.content_uri().map(|uri| (id.as_str(), uri)))
            .collect()
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.as_ref().and_then(|lists| lists.get(list_id))
    }
}
