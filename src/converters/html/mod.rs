//! Converts a document content tree into one self-contained HTML document.
//!
//! Conversion runs two independent passes over the same tree and then composes them:
//! *   the font pass (`fonts`) collects every declared font family and builds a Google
//!     Fonts stylesheet link from the set;
//! *   the render pass (`elements`, `text`) turns each top-level node into an HTML fragment
//!     with inline styles and base64-embedded images;
//! *   the wrapper (`structure`) places the fragments in a fixed print-like page layout.
//!
//! # Limitations
//! *   Tables contribute fonts but render no markup.
//! *   Style is applied per paragraph, not per run: a paragraph without explicit attributes
//!     renders with the attributes all of its runs share.
//! *   Each list item is rendered on its own; consecutive items are not merged into one list.
//! *   Text is inserted unescaped unless `escape_text` is enabled on the converter.

mod constants;
mod elements;
mod error;
mod fonts;
mod structure;
mod text;

pub use elements::data_uri;
pub use error::{HtmlConversionError, Result};
pub use fonts::{build_font_link, collect_fonts};
pub use structure::wrap_in_container;
pub use text::{apply_text_style, escape_html_text};

use log::debug;

use crate::models::{content::ContentNode, document::Document};

/// Options affecting how nodes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `<` and `>` in document text before inserting it into markup.
    pub escape_text: bool,
}

/// Renders every top-level node in order, with default options.
pub fn render_body(nodes: &[ContentNode]) -> Result<String> {
    elements::render_body(nodes, &RenderOptions::default())
}

/// Renders a single node with default options. Tables and unsupported nodes yield "".
pub fn render_node(node: &ContentNode) -> Result<String> {
    elements::render_node(node, &RenderOptions::default())
}

/// Converts a `Document` into a complete HTML string using default options.
///
/// # Arguments
/// * `document` - The document whose body is converted.
///
/// # Returns
/// The full HTML document, or an `HtmlConversionError` if writing the output failed.
pub fn convert_document_to_html(document: &Document) -> Result<String> {
    HtmlConverter::default().convert(document)
}

/// Builder for an `HtmlConverter`.
#[derive(Debug, Default)]
pub struct HtmlConverterBuilder {
    options: RenderOptions,
}

impl HtmlConverterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Escape document text before inserting it into markup. Off by default.
    pub fn set_escape_text(mut self, escape_text: bool) -> Self {
        self.options.escape_text = escape_text;
        self
    }

    pub fn build(self) -> HtmlConverter {
        HtmlConverter {
            options: self.options,
        }
    }
}

/// Runs the font and render passes and wraps the result.
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    options: RenderOptions,
}

impl HtmlConverter {
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Converts a whole document into an HTML string.
    pub fn convert(&self, document: &Document) -> Result<String> {
        debug!(
            "Converting document '{}' ({} top-level nodes)",
            document.name,
            document.body.len()
        );
        let fonts = collect_fonts(&document.body);
        let font_link = build_font_link(&fonts);
        let body_html = self.convert_body(&document.body)?;
        Ok(wrap_in_container(&body_html, &font_link))
    }

    /// Renders the body fragments only, without the page wrapper.
    pub fn convert_body(&self, nodes: &[ContentNode]) -> Result<String> {
        elements::render_body(nodes, &self.options)
    }
}
