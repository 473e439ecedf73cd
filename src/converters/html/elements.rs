//! Per-node HTML renderers and the dispatcher that walks the top level of a body.

use std::fmt::Write;

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;

use super::{
    constants::*,
    error::Result,
    text::{apply_text_style, escape_html_text, font_size_pt},
    RenderOptions,
};
use crate::models::content::{ContentNode, GlyphKind, InlineImage, ListItem, Paragraph};

/// Renders every top-level node in order and concatenates the fragments.
/// Each node renders independently of its siblings.
pub fn render_body(nodes: &[ContentNode], options: &RenderOptions) -> Result<String> {
    let mut html = String::new();
    for node in nodes {
        html.push_str(&render_node(node, options)?);
    }
    Ok(html)
}

/// Renders one node. Tables and unsupported nodes render to an empty string.
pub fn render_node(node: &ContentNode, options: &RenderOptions) -> Result<String> {
    match node {
        ContentNode::Paragraph(paragraph) => render_paragraph(paragraph, options),
        ContentNode::ListItem(item) => render_list_item(item, options),
        ContentNode::InlineImage(image) => render_image(image),
        ContentNode::Table(_) | ContentNode::Unsupported => {
            debug!("No HTML rendering for {:?} node", node.kind());
            Ok(String::new())
        }
    }
}

fn prepare_text(text: String, options: &RenderOptions) -> String {
    if options.escape_text {
        escape_html_text(&text)
    } else {
        text
    }
}

/// Renders a paragraph as a heading or as a sized body paragraph.
///
/// Body paragraphs that are underlined and at least 18pt are promoted to `<h3>`.
pub(crate) fn render_paragraph(paragraph: &Paragraph, options: &RenderOptions) -> Result<String> {
    let attrs = paragraph.style();
    let html_text = apply_text_style(&prepare_text(paragraph.text(), options), &attrs)?;
    let mut out = String::new();

    let level = paragraph.heading.level();
    if level > 0 {
        write!(out, "<h{0}>{1}</h{0}>", level, html_text)?;
        return Ok(out);
    }

    let font_size = font_size_pt(&attrs);
    let promoted = font_size.is_some_and(|size| size >= HEADING_PROMOTION_MIN_SIZE_PT)
        && attrs.is_underlined();

    if promoted {
        write!(out, "<h{0}>{1}</h{0}>", PROMOTED_HEADING_LEVEL, html_text)?;
    } else {
        write!(
            out,
            "<p style=\"font-size:{}pt;\">{}</p>",
            font_size.unwrap_or(DEFAULT_FONT_SIZE_PT),
            html_text
        )?;
    }
    Ok(out)
}

/// Renders a list item as `<li>`. Top-level items get their own `<ul>`/`<ol>` wrapper
/// chosen by glyph kind; nested items are emitted bare.
pub(crate) fn render_list_item(item: &ListItem, options: &RenderOptions) -> Result<String> {
    let html_text = apply_text_style(&prepare_text(item.text(), options), &item.style())?;
    let mut out = String::new();

    if item.nesting_level == 0 {
        let list_tag = match item.glyph_kind {
            GlyphKind::Bullet => "ul",
            GlyphKind::Number => "ol",
        };
        write!(out, "<{0}><li>{1}</li></{0}>", list_tag, html_text)?;
    } else {
        write!(out, "<li>{}</li>", html_text)?;
    }
    Ok(out)
}

/// Renders an inline image as an `<img>` with a base64 `data:` URI.
/// Empty bytes still produce a tag, with empty data.
pub(crate) fn render_image(image: &InlineImage) -> Result<String> {
    let mut out = String::new();
    write!(
        out,
        "<img src=\"{}\">",
        data_uri(&image.bytes, &image.mime_type)
    )?;
    Ok(out)
}

/// Builds a `data:` URI embedding `bytes` with the given MIME type.
pub fn data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
