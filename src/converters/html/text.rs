//! Character-level markup: turns a piece of text plus its `StyleAttributes` into
//! `<b>`/`<i>`/`<u>` tags and an outer styled `<span>`.

use std::fmt::Write;

use super::error::Result;
use crate::models::style::StyleAttributes;

/// Wraps `text` in the markup described by `attrs`.
///
/// Toggles nest bold innermost, then italic, then underline. Inline CSS declarations
/// (`font-family`, `font-size`, `color`, in that order) go on a `<span>` that becomes the
/// outermost tag. No span is emitted when nothing is declared. `text` is inserted as is.
pub fn apply_text_style(text: &str, attrs: &StyleAttributes) -> Result<String> {
    let mut html_text = text.to_string();

    if attrs.is_bold() {
        html_text = format!("<b>{}</b>", html_text);
    }
    if attrs.is_italic() {
        html_text = format!("<i>{}</i>", html_text);
    }
    if attrs.is_underlined() {
        html_text = format!("<u>{}</u>", html_text);
    }

    let declarations = style_declarations(attrs)?;
    if declarations.is_empty() {
        return Ok(html_text);
    }

    let mut out = String::with_capacity(html_text.len() + 32);
    write!(
        out,
        "<span style=\"{}\">{}</span>",
        declarations.join("; "),
        html_text
    )?;
    Ok(out)
}

fn style_declarations(attrs: &StyleAttributes) -> Result<Vec<String>> {
    let mut styles = Vec::new();

    if let Some(family) = non_empty(&attrs.font_family) {
        let mut decl = String::new();
        write!(decl, "font-family:{}", family)?;
        styles.push(decl);
    }
    if let Some(size) = font_size_pt(attrs) {
        let mut decl = String::new();
        write!(decl, "font-size:{}pt", size)?;
        styles.push(decl);
    }
    if let Some(color) = non_empty(&attrs.foreground_color) {
        let mut decl = String::new();
        write!(decl, "color:{}", color)?;
        styles.push(decl);
    }

    Ok(styles)
}

/// The declared font size, treating a zero size as undeclared.
pub(crate) fn font_size_pt(attrs: &StyleAttributes) -> Option<f64> {
    attrs.font_size_pt.filter(|size| *size != 0.0)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Escapes special HTML characters (`&`, `<`, `>`) for use in element content.
pub fn escape_html_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
