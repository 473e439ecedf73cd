// src/models/api/text.rs

use serde::{Deserialize, Serialize};

/// An RGB color.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#RgbColor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbColor {
    /// The red component of the color, from 0.0 to 1.0. Missing means 0.
    pub red: Option<f32>,
    pub green: Option<f32>,
    pub blue: Option<f32>,
}

impl RgbColor {
    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        let r = (self.red.unwrap_or(0.0) * 255.0).round() as u8;
        let g = (self.green.unwrap_or(0.0) * 255.0).round() as u8;
        let b = (self.blue.unwrap_or(0.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// A solid color.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Color
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<RgbColor>,
}

/// A color that can either be fully opaque or fully transparent.
/// If `color` is absent the color is transparent.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#OptionalColor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl OptionalColor {
    /// The `#rrggbb` form of the color, or `None` when transparent.
    pub fn to_hex(&self) -> Option<String> {
        self.color
            .as_ref()
            .and_then(|c| c.rgb_color.as_ref())
            .map(RgbColor::to_hex)
    }
}

/// A magnitude in a single direction in the specified units.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub magnitude: Option<f64>,
    /// Always `PT` for font sizes as returned by the API.
    pub unit: Option<String>,
}

/// A font family and rendered weight.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#WeightedFontFamily
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    /// Any font from the Font menu in Docs or from Google Fonts.
    pub font_family: Option<String>,
    /// Multiples of 100 between 100 and 900 inclusive. Default 400.
    pub weight: Option<i32>,
}

/// The styling that can be applied to text.
/// Unset fields are inherited from the paragraph's named style.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#TextStyle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_caps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
}

/// The named paragraph styles of the Docs editor.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#NamedStyleType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyleType {
    NamedStyleTypeUnspecified,
    NormalText,
    Title,
    Subtitle,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    /// Any style type added to the API after this enum was written.
    #[serde(other)]
    Other,
}

/// Styles that apply to a whole paragraph. Only the named style type is read here.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#ParagraphStyle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<NamedStyleType>,
}

/// Describes the bullet of a paragraph.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Bullet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    /// The ID of the list this paragraph belongs to.
    pub list_id: Option<String>,
    /// The nesting level of this paragraph in the list. Missing means 0.
    pub nesting_level: Option<i32>,
    pub text_style: Option<TextStyle>,
}

/// A run of text that all has the same styling.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#TextRun
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text of this run. The last run of a paragraph ends with `\n`.
    pub content: Option<String>,
    pub text_style: Option<TextStyle>,
}

/// A paragraph element pointing at an entry of `Document::inline_objects`.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#InlineObjectElement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineObjectElement {
    pub inline_object_id: Option<String>,
    pub text_style: Option<TextStyle>,
}

/// A piece of content within a paragraph. Only text runs and inline objects are
/// modeled; other kinds (page breaks, footnote references, rich links...) deserialize
/// with both fields unset.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#ParagraphElement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_object_element: Option<InlineObjectElement>,
}

/// A paragraph of text, possibly bulleted.
/// Derived from: https://developers.google.com/docs/api/reference/rest/v1/documents#Paragraph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub elements: Vec<ParagraphElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}
