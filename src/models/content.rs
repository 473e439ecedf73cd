// src/models/content.rs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::models::style::StyleAttributes;

/// A run of text with one consistent set of style attributes.
/// The only unit of the tree that carries font, size, color and toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub attributes: StyleAttributes,
}

/// The named paragraph style of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParagraphHeading {
    #[default]
    Normal,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Title,
    Subtitle,
}

impl ParagraphHeading {
    /// Returns the HTML heading level, 1 through 6, or 0 for body text.
    /// `Title` and `Subtitle` have no heading level and render as body text.
    pub fn level(self) -> u8 {
        match self {
            ParagraphHeading::Heading1 => 1,
            ParagraphHeading::Heading2 => 2,
            ParagraphHeading::Heading3 => 3,
            ParagraphHeading::Heading4 => 4,
            ParagraphHeading::Heading5 => 5,
            ParagraphHeading::Heading6 => 6,
            ParagraphHeading::Normal | ParagraphHeading::Title | ParagraphHeading::Subtitle => 0,
        }
    }
}

/// Whether a list item is bulleted (unordered) or numbered (ordered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlyphKind {
    #[default]
    Bullet,
    Number,
}

/// A block of body text, optionally carrying a heading style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub heading: ParagraphHeading,
    #[serde(default)]
    pub children: Vec<TextRun>,
    /// Paragraph-level attributes. When absent they are flattened from the runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<StyleAttributes>,
}

impl Paragraph {
    /// The full text of the paragraph, all runs concatenated.
    pub fn text(&self) -> String {
        concat_runs(&self.children)
    }

    /// The single attribute set the whole paragraph renders with.
    pub fn style(&self) -> Cow<'_, StyleAttributes> {
        node_style(&self.attributes, &self.children)
    }
}

/// A single item of a bulleted or numbered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// 0 for a top-level item.
    #[serde(default)]
    pub nesting_level: u32,
    #[serde(default)]
    pub glyph_kind: GlyphKind,
    #[serde(default)]
    pub children: Vec<TextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<StyleAttributes>,
}

impl ListItem {
    pub fn text(&self) -> String {
        concat_runs(&self.children)
    }

    pub fn style(&self) -> Cow<'_, StyleAttributes> {
        node_style(&self.attributes, &self.children)
    }
}

/// An image embedded in the flow of the document.
/// In JSON the bytes travel as a standard base64 string under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    #[serde(rename = "data", with = "base64_bytes", default)]
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// One cell of a table. Only the first child takes part in font collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl TableCell {
    pub fn first_child(&self) -> Option<&ContentNode> {
        self.children.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Rows of cells, top to bottom, each row left to right.
    #[serde(default)]
    pub rows: Vec<Vec<TableCell>>,
}

/// One element of the document content tree.
/// The JSON representation is internally tagged by `type`; unknown types deserialize
/// into `Unsupported` instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    Paragraph(Paragraph),
    ListItem(ListItem),
    InlineImage(InlineImage),
    Table(Table),
    /// Any node kind the converter does not know about.
    #[serde(other)]
    Unsupported,
}

/// The variant tag of a `ContentNode`, used by both tree passes to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Paragraph,
    ListItem,
    InlineImage,
    Table,
    Unsupported,
}

impl ContentNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            ContentNode::Paragraph(_) => NodeKind::Paragraph,
            ContentNode::ListItem(_) => NodeKind::ListItem,
            ContentNode::InlineImage(_) => NodeKind::InlineImage,
            ContentNode::Table(_) => NodeKind::Table,
            ContentNode::Unsupported => NodeKind::Unsupported,
        }
    }
}

/// Explicit node attributes win; otherwise the attributes all runs agree on.
fn node_style<'a>(
    attributes: &'a Option<StyleAttributes>,
    runs: &[TextRun],
) -> Cow<'a, StyleAttributes> {
    match attributes {
        Some(attrs) => Cow::Borrowed(attrs),
        None => Cow::Owned(StyleAttributes::common(runs)),
    }
}

fn concat_runs(runs: &[TextRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heading_levels() {
        assert_eq!(ParagraphHeading::Normal.level(), 0);
        assert_eq!(ParagraphHeading::Heading1.level(), 1);
        assert_eq!(ParagraphHeading::Heading6.level(), 6);
        assert_eq!(ParagraphHeading::Title.level(), 0);
        assert_eq!(ParagraphHeading::Subtitle.level(), 0);
    }

    #[test]
    fn deserializes_tagged_nodes() {
        let nodes: Vec<ContentNode> = serde_json::from_value(json!([
            {
                "type": "paragraph",
                "heading": "HEADING2",
                "children": [{ "text": "Intro", "attributes": { "bold": true } }]
            },
            { "type": "listItem", "nestingLevel": 1, "glyphKind": "NUMBER", "children": [] },
            { "type": "inlineImage", "data": "AAEC", "mimeType": "image/png" },
            { "type": "table", "rows": [[{ "children": [] }]] },
            { "type": "horizontalRule" }
        ]))
        .unwrap();

        let kinds: Vec<NodeKind> = nodes.iter().map(ContentNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Paragraph,
                NodeKind::ListItem,
                NodeKind::InlineImage,
                NodeKind::Table,
                NodeKind::Unsupported,
            ]
        );

        match &nodes[0] {
            ContentNode::Paragraph(p) => {
                assert_eq!(p.heading, ParagraphHeading::Heading2);
                assert_eq!(p.text(), "Intro");
                assert!(p.children[0].attributes.is_bold());
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
        match &nodes[2] {
            ContentNode::InlineImage(img) => assert_eq!(img.bytes, vec![0u8, 1, 2]),
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn list_item_defaults_to_top_level_bullet() {
        let node: ContentNode =
            serde_json::from_value(json!({ "type": "listItem", "children": [{ "text": "a" }] }))
                .unwrap();
        match node {
            ContentNode::ListItem(item) => {
                assert_eq!(item.nesting_level, 0);
                assert_eq!(item.glyph_kind, GlyphKind::Bullet);
                assert_eq!(item.text(), "a");
            }
            other => panic!("expected list item, got {:?}", other),
        }
    }

    #[test]
    fn missing_node_attributes_fall_back_to_run_attributes() {
        let node: ContentNode = serde_json::from_value(json!({
            "type": "paragraph",
            "children": [
                { "text": "a", "attributes": { "fontFamily": "Arial", "bold": true } },
                { "text": "b", "attributes": { "fontFamily": "Arial" } }
            ]
        }))
        .unwrap();
        match node {
            ContentNode::Paragraph(p) => {
                assert_eq!(p.attributes, None);
                let style = p.style();
                assert_eq!(style.font_family.as_deref(), Some("Arial"));
                assert_eq!(style.bold, None);
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn explicit_node_attributes_win_over_runs() {
        let item = ListItem {
            children: vec![TextRun {
                text: "x".into(),
                attributes: StyleAttributes {
                    italic: Some(true),
                    ..Default::default()
                },
            }],
            attributes: Some(StyleAttributes::default()),
            ..Default::default()
        };
        assert_eq!(*item.style(), StyleAttributes::default());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result: Result<ContentNode, _> = serde_json::from_value(
            json!({ "type": "inlineImage", "data": "not base64!", "mimeType": "image/png" }),
        );
        assert!(result.is_err());
    }
}
