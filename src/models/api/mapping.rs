//! Maps a Google Docs REST `Document` resource onto the converter's content tree.
//!
//! The REST resource stores images out of line (an inline object ID per paragraph element,
//! with a short-lived download URI in `inlineObjects`), so callers pass the already
//! downloaded image bytes keyed by inline object ID.

use std::collections::HashMap;

use log::{debug, warn};

use crate::models::{
    api::{
        document::{DocsDocument, StructuralElement, Table as ApiTable},
        text::{NamedStyleType, Paragraph as ApiParagraph, TextStyle},
    },
    content::{
        ContentNode, GlyphKind, InlineImage, ListItem, Paragraph, ParagraphHeading, Table,
        TableCell, TextRun,
    },
    document::Document,
    style::StyleAttributes,
};

/// Downloaded bytes of one inline image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Builds the converter `Document` from a REST document and its resolved images.
pub fn to_document(doc: &DocsDocument, images: &HashMap<String, ImageBlob>) -> Document {
    let name = doc.title.clone().unwrap_or_else(|| doc.document_id.clone());
    let content = doc
        .body
        .as_ref()
        .map(|body| body.content.as_slice())
        .unwrap_or_default();

    let mapper = Mapper { doc, images };
    let body = mapper.map_elements(content);
    debug!("Mapped {} structural elements into {} nodes", content.len(), body.len());
    Document::new(name, body)
}

struct Mapper<'a> {
    doc: &'a DocsDocument,
    images: &'a HashMap<String, ImageBlob>,
}

impl Mapper<'_> {
    fn map_elements(&self, elements: &[StructuralElement]) -> Vec<ContentNode> {
        elements
            .iter()
            .flat_map(|element| self.map_element(element))
            .collect()
    }

    fn map_element(&self, element: &StructuralElement) -> Vec<ContentNode> {
        if let Some(paragraph) = &element.paragraph {
            self.map_paragraph(paragraph)
        } else if let Some(table) = &element.table {
            vec![ContentNode::Table(self.map_table(table))]
        } else {
            // Section breaks, tables of contents.
            vec![ContentNode::Unsupported]
        }
    }

    fn map_paragraph(&self, paragraph: &ApiParagraph) -> Vec<ContentNode> {
        let runs = map_runs(paragraph);
        let image_ids: Vec<&str> = paragraph
            .elements
            .iter()
            .filter_map(|e| e.inline_object_element.as_ref())
            .filter_map(|e| e.inline_object_id.as_deref())
            .collect();

        if !image_ids.is_empty() && runs.iter().all(|run| run.text.trim().is_empty()) {
            return image_ids
                .into_iter()
                .filter_map(|id| match self.images.get(id) {
                    Some(blob) => Some(ContentNode::InlineImage(InlineImage {
                        bytes: blob.bytes.clone(),
                        mime_type: blob.mime_type.clone(),
                    })),
                    None => {
                        warn!("Inline object '{}' has no downloaded image, skipping", id);
                        None
                    }
                })
                .collect();
        }

        let attributes = StyleAttributes::common(&runs);

        if let Some(bullet) = &paragraph.bullet {
            let nesting_level = bullet.nesting_level.unwrap_or(0).max(0) as u32;
            let glyph_kind = self.glyph_kind(bullet.list_id.as_deref(), nesting_level);
            return vec![ContentNode::ListItem(ListItem {
                nesting_level,
                glyph_kind,
                children: runs,
                attributes: Some(attributes),
            })];
        }

        let heading = paragraph
            .paragraph_style
            .as_ref()
            .and_then(|style| style.named_style_type)
            .map(heading_from_named_style)
            .unwrap_or_default();

        vec![ContentNode::Paragraph(Paragraph {
            heading,
            children: runs,
            attributes: Some(attributes),
        })]
    }

    fn map_table(&self, table: &ApiTable) -> Table {
        let rows = table
            .table_rows
            .iter()
            .map(|row| {
                row.table_cells
                    .iter()
                    .map(|cell| TableCell {
                        children: self.map_elements(&cell.content),
                    })
                    .collect()
            })
            .collect();
        Table { rows }
    }

    fn glyph_kind(&self, list_id: Option<&str>, nesting_level: u32) -> GlyphKind {
        let level = list_id
            .and_then(|id| self.doc.list(id))
            .and_then(|list| list.nesting_level(nesting_level as usize));

        // Numbered only when the level is defined without a bullet symbol; a missing
        // list or level reads as bulleted.
        match level {
            Some(level) if level.glyph_symbol.is_none() => GlyphKind::Number,
            _ => GlyphKind::Bullet,
        }
    }
}

fn heading_from_named_style(style: NamedStyleType) -> ParagraphHeading {
    match style {
        NamedStyleType::Heading1 => ParagraphHeading::Heading1,
        NamedStyleType::Heading2 => ParagraphHeading::Heading2,
        NamedStyleType::Heading3 => ParagraphHeading::Heading3,
        NamedStyleType::Heading4 => ParagraphHeading::Heading4,
        NamedStyleType::Heading5 => ParagraphHeading::Heading5,
        NamedStyleType::Heading6 => ParagraphHeading::Heading6,
        NamedStyleType::Title => ParagraphHeading::Title,
        NamedStyleType::Subtitle => ParagraphHeading::Subtitle,
        NamedStyleType::NormalText
        | NamedStyleType::NamedStyleTypeUnspecified
        | NamedStyleType::Other => ParagraphHeading::Normal,
    }
}

/// Text runs of a paragraph with the terminating newline removed. Runs left empty are dropped.
fn map_runs(paragraph: &ApiParagraph) -> Vec<TextRun> {
    paragraph
        .elements
        .iter()
        .filter_map(|element| element.text_run.as_ref())
        .filter_map(|run| {
            let content = run.content.as_deref().unwrap_or_default();
            let text = content.strip_suffix('\n').unwrap_or(content);
            if text.is_empty() {
                return None;
            }
            Some(TextRun {
                text: text.to_string(),
                attributes: run
                    .text_style
                    .as_ref()
                    .map(style_attributes)
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// Converts a REST `TextStyle` into the sparse attribute record.
pub fn style_attributes(style: &TextStyle) -> StyleAttributes {
    StyleAttributes {
        font_family: style
            .weighted_font_family
            .as_ref()
            .and_then(|f| f.font_family.clone()),
        font_size_pt: style.font_size.as_ref().and_then(|d| d.magnitude),
        foreground_color: style.foreground_color.as_ref().and_then(|c| c.to_hex()),
        bold: style.bold,
        italic: style.italic,
        underline: style.underline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> DocsDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_paragraphs_headings_and_styles() {
        let doc = parse(json!({
            "documentId": "doc-1",
            "title": "Quarterly Report",
            "body": { "content": [
                { "endIndex": 1, "sectionBreak": {} },
                { "paragraph": {
                    "paragraphStyle": { "namedStyleType": "HEADING_2" },
                    "elements": [{ "textRun": {
                        "content": "Summary\n",
                        "textStyle": {
                            "bold": true,
                            "fontSize": { "magnitude": 16, "unit": "PT" },
                            "weightedFontFamily": { "fontFamily": "Lora", "weight": 400 },
                            "foregroundColor": { "color": { "rgbColor": { "red": 1 } } }
                        }
                    }}]
                }}
            ]}
        }));

        let mapped = to_document(&doc, &HashMap::new());
        assert_eq!(mapped.name, "Quarterly Report");
        assert_eq!(mapped.body.len(), 2);
        assert_eq!(mapped.body[0], ContentNode::Unsupported);

        match &mapped.body[1] {
            ContentNode::Paragraph(p) => {
                assert_eq!(p.heading, ParagraphHeading::Heading2);
                assert_eq!(p.text(), "Summary");
                let attrs = p.style();
                assert_eq!(attrs.font_family.as_deref(), Some("Lora"));
                assert_eq!(attrs.font_size_pt, Some(16.0));
                assert_eq!(attrs.foreground_color.as_deref(), Some("#ff0000"));
                assert!(attrs.is_bold());
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn bullets_become_list_items_with_glyph_kind() {
        let doc = parse(json!({
            "documentId": "doc-2",
            "lists": {
                "kix.a": { "listProperties": { "nestingLevels": [
                    { "glyphSymbol": "●" },
                    { "glyphType": "DECIMAL" }
                ]}}
            },
            "body": { "content": [
                { "paragraph": {
                    "bullet": { "listId": "kix.a" },
                    "elements": [{ "textRun": { "content": "first\n" } }]
                }},
                { "paragraph": {
                    "bullet": { "listId": "kix.a", "nestingLevel": 1 },
                    "elements": [{ "textRun": { "content": "second\n" } }]
                }}
            ]}
        }));

        let mapped = to_document(&doc, &HashMap::new());
        match (&mapped.body[0], &mapped.body[1]) {
            (ContentNode::ListItem(first), ContentNode::ListItem(second)) => {
                assert_eq!(first.nesting_level, 0);
                assert_eq!(first.glyph_kind, GlyphKind::Bullet);
                assert_eq!(second.nesting_level, 1);
                assert_eq!(second.glyph_kind, GlyphKind::Number);
                assert_eq!(second.text(), "second");
            }
            other => panic!("expected two list items, got {:?}", other),
        }
    }

    #[test]
    fn missing_list_or_level_reads_as_bullet() {
        let doc = parse(json!({
            "documentId": "doc-6",
            "lists": {
                "kix.short": { "listProperties": { "nestingLevels": [{ "glyphType": "DECIMAL" }] } }
            },
            "body": { "content": [
                { "paragraph": {
                    "bullet": { "listId": "kix.unknown" },
                    "elements": [{ "textRun": { "content": "no list\n" } }]
                }},
                { "paragraph": {
                    "bullet": { "listId": "kix.short", "nestingLevel": 3 },
                    "elements": [{ "textRun": { "content": "no level\n" } }]
                }},
                { "paragraph": {
                    "bullet": { "listId": "kix.short" },
                    "elements": [{ "textRun": { "content": "numbered\n" } }]
                }}
            ]}
        }));

        let kinds: Vec<GlyphKind> = to_document(&doc, &HashMap::new())
            .body
            .iter()
            .map(|node| match node {
                ContentNode::ListItem(item) => item.glyph_kind,
                other => panic!("expected list item, got {:?}", other),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![GlyphKind::Bullet, GlyphKind::Bullet, GlyphKind::Number]
        );
    }

    #[test]
    fn unknown_named_style_maps_to_normal() {
        let doc = parse(json!({
            "documentId": "doc-7",
            "body": { "content": [
                { "paragraph": {
                    "paragraphStyle": { "namedStyleType": "HEADING_7" },
                    "elements": [{ "textRun": { "content": "x\n" } }]
                }}
            ]}
        }));

        match &to_document(&doc, &HashMap::new()).body[0] {
            ContentNode::Paragraph(p) => assert_eq!(p.heading, ParagraphHeading::Normal),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn font_family_comes_from_weighted_font_family_only() {
        let style: TextStyle = serde_json::from_value(json!({
            "weightedFontFamily": { "weight": 700 },
            "fontFamily": "Ignored"
        }))
        .unwrap();
        assert_eq!(style_attributes(&style).font_family, None);

        let style: TextStyle = serde_json::from_value(json!({
            "weightedFontFamily": { "fontFamily": "Merriweather" }
        }))
        .unwrap();
        assert_eq!(
            style_attributes(&style).font_family.as_deref(),
            Some("Merriweather")
        );
    }

    #[test]
    fn image_only_paragraph_becomes_inline_image() {
        let doc = parse(json!({
            "documentId": "doc-3",
            "body": { "content": [
                { "paragraph": { "elements": [
                    { "inlineObjectElement": { "inlineObjectId": "kix.img" } },
                    { "inlineObjectElement": { "inlineObjectId": "kix.missing" } },
                    { "textRun": { "content": "\n" } }
                ]}}
            ]}
        }));
        let mut images = HashMap::new();
        images.insert(
            "kix.img".to_string(),
            ImageBlob {
                bytes: vec![1, 2, 3],
                mime_type: "image/png".to_string(),
            },
        );

        let mapped = to_document(&doc, &images);
        assert_eq!(
            mapped.body,
            vec![ContentNode::InlineImage(InlineImage {
                bytes: vec![1, 2, 3],
                mime_type: "image/png".to_string(),
            })]
        );
    }

    #[test]
    fn tables_map_cell_content_recursively() {
        let doc = parse(json!({
            "documentId": "doc-4",
            "body": { "content": [
                { "table": { "rows": 1, "columns": 1, "tableRows": [
                    { "tableCells": [{ "content": [
                        { "paragraph": { "elements": [{ "textRun": { "content": "cell\n" } }] } },
                        { "paragraph": { "elements": [{ "textRun": { "content": "more\n" } }] } }
                    ]}]}
                ]}}
            ]}
        }));

        let mapped = to_document(&doc, &HashMap::new());
        match &mapped.body[0] {
            ContentNode::Table(table) => {
                assert_eq!(table.rows.len(), 1);
                assert_eq!(table.rows[0][0].children.len(), 2);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn untitled_document_falls_back_to_id() {
        let doc = parse(json!({ "documentId": "doc-5" }));
        let mapped = to_document(&doc, &HashMap::new());
        assert_eq!(mapped.name, "doc-5");
        assert!(mapped.body.is_empty());
    }
}
