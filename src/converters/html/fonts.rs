//! The font pass: collects every declared font family in the tree and turns the set
//! into a Google Fonts stylesheet link.

use std::collections::BTreeSet;

use log::debug;

use super::constants::*;
use crate::models::content::{ContentNode, TextRun};

/// Collects the distinct font families declared on text runs anywhere in `nodes`.
///
/// Paragraphs and list items contribute the fonts of their runs. Tables are descended
/// cell by cell, but only the first child of each cell is visited. Images and unsupported
/// nodes contribute nothing. Names are case-sensitive; the set is sorted so repeated
/// calls produce the same link.
pub fn collect_fonts(nodes: &[ContentNode]) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();
    for node in nodes {
        collect_node_fonts(node, &mut fonts);
    }
    debug!("Collected {} distinct font families", fonts.len());
    fonts
}

fn collect_node_fonts(node: &ContentNode, fonts: &mut BTreeSet<String>) {
    match node {
        ContentNode::Paragraph(paragraph) => collect_run_fonts(&paragraph.children, fonts),
        ContentNode::ListItem(item) => collect_run_fonts(&item.children, fonts),
        ContentNode::Table(table) => {
            for cell in table.rows.iter().flatten() {
                match cell.first_child() {
                    Some(child) => collect_node_fonts(child, fonts),
                    None => debug!("Skipping table cell with no content"),
                }
            }
        }
        ContentNode::InlineImage(_) | ContentNode::Unsupported => {}
    }
}

fn collect_run_fonts(runs: &[TextRun], fonts: &mut BTreeSet<String>) {
    for run in runs {
        if let Some(family) = run.attributes.font_family.as_deref() {
            if !family.is_empty() {
                fonts.insert(family.to_string());
            }
        }
    }
}

/// Builds the Google Fonts css2 URL loading every family in `fonts` in both styles over
/// the full weight axis.
///
/// An empty set still yields a well-formed URL with an empty `family` parameter.
pub fn build_font_link<I, S>(fonts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let families: Vec<String> = fonts
        .into_iter()
        .map(|font| format!("{}{}", font.as_ref().replace(' ', "+"), FONT_AXIS_QUERY))
        .collect();

    format!(
        "{}{}{}{}",
        GOOGLE_FONTS_BASE_URL,
        FONT_FAMILY_PARAM,
        families.join(FONT_FAMILY_SEPARATOR),
        FONT_DISPLAY_PARAM
    )
}
