// src/models/style.rs

use serde::{Deserialize, Serialize};

use crate::models::content::TextRun;

/// The sparse set of character/paragraph formatting properties carried by a node.
/// Every field is independently optional. An absent field means "inherit/default";
/// for the three boolean toggles absence reads as `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    /// The font family of the text, e.g. "Open Sans".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// The font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<f64>,

    /// The foreground color as a CSS color string (usually `#rrggbb`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

impl StyleAttributes {
    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    pub fn is_underlined(&self) -> bool {
        self.underline.unwrap_or(false)
    }

    /// Flattens the attributes of a sequence of runs into one paragraph-level set.
    ///
    /// A field survives only when every run reports the same value for it, which is how
    /// the Docs editor reports attributes for a whole paragraph. No runs yields the
    /// empty set.
    pub fn common(runs: &[TextRun]) -> StyleAttributes {
        let mut iter = runs.iter().map(|run| &run.attributes);
        let Some(first) = iter.next() else {
            return StyleAttributes::default();
        };

        let mut shared = first.clone();
        for attrs in iter {
            keep_if_equal(&mut shared.font_family, &attrs.font_family);
            keep_if_equal(&mut shared.font_size_pt, &attrs.font_size_pt);
            keep_if_equal(&mut shared.foreground_color, &attrs.foreground_color);
            keep_if_equal(&mut shared.bold, &attrs.bold);
            keep_if_equal(&mut shared.italic, &attrs.italic);
            keep_if_equal(&mut shared.underline, &attrs.underline);
        }
        shared
    }
}

fn keep_if_equal<T: PartialEq>(shared: &mut Option<T>, other: &Option<T>) {
    if shared.as_ref() != other.as_ref() {
        *shared = None;
    }
}
