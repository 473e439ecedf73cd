//! Fixed values used by the HTML conversion passes.

/// Font size used for body paragraphs that declare none.
pub const DEFAULT_FONT_SIZE_PT: f64 = 12.0;

/// Underlined body paragraphs at or above this size are promoted to a heading.
pub const HEADING_PROMOTION_MIN_SIZE_PT: f64 = 18.0;
/// The heading level a promoted body paragraph is rendered with.
pub const PROMOTED_HEADING_LEVEL: u8 = 3;

// Google Fonts css2 endpoint pieces.
pub const GOOGLE_FONTS_BASE_URL: &str = "https://fonts.googleapis.com/css2?";
pub const FONT_FAMILY_PARAM: &str = "family=";
pub const FONT_FAMILY_SEPARATOR: &str = "&family=";
/// Requests both styles over the full variable weight axis.
pub const FONT_AXIS_QUERY: &str = ":ital,wght@0,100..700;1,100..700";
pub const FONT_DISPLAY_PARAM: &str = "&display=swap";
