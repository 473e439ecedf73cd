pub mod api;
pub mod content;
pub mod document;
pub mod style;
