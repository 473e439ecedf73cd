//! Naming and storing generated HTML.

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::errors::{DocsError, Result};

/// MIME type the generated documents are stored with.
pub const HTML_MIME_TYPE: &str = "text/html";

/// Derives the output file name for a document: lowercased, spaces replaced by
/// underscores, with an `.html` suffix. "Weekly Notes" becomes "weekly_notes.html".
pub fn derive_file_name(doc_name: &str) -> String {
    format!("{}.html", doc_name.to_lowercase().replace(' ', "_"))
}

/// A destination for finished HTML documents.
pub trait HtmlSink {
    /// Stores `html` under `file_name` and returns a location the user can open.
    fn store(&self, file_name: &str, html: &str) -> Result<String>;
}

/// Writes documents into a local directory.
#[derive(Debug, Clone)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl HtmlSink for FsSink {
    fn store(&self, file_name: &str, html: &str) -> Result<String> {
        if file_name.is_empty() {
            return Err(DocsError::InvalidInput(
                "Output file name cannot be empty".to_string(),
            ));
        }
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, html)?;
        info!("HTML written to {}", path.display());
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn file_names_are_lowercase_with_underscores() {
        assert_eq!(derive_file_name("Weekly Notes"), "weekly_notes.html");
        assert_eq!(derive_file_name("Q3  Plan"), "q3__plan.html");
        assert_eq!(derive_file_name(""), ".html");
    }

    #[test]
    fn fs_sink_writes_file() {
        let dir = env::temp_dir().join(format!("gdocs-tools-sink-{}", std::process::id()));
        let sink = FsSink::new(&dir);

        let location = sink.store("note.html", "<p>x</p>").unwrap();
        assert_eq!(fs::read_to_string(&location).unwrap(), "<p>x</p>");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn fs_sink_rejects_empty_name() {
        let sink = FsSink::new(env::temp_dir());
        assert!(matches!(
            sink.store("", "<p>x</p>"),
            Err(DocsError::InvalidInput(_))
        ));
    }
}
