//! A single file in the card list.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::io::PdfReader;

/// A PDF selected for merging or splitting.
///
/// Identity is the path. The page count and first-page size are read once
/// when the entry is created; a file that cannot be read still gets an
/// entry, just without them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Path of the file as it was added.
    pub path: PathBuf,

    /// Number of pages, if the file could be read.
    pub page_count: Option<usize>,

    /// Width and height of the first page in points.
    pub page_size: Option<(f32, f32)>,
}

impl FileEntry {
    /// An entry with nothing probed yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            page_count: None,
            page_size: None,
        }
    }

    /// Open `path` and record its page count and preview size.
    ///
    /// Failures are logged and leave both fields empty.
    pub async fn probe(path: impl Into<PathBuf>, reader: &PdfReader) -> Self {
        let mut entry = Self::new(path);

        match reader.load(&entry.path).await {
            Ok(loaded) => {
                entry.page_count = Some(loaded.page_count);
                entry.page_size = loaded.first_page_size();
            }
            Err(err) => warn!(path = %entry.path.display(), error = %err, "could not read pdf"),
        }

        entry
    }

    /// The file name shown on the card.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Page count for the card caption, `"?"` when unknown.
    pub fn page_label(&self) -> String {
        match self.page_count {
            Some(1) => "1 page".to_string(),
            Some(n) => format!("{n} pages"),
            None => "? pages".to_string(),
        }
    }

    /// True if this entry refers to `path`.
    pub fn is(&self, path: &Path) -> bool {
        self.path == path
    }
}
