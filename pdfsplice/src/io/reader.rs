//! PDF reading and loading operations.
//!
//! Loading checks the path first so a missing file and a broken PDF are
//! reported differently, then classifies lopdf failures (encrypted vs.
//! unreadable).
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().load(Path::new("a.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::{Document, Object};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::{Result, SpliceError};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration, file_size: u64) -> Self {
        let page_count = document.get_pages().len();

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }

    /// Width and height of the first page in points, if it has a media box.
    pub fn first_page_size(&self) -> Option<(f32, f32)> {
        first_page_size(&self.document)
    }
}

/// PDF reader that classifies load failures.
///
/// Documents without pages are rejected as corrupted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist or is not a file
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - The document has no pages
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(SpliceError::file_not_found(path_buf));
            }
            Err(err) => {
                return Err(SpliceError::failed_to_load_pdf(path_buf, err.to_string()));
            }
        };

        if !metadata.is_file() {
            return Err(SpliceError::not_a_file(path_buf));
        }

        let start = Instant::now();

        let doc = Document::load(&path_buf).await.map_err(|e| {
            let err_msg = e.to_string();
            let lower = err_msg.to_lowercase();
            if lower.contains("encrypt") || lower.contains("password") {
                SpliceError::encrypted_pdf(path_buf.clone())
            } else {
                SpliceError::failed_to_load_pdf(path_buf.clone(), err_msg)
            }
        })?;

        if doc.get_pages().is_empty() {
            return Err(SpliceError::corrupted_pdf(path_buf, "PDF has no pages"));
        }

        let loaded = LoadedPdf::new(doc, path_buf, start.elapsed(), metadata.len());
        debug!(
            path = %loaded.path.display(),
            pages = loaded.page_count,
            elapsed_ms = loaded.load_time.as_millis() as u64,
            "loaded pdf"
        );

        Ok(loaded)
    }

    /// Count the pages of a PDF without keeping the document around.
    pub async fn page_count(&self, path: &Path) -> Result<usize> {
        Ok(self.load(path).await?.page_count)
    }
}

/// Width and height of a document's first page, in points.
///
/// Looks at the page's own `MediaBox`, then its ancestors'. The box and its
/// numbers may be indirect objects.
pub fn first_page_size(doc: &Document) -> Option<(f32, f32)> {
    let (_, page_id) = doc.get_pages().into_iter().next()?;

    let mut node = doc.get_dictionary(page_id).ok()?;
    for _ in 0..crate::merge::pages::MAX_TREE_DEPTH {
        if let Ok(value) = node.get(b"MediaBox")
            && let Ok((_, Object::Array(media_box))) = doc.dereference(value)
            && media_box.len() >= 4
        {
            let coord = |i: usize| {
                doc.dereference(&media_box[i])
                    .and_then(|(_, n)| n.as_float())
                    .ok()
            };
            let (llx, lly, urx, ury) = (coord(0)?, coord(1)?, coord(2)?, coord(3)?);
            return Some(((urx - llx).abs(), (ury - lly).abs()));
        }

        let parent = node.get(b"Parent").and_then(|p| p.as_reference()).ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }

    None
}
