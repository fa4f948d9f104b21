//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Compression levels
//! - Output directory creation
//! - Write statistics
//!
//! Existing files at the destination are replaced without asking.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(&doc, Path::new("out/output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;
use tracing::debug;

use crate::config::CompressionLevel;
use crate::error::{Result, SpliceError};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress content streams before writing.
    pub compress: bool,

    /// Drop objects no longer reachable from the trailer.
    pub prune: bool,

    /// Renumber objects densely from 1.
    pub renumber: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::from(CompressionLevel::default())
    }
}

impl From<CompressionLevel> for WriteOptions {
    fn from(level: CompressionLevel) -> Self {
        let (compress, prune) = match level {
            CompressionLevel::None => (false, false),
            CompressionLevel::Standard => (true, false),
            CompressionLevel::Maximum => (true, true),
        };

        Self {
            atomic: true,
            compress,
            prune,
            renumber: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer for a compression level.
    pub fn for_level(level: CompressionLevel) -> Self {
        Self::with_options(level.into())
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self::with_options(WriteOptions {
            atomic: false,
            ..Default::default()
        })
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).await.map(|_| ())
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// The document is cloned and serialized on the blocking pool.
    pub async fn save_with_stats(&self, doc: &Document, path: &Path) -> Result<WriteStatistics> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            ensure_dir(parent).await?;
        }

        let path_buf = path.to_path_buf();
        let options = self.options.clone();
        let mut doc = doc.clone();

        let stats = task::spawn_blocking(move || write_document(&mut doc, path_buf, &options))
            .await
            .map_err(|e| SpliceError::other(format!("Write task failed: {e}")))??;

        debug!(
            path = %stats.output_path.display(),
            bytes = stats.file_size,
            elapsed_ms = stats.write_time.as_millis() as u64,
            "wrote pdf"
        );

        Ok(stats)
    }
}

/// Create a directory and its parents if they don't exist yet.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| SpliceError::FailedToCreateOutput {
            path: dir.to_path_buf(),
            source: e,
        })
}

fn write_document(
    doc: &mut Document,
    path: PathBuf,
    options: &WriteOptions,
) -> Result<WriteStatistics> {
    let start = Instant::now();

    if options.prune {
        doc.prune_objects();
    }

    if options.compress {
        doc.compress();
    }

    if options.renumber {
        doc.renumber_objects();
    }

    let write_path = if options.atomic {
        temp_path_for(&path)
    } else {
        path.clone()
    };

    if let Err(err) = write_to(doc, &write_path, options.buffer_size) {
        if options.atomic {
            let _ = std::fs::remove_file(&write_path);
        }
        return Err(err);
    }

    if options.atomic {
        std::fs::rename(&write_path, &path).map_err(|e| {
            let _ = std::fs::remove_file(&write_path);
            SpliceError::FailedToWrite {
                path: path.clone(),
                source: e,
            }
        })?;
    }

    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    Ok(WriteStatistics {
        write_time: start.elapsed(),
        file_size,
        output_path: path,
        compressed: options.compress,
    })
}

fn write_to(doc: &mut Document, path: &Path, buffer_size: usize) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| SpliceError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = std::io::BufWriter::with_capacity(buffer_size, file);

    doc.save_to(&mut writer)
        .map_err(|e| SpliceError::FailedToWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    writer.flush().map_err(|e| SpliceError::FailedToWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// `report.pdf` -> `report.pdf.tmp`, next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
