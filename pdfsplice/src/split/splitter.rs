//! Cutting one document into several.
//!
//! Every span is resolved and bounds-checked before the first part is
//! written, so a bad range never leaves partial output behind.

use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::SplitConfig;
use crate::error::{Result, SpliceError};
use crate::io::{PdfReader, PdfWriter};
use crate::merge::PageExtractor;
use crate::split::PageSpan;
use crate::utils::format_file_size;

/// One output file of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPart {
    /// Pages of the source in this part.
    pub span: PageSpan,

    /// Where the part was (or would be) written.
    pub path: PathBuf,

    /// Number of pages in the part.
    pub page_count: usize,
}

/// Statistics about a split operation.
#[derive(Debug, Clone)]
pub struct SplitStatistics {
    /// Pages in the source document.
    pub source_pages: usize,

    /// Number of parts produced.
    pub parts_written: usize,

    /// Pages across all parts. Exceeds `source_pages` when ranges overlap.
    pub pages_written: usize,

    /// Total bytes written.
    pub output_size: u64,

    /// Time taken for the whole split.
    pub split_time: Duration,
}

impl SplitStatistics {
    /// Format output size as human-readable string.
    pub fn format_output_size(&self) -> String {
        format_file_size(self.output_size)
    }
}

/// Result of a split operation.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Parts in the order they were produced.
    pub parts: Vec<SplitPart>,

    /// Statistics about the split.
    pub statistics: SplitStatistics,
}

/// Splits a PDF into parts according to a [`SplitConfig`].
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    reader: PdfReader,
    page_extractor: PageExtractor,
}

impl Splitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `config.input` into `config.output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::NoFileToSplit`] if no input is set, or an
    /// error if the config is invalid, the input cannot be
    /// loaded, a range falls outside the document, or a part cannot be
    /// written. Range errors are raised before anything is written.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfsplice::config::SplitConfig;
    /// # use pdfsplice::split::{SplitSpec, Splitter};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SplitConfig::new("book.pdf", "files", SplitSpec::FixedStep(10));
    /// let result = Splitter::new().split(&config).await?;
    /// for part in &result.parts {
    ///     println!("{} ({} pages)", part.path.display(), part.page_count);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn split(&self, config: &SplitConfig) -> Result<SplitResult> {
        if config.input.as_os_str().is_empty() {
            return Err(SpliceError::NoFileToSplit);
        }
        config.validate()?;

        let start = Instant::now();
        let loaded = self.reader.load(&config.input).await?;

        let spans = config
            .spec
            .spans(loaded.page_count)
            .map_err(|err| match err {
                SpliceError::InvalidPageRange {
                    range, total_pages, ..
                } => SpliceError::InvalidPageRange {
                    path: loaded.path.clone(),
                    range,
                    total_pages,
                },
                other => other,
            })?;

        let mut documents = Vec::with_capacity(spans.len());
        for &span in &spans {
            documents.push(self.page_extractor.extract_span(&loaded.document, span)?);
        }

        let writer = PdfWriter::for_level(config.compression);
        let mut parts = Vec::with_capacity(spans.len());
        let mut output_size = 0;

        for (span, document) in spans.into_iter().zip(documents) {
            let path = config.output_dir.join(span.file_name());

            if !config.dry_run {
                let stats = writer.save_with_stats(&document, &path).await?;
                output_size += stats.file_size;
            }

            debug!(range = %span, path = %path.display(), dry_run = config.dry_run, "split part");

            parts.push(SplitPart {
                span,
                path,
                page_count: self.page_extractor.page_count(&document),
            });
        }

        let statistics = SplitStatistics {
            source_pages: loaded.page_count,
            parts_written: parts.len(),
            pages_written: parts.iter().map(|p| p.page_count).sum(),
            output_size,
            split_time: start.elapsed(),
        };

        Ok(SplitResult { parts, statistics })
    }
}
