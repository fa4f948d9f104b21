//! PDF merging operations.
//!
//! This module provides the merge side of pdfsplice:
//! - Document concatenation in input order
//! - Page tree rewriting shared with the splitter
//! - Writing the merged result
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::merge::merge_files;
//! use pdfsplice::config::MergeConfig;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = MergeConfig::new(
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     "files",
//! );
//! config.file_name = "book.pdf".to_string();
//!
//! let outcome = merge_files(&config).await?;
//! println!("Merged {} pages", outcome.statistics.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;
pub mod pages;

pub use merger::{MergeResult, MergeStatistics, Merger};
pub use pages::PageExtractor;

use crate::config::MergeConfig;
use crate::error::Result;
use crate::io::{PdfWriter, WriteStatistics};
use lopdf::Document;
use std::path::PathBuf;

/// What [`merge_files`] did.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Where the merged file went, or would go on a dry run.
    pub output_path: PathBuf,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Write statistics; `None` on a dry run.
    pub write: Option<WriteStatistics>,
}

/// Merge multiple PDF files according to configuration.
///
/// Convenience function that creates a merger and performs the merge
/// without writing anything.
///
/// # Errors
///
/// Returns an error if any merge step fails.
pub async fn merge_pdfs(config: &MergeConfig) -> Result<(Document, MergeStatistics)> {
    let merger = Merger::new();
    let result = merger.merge(config).await?;
    Ok((result.document, result.statistics))
}

/// Validate `config`, merge its inputs and write the result to
/// [`MergeConfig::output_path`].
///
/// The output directory is created if needed and an existing file is
/// replaced. On a dry run the merge still happens so bad inputs are
/// reported, but nothing is written.
///
/// # Errors
///
/// Returns an error if validation, loading, merging or writing fails.
pub async fn merge_files(config: &MergeConfig) -> Result<MergeOutcome> {
    config.validate()?;

    let (document, statistics) = merge_pdfs(config).await?;
    let output_path = config.output_path();

    let write = if config.dry_run {
        None
    } else {
        let writer = PdfWriter::for_level(config.compression);
        Some(writer.save_with_stats(&document, &output_path).await?)
    };

    Ok(MergeOutcome {
        output_path,
        statistics,
        write,
    })
}
