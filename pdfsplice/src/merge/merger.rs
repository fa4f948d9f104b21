//! Core PDF merging implementation.
//!
//! Documents are concatenated in input order. The first document is the
//! base; every later one is renumbered past the running object id, its pages
//! are moved under the base's page tree root, and whatever became
//! unreachable is pruned.

use lopdf::{Document, ObjectId};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::MergeConfig;
use crate::error::{Result, SpliceError};
use crate::io::{LoadedPdf, PdfReader};
use crate::merge::pages::{PageExtractor, adopt_page, root_pages_id};
use crate::utils::format_file_size;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for merge, loading included.
    pub merge_time: Duration,

    /// Time taken to load all PDFs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged, in merge order.
    pub merged_files: Vec<PathBuf>,
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Page extractor for page tree updates.
    page_extractor: PageExtractor,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and merge the inputs of `config`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no inputs
    /// - Any input cannot be loaded (the merge is aborted)
    /// - The page tree cannot be rebuilt
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfsplice::merge::Merger;
    /// # use pdfsplice::config::MergeConfig;
    /// # async fn example(config: MergeConfig) -> Result<(), Box<dyn std::error::Error>> {
    /// let merger = Merger::new();
    /// let result = merger.merge(&config).await?;
    /// println!("Merged {} files into {} pages",
    ///          result.statistics.files_merged,
    ///          result.statistics.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge(&self, config: &MergeConfig) -> Result<MergeResult> {
        if config.inputs.is_empty() {
            return Err(SpliceError::NoFilesToMerge);
        }

        let merge_start = Instant::now();

        let load_start = Instant::now();
        let mut loaded_pdfs = Vec::with_capacity(config.inputs.len());
        for path in &config.inputs {
            loaded_pdfs.push(self.reader.load(path).await?);
        }
        let load_time = load_start.elapsed();

        let document = self.merge_loaded(&loaded_pdfs)?;

        let statistics = MergeStatistics {
            files_merged: loaded_pdfs.len(),
            total_pages: document.get_pages().len(),
            merge_time: merge_start.elapsed(),
            load_time,
            input_size: loaded_pdfs.iter().map(|p| p.file_size).sum(),
        };

        debug!(
            files = statistics.files_merged,
            pages = statistics.total_pages,
            elapsed_ms = statistics.merge_time.as_millis() as u64,
            "merged documents"
        );

        let merged_files = loaded_pdfs.into_iter().map(|p| p.path).collect();

        Ok(MergeResult {
            document,
            statistics,
            merged_files,
        })
    }

    fn merge_loaded(&self, loaded_pdfs: &[LoadedPdf]) -> Result<Document> {
        let documents: Vec<&Document> = loaded_pdfs.iter().map(|p| &p.document).collect();
        self.merge_documents(&documents)
    }

    /// Concatenate already loaded documents into a new one.
    ///
    /// The inputs are not modified.
    pub fn merge_documents(&self, documents: &[&Document]) -> Result<Document> {
        let Some((first, rest)) = documents.split_first() else {
            return Err(SpliceError::NoFilesToMerge);
        };

        let mut merged = (*first).clone();
        let root_id = root_pages_id(&merged)
            .map_err(|e| SpliceError::merge_failed(e.to_string()))?;

        let mut page_ids: Vec<ObjectId> = merged.get_pages().into_values().collect();
        for &page_id in &page_ids {
            adopt_page(&mut merged, page_id, root_id)?;
        }

        for source in rest {
            let mut doc = (*source).clone();
            doc.renumber_objects_with(merged.max_id + 1);

            let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
            for &page_id in &doc_pages {
                adopt_page(&mut doc, page_id, root_id)?;
            }

            merged.max_id = merged.max_id.max(doc.max_id);
            merged.objects.extend(doc.objects);
            page_ids.extend(doc_pages);
        }

        self.page_extractor
            .update_page_tree(&mut merged, &page_ids)
            .map_err(|e| SpliceError::merge_failed(e.to_string()))?;

        merged.prune_objects();

        Ok(merged)
    }
}
