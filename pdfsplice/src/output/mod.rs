//! Output formatting and display for pdfsplice.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Error and warning display
//! - Summary reports for merges, splits and page listings
//! - Quiet and verbose modes
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::output::OutputFormatter;
//! use pdfsplice::config::MergeConfig;
//!
//! # fn example(config: MergeConfig) {
//! let formatter = OutputFormatter::from_config(&config);
//! formatter.info("Starting merge operation");
//! formatter.success("Merge completed successfully");
//! # }
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::cards::FileList;
use crate::config::{MergeConfig, SplitConfig};
use crate::merge::MergeOutcome;
use crate::split::SplitResult;

/// Anything that carries quiet/verbose flags.
pub trait OutputPreferences {
    /// Suppress non-error output.
    fn quiet(&self) -> bool;
    /// Show verbose output.
    fn verbose(&self) -> bool;
}

impl OutputPreferences for MergeConfig {
    fn quiet(&self) -> bool {
        self.quiet
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl OutputPreferences for SplitConfig {
    fn quiet(&self) -> bool {
        self.quiet
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

/// List the selected files with their page counts.
pub fn display_file_list(formatter: &OutputFormatter, files: &FileList) {
    for (index, entry) in files.iter().enumerate() {
        formatter.list_item(
            index + 1,
            &format!("{} ({})", entry.display_name(), entry.page_label()),
        );
        if let Some((width, height)) = entry.page_size {
            formatter.detail("First page", &format!("{width:.0} x {height:.0} pt"));
        }
    }
}

/// Report the outcome of a merge.
pub fn display_merge_summary(formatter: &OutputFormatter, outcome: &MergeOutcome) {
    let stats = &outcome.statistics;

    match &outcome.write {
        Some(write) => formatter.success(&format!(
            "Merged {} file(s), {} pages into {} ({})",
            stats.files_merged,
            stats.total_pages,
            outcome.output_path.display(),
            write.format_file_size()
        )),
        None => formatter.info(&format!(
            "Dry run: would merge {} file(s), {} pages into {}",
            stats.files_merged,
            stats.total_pages,
            outcome.output_path.display()
        )),
    }

    formatter.detail("Input size", &stats.format_input_size());
    formatter.detail(
        "Load time",
        &format!("{:.2}s", stats.load_time.as_secs_f64()),
    );
    formatter.detail(
        "Total time",
        &format!("{:.2}s", stats.merge_time.as_secs_f64()),
    );
}

/// Report the outcome of a split.
pub fn display_split_summary(formatter: &OutputFormatter, result: &SplitResult, dry_run: bool) {
    for (index, part) in result.parts.iter().enumerate() {
        formatter.list_item(
            index + 1,
            &format!(
                "{} (pages {}, {} page(s))",
                part.path.display(),
                part.span,
                part.page_count
            ),
        );
    }

    let stats = &result.statistics;
    if dry_run {
        formatter.info(&format!(
            "Dry run: would write {} part(s) from {} pages",
            stats.parts_written, stats.source_pages
        ));
    } else {
        formatter.success(&format!(
            "Wrote {} part(s) from {} pages ({})",
            stats.parts_written,
            stats.source_pages,
            stats.format_output_size()
        ));
    }

    formatter.detail(
        "Total time",
        &format!("{:.2}s", stats.split_time.as_secs_f64()),
    );
}
