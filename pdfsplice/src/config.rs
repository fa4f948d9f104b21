//! Configuration for merge and split operations.
//!
//! Front-ends turn user input into a [`MergeConfig`] or [`SplitConfig`],
//! call `validate()`, and hand the result to the merger or splitter. This
//! module handles:
//! - Validation of argument combinations
//! - Output file name normalization
//! - Compression level parsing

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::SpliceError;
use crate::split::SplitSpec;

/// File name used when the user leaves the merge output name empty.
pub const DEFAULT_MERGED_NAME: &str = "merged.pdf";

/// Compression level for written PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression - preserves exact quality and structure.
    None,
    /// Balanced compression - good trade-off between size and processing time.
    #[default]
    Standard,
    /// Maximum compression - also drops unreferenced objects and renumbers.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = SpliceError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(SpliceError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// Normalize a user-entered output file name.
///
/// Surrounding whitespace is trimmed, an empty name becomes
/// [`DEFAULT_MERGED_NAME`], and `.pdf` is appended unless the name already
/// ends with it (case-insensitive).
///
/// ```
/// use pdfsplice::config::normalize_output_name;
///
/// assert_eq!(normalize_output_name("  "), "merged.pdf");
/// assert_eq!(normalize_output_name("report"), "report.pdf");
/// assert_eq!(normalize_output_name("Report.PDF"), "Report.PDF");
/// ```
pub fn normalize_output_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_MERGED_NAME.to_string();
    }

    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}

/// Configuration for a merge operation.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Input PDF file paths (in merge order).
    pub inputs: Vec<PathBuf>,

    /// Directory the merged file is written to. Created if absent.
    pub output_dir: PathBuf,

    /// Output file name, already normalized.
    pub file_name: String,

    /// Compression level for output.
    pub compression: CompressionLevel,

    /// Dry run mode - load and merge in memory but write nothing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl MergeConfig {
    /// Create a config with defaults for everything but inputs and directory.
    pub fn new(inputs: Vec<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            inputs,
            output_dir: output_dir.into(),
            file_name: DEFAULT_MERGED_NAME.to_string(),
            compression: CompressionLevel::default(),
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }

    /// Full path of the merged file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - The file name is empty or contains a path separator
    /// - The output path is one of the inputs
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        if self.file_name.trim().is_empty() {
            bail!("Output file name cannot be empty");
        }

        if Path::new(&self.file_name).components().count() != 1 {
            bail!(
                "Output file name must not contain directories: {}",
                self.file_name
            );
        }

        let output = self.output_path();
        for input in &self.inputs {
            if input == &output {
                bail!(
                    "Output file cannot be the same as an input file: {}",
                    output.display()
                );
            }
        }

        Ok(())
    }

    /// Check if progress output should be displayed.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}

/// Configuration for a split operation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// The PDF to split.
    pub input: PathBuf,

    /// Directory the parts are written to. Created if absent.
    pub output_dir: PathBuf,

    /// How to cut the document.
    pub spec: SplitSpec,

    /// Compression level for each part.
    pub compression: CompressionLevel,

    /// Dry run mode - resolve and name parts but write nothing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,
}

impl SplitConfig {
    /// Create a config with defaults for everything but the essentials.
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, spec: SplitSpec) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            spec,
            compression: CompressionLevel::default(),
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if verbose and quiet are both set, or the split
    /// specification is unusable regardless of the document.
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            bail!("Cannot use both --verbose and --quiet");
        }

        self.spec.validate()?;

        Ok(())
    }
}
