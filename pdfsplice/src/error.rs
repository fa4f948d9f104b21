//! Error types for pdfsplice.
//!
//! Every fallible operation in the library returns [`SpliceError`]. Variants
//! carry the path or range text involved so messages can be shown to the
//! user as-is.
//!
//! # Error Categories
//!
//! - **I/O Errors**: File not found, permission denied, etc.
//! - **PDF Errors**: Invalid PDF structure, corrupted or encrypted files
//! - **Range Errors**: Malformed split specifications and out-of-bounds pages
//! - **Assembly Errors**: Problems while rebuilding a page tree

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfsplice operations.
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Main error type for pdfsplice operations.
#[derive(Debug, thiserror::Error)]
pub enum SpliceError {
    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is corrupted or has invalid structure.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", path.display())]
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// No files were provided for merging.
    #[error("No PDF files to merge")]
    NoFilesToMerge,

    /// No file was provided for splitting.
    #[error("No PDF file to split")]
    NoFileToSplit,

    /// Failed to create an output file or directory.
    #[error("Failed to create output: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to an output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A split range specification could not be parsed.
    #[error("Invalid page range '{spec}': {reason}")]
    InvalidRangeSpec {
        /// The offending specification (or token).
        spec: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A page range points outside the document.
    #[error(
        "Invalid page range '{range}' for PDF: {}\n  \
         PDF has {total_pages} page(s). Page numbers must be between 1 and {total_pages}",
        path.display()
    )]
    InvalidPageRange {
        /// Path to the PDF file.
        path: PathBuf,
        /// Requested page range (1-based, as the user wrote it).
        range: String,
        /// Total pages in the PDF.
        total_pages: usize,
    },

    /// Merge operation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Split operation failed.
    #[error("Split operation failed: {reason}")]
    SplitFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Settings file could not be read or written.
    #[error("Settings error: {}\n  Reason: {reason}", path.display())]
    Settings {
        /// Path of the settings file.
        path: PathBuf,
        /// Details about the failure.
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for SpliceError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for SpliceError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<SpliceError>() {
            Ok(err) => err,
            Err(err) => Self::invalid_config(err.to_string()),
        }
    }
}

impl SpliceError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an InvalidRangeSpec error.
    pub fn invalid_range(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRangeSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create a SplitFailed error.
    pub fn split_failed(reason: impl Into<String>) -> Self {
        Self::SplitFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a Settings error.
    pub fn settings(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::Settings {
            path,
            reason: reason.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// True when there was simply nothing to do.
    ///
    /// These are shown as warnings rather than failures.
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, Self::NoFilesToMerge | Self::NoFileToSplit)
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::CorruptedPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::NoFilesToMerge => 1,
            Self::NoFileToSplit => 1,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidRangeSpec { .. } => 1,
            Self::InvalidPageRange { .. } => 1,
            Self::MergeFailed { .. } => 6,
            Self::SplitFailed { .. } => 6,
            Self::InvalidConfig { .. } => 1,
            Self::Settings { .. } => 2,
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}
