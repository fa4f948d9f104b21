//! pdfsplice - Merge and split PDF files page-wise.
//!
//! This library provides the building blocks of a small PDF merge/split
//! tool:
//!
//! - Concatenating documents in a chosen order
//! - Splitting a document per page, in fixed-size chunks, or by page ranges
//! - An ordered, de-duplicated file list with drag-and-drop reordering
//! - A merge/split session with file acceptance rules
//! - Persistent settings for the last used save directory
//!
//! # Examples
//!
//! ## Merge
//!
//! ```no_run
//! use pdfsplice::config::MergeConfig;
//! use pdfsplice::merge;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MergeConfig::new(
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     "files",
//! );
//!
//! let outcome = merge::merge_files(&config).await?;
//! println!("Created {} page document", outcome.statistics.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Split by ranges
//!
//! ```no_run
//! use pdfsplice::config::SplitConfig;
//! use pdfsplice::split::{self, SplitSpec};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let spec: SplitSpec = "1-2,4".parse()?;
//! let config = SplitConfig::new("book.pdf", "files", spec);
//!
//! let result = split::split_pdf(&config).await?;
//! for part in &result.parts {
//!     println!("{}", part.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a merge order
//!
//! ```no_run
//! use pdfsplice::session::{Mode, Session};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(Mode::Merge);
//! session.add_files(["scans/", "cover.pdf"]).await?;
//! session.reorder(Path::new("cover.pdf"), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cards;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod session;
pub mod settings;
pub mod split;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{CompressionLevel, MergeConfig, SplitConfig};
pub use error::{Result, SpliceError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
