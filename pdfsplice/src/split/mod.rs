//! PDF splitting operations.
//!
//! [`SplitSpec`] describes the cut, [`Splitter`] performs it.

pub mod spec;
pub mod splitter;

pub use spec::{PageSpan, SplitSpec};
pub use splitter::{SplitPart, SplitResult, SplitStatistics, Splitter};

use crate::config::SplitConfig;
use crate::error::Result;

/// Split a PDF according to configuration.
///
/// # Errors
///
/// See [`Splitter::split`].
pub async fn split_pdf(config: &SplitConfig) -> Result<SplitResult> {
    Splitter::new().split(config).await
}
