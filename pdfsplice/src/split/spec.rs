//! Split specifications and page spans.
//!
//! A [`SplitSpec`] says how to cut a document; [`SplitSpec::spans`] turns
//! it into concrete 0-based [`PageSpan`]s once the page count is known.
//!
//! Range strings are comma-separated tokens, each either a single page
//! (`"4"`) or an inclusive range (`"1-3"`), 1-based:
//!
//! ```
//! use pdfsplice::split::{PageSpan, SplitSpec};
//!
//! let spec = SplitSpec::parse_ranges("1-2, 4").unwrap();
//! assert_eq!(
//!     spec.spans(5).unwrap(),
//!     vec![PageSpan::new(0, 1), PageSpan::new(3, 3)]
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpliceError};

/// An inclusive run of pages, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSpan {
    /// First page index (0-based).
    pub start: u32,
    /// Last page index (0-based, inclusive).
    pub end: u32,
}

impl PageSpan {
    /// Create a span. `start` must not exceed `end`.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Span covering a single page.
    pub fn single(index: u32) -> Self {
        Self::new(index, index)
    }

    /// Number of pages in the span.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Spans always hold at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First page, 1-based.
    pub fn first_page(&self) -> u32 {
        self.start + 1
    }

    /// Last page, 1-based.
    pub fn last_page(&self) -> u32 {
        self.end + 1
    }

    /// 1-based page numbers covered by this span.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> {
        self.first_page()..=self.last_page()
    }

    /// File name for a part holding this span.
    ///
    /// One-page parts are `page_{n}.pdf`, longer ones `pages_{a}-{b}.pdf`.
    pub fn file_name(&self) -> String {
        if self.start == self.end {
            format!("page_{}.pdf", self.first_page())
        } else {
            format!("pages_{}-{}.pdf", self.first_page(), self.last_page())
        }
    }
}

impl fmt::Display for PageSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.first_page())
        } else {
            write!(f, "{}-{}", self.first_page(), self.last_page())
        }
    }
}

/// How a document should be cut into parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitSpec {
    /// One part per page.
    #[default]
    EveryPage,
    /// Consecutive chunks of up to `n` pages; the last may be shorter.
    FixedStep(u32),
    /// Explicit spans, one part each, in the order given.
    ///
    /// Spans may overlap and need not be sorted.
    CustomRanges(Vec<PageSpan>),
}

impl SplitSpec {
    /// Parse a comma-separated range string into [`SplitSpec::CustomRanges`].
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::InvalidRangeSpec`] if a token is empty,
    /// non-numeric, zero, or a range whose start is after its end.
    pub fn parse_ranges(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(SpliceError::invalid_range(s, "range list is empty"));
        }

        let spans = s
            .split(',')
            .map(parse_token)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::CustomRanges(spans))
    }

    /// Check the parts of the spec that don't depend on the document.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::EveryPage => Ok(()),
            Self::FixedStep(0) => Err(SpliceError::invalid_config(
                "Step size must be at least 1",
            )),
            Self::FixedStep(_) => Ok(()),
            Self::CustomRanges(spans) if spans.is_empty() => Err(SpliceError::invalid_config(
                "At least one page range is required",
            )),
            Self::CustomRanges(_) => Ok(()),
        }
    }

    /// Resolve the spec against a document with `total_pages` pages.
    ///
    /// # Errors
    ///
    /// Fails if the spec is invalid or a custom span reaches past the last
    /// page. The returned error carries no path; callers add it.
    pub fn spans(&self, total_pages: usize) -> Result<Vec<PageSpan>> {
        self.validate()?;

        let total = u32::try_from(total_pages)
            .map_err(|_| SpliceError::split_failed("document has too many pages"))?;

        let spans = match self {
            Self::EveryPage => (0..total).map(PageSpan::single).collect(),
            Self::FixedStep(step) => (0..total)
                .step_by(*step as usize)
                .map(|start| PageSpan::new(start, start.saturating_add(step - 1).min(total - 1)))
                .collect(),
            Self::CustomRanges(spans) => {
                if let Some(bad) = spans.iter().find(|span| span.end >= total) {
                    return Err(SpliceError::InvalidPageRange {
                        path: Default::default(),
                        range: bad.to_string(),
                        total_pages,
                    });
                }
                spans.clone()
            }
        };

        Ok(spans)
    }
}

impl FromStr for SplitSpec {
    type Err = SpliceError;

    /// Accepts `"all"`, `"every"`, `"step:N"`, or a range list.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "all" | "every" => Ok(Self::EveryPage),
            lower => match lower.strip_prefix("step:") {
                Some(n) => n
                    .trim()
                    .parse::<u32>()
                    .map(Self::FixedStep)
                    .map_err(|_| SpliceError::invalid_range(s, format!("'{n}' is not a step size"))),
                None => Self::parse_ranges(trimmed),
            },
        }
    }
}

fn parse_token(token: &str) -> Result<PageSpan> {
    let token = token.trim();
    if token.is_empty() {
        return Err(SpliceError::invalid_range(token, "empty range"));
    }

    let (start, end) = match token.split_once('-') {
        Some((start, end)) => (parse_page(token, start)?, parse_page(token, end)?),
        None => {
            let page = parse_page(token, token)?;
            (page, page)
        }
    };

    if start > end {
        return Err(SpliceError::invalid_range(
            token,
            format!("start page {start} is after end page {end}"),
        ));
    }

    Ok(PageSpan::new(start - 1, end - 1))
}

fn parse_page(token: &str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let page: u32 = raw
        .parse()
        .map_err(|_| SpliceError::invalid_range(token, format!("'{raw}' is not a page number")))?;

    if page == 0 {
        return Err(SpliceError::invalid_range(
            token,
            "page numbers start at 1",
        ));
    }

    Ok(page)
}
