//! The file selection behind a merge or split.
//!
//! A [`Session`] owns the [`FileList`] and applies the acceptance rules:
//! only `.pdf` files are taken, split mode holds a single file, and
//! switching modes starts over with an empty list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::cards::{CardGrid, FileEntry, FileList, Point};
use crate::error::{Result, SpliceError};
use crate::io::PdfReader;
use crate::utils::{expand_inputs, is_pdf_path};

/// What the session is collecting files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Any number of files, concatenated in list order.
    #[default]
    Merge,
    /// A single file, cut into parts.
    Split,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge => f.write_str("merge"),
            Self::Split => f.write_str("split"),
        }
    }
}

impl FromStr for Mode {
    type Err = SpliceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "split" => Ok(Self::Split),
            _ => Err(SpliceError::invalid_config(format!(
                "Invalid mode: {s}. Must be one of: merge, split"
            ))),
        }
    }
}

/// Selected files plus the current mode.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    files: FileList,
    reader: PdfReader,
}

impl Session {
    /// An empty session in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. The file list is cleared even if the mode is unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.files.clear();
    }

    /// The selected files.
    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Add files, directories or glob patterns.
    ///
    /// Inputs are expanded, anything without a `.pdf` extension is dropped,
    /// and already present paths are skipped. In split mode the list is
    /// replaced by the first accepted file. New entries are probed for page
    /// count and preview size; unreadable files are still added.
    ///
    /// Returns the number of entries added.
    ///
    /// # Errors
    ///
    /// Returns an error only for a malformed glob pattern.
    pub async fn add_files<I, P>(&mut self, inputs: I) -> Result<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut accepted: Vec<PathBuf> = expand_inputs(inputs)?
            .into_iter()
            .filter(|path| is_pdf_path(path))
            .collect();

        if self.mode == Mode::Split {
            accepted.truncate(1);
            if !accepted.is_empty() {
                self.files.clear();
            }
        }

        let mut added = 0;
        for path in accepted {
            if self.files.contains(&path) {
                debug!(path = %path.display(), "already selected");
                continue;
            }
            let entry = FileEntry::probe(path, &self.reader).await;
            if self.files.append(entry) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Remove a file. Returns whether it was present.
    pub fn remove_file(&mut self, path: &Path) -> bool {
        self.files.remove(path).is_some()
    }

    /// Move a file to `target`. See [`FileList::reorder`].
    pub fn reorder(&mut self, path: &Path, target: usize) -> Option<usize> {
        self.files.reorder(path, target)
    }

    /// Move a file to where a drop at `point` lands.
    pub fn move_to_drop(&mut self, path: &Path, point: Point, grid: &CardGrid) -> Option<usize> {
        self.files.move_to_drop(path, point, grid)
    }

    /// Drop every file but keep the mode.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Paths in merge order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.paths()
    }

    /// The file to split, if any.
    pub fn split_target(&self) -> Option<&Path> {
        match self.mode {
            Mode::Split => self.files.get(0).map(|entry| entry.path.as_path()),
            Mode::Merge => None,
        }
    }
}
