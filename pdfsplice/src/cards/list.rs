//! The ordered list of selected files.

use std::path::{Path, PathBuf};

use crate::cards::{CardGrid, FileEntry, Point};

/// Files in merge order. Paths are unique.
#[derive(Debug, Clone, Default)]
pub struct FileList {
    entries: Vec<FileEntry>,
}

impl FileList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless its path is already present.
    ///
    /// Returns whether the entry was added.
    pub fn append(&mut self, entry: FileEntry) -> bool {
        if self.contains(&entry.path) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry for `path`, returning it if it was present.
    pub fn remove(&mut self, path: &Path) -> Option<FileEntry> {
        let index = self.position(path)?;
        Some(self.entries.remove(index))
    }

    /// Move the entry for `path` to `target`.
    ///
    /// The entry is taken out first and then inserted at `target`, clamped
    /// to the shortened list. Returns the index it ended up at, or `None` if
    /// the path is not in the list.
    pub fn reorder(&mut self, path: &Path, target: usize) -> Option<usize> {
        let entry = self.remove(path)?;
        let index = target.min(self.entries.len());
        self.entries.insert(index, entry);
        Some(index)
    }

    /// Move the entry for `path` to wherever a drop at `point` lands.
    ///
    /// The insertion index is computed against the layout before the move.
    pub fn move_to_drop(&mut self, path: &Path, point: Point, grid: &CardGrid) -> Option<usize> {
        let target = grid.insertion_index(point, self.len());
        self.reorder(path, target)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index of the entry for `path`.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is(path))
    }

    /// Whether `path` is in the list.
    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    /// Paths in order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|entry| entry.path.clone()).collect()
    }

    /// Sum of the known page counts.
    pub fn total_pages(&self) -> usize {
        self.entries.iter().filter_map(|entry| entry.page_count).sum()
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
