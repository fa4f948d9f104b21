//! The card model: selected files, their order, and drop targeting.
//!
//! # Examples
//!
//! ```
//! use pdfsplice::cards::{CardGrid, FileEntry, FileList, Point};
//! use std::path::Path;
//!
//! let mut list = FileList::new();
//! list.append(FileEntry::new("a.pdf"));
//! list.append(FileEntry::new("b.pdf"));
//!
//! // Drop b.pdf above the first row.
//! let grid = CardGrid::default();
//! list.move_to_drop(Path::new("b.pdf"), Point::new(0.0, 0.0), &grid);
//! assert_eq!(list.get(0).unwrap().display_name(), "b.pdf");
//! ```

pub mod entry;
pub mod grid;
pub mod list;

pub use entry::FileEntry;
pub use grid::{CardGrid, Point, Rect};
pub use list::FileList;
