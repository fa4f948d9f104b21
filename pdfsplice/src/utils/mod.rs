//! Utilities for input path collection and size formatting.

use crate::{Result, error::SpliceError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// Returns a flattened list of resolved paths.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from glob iterator.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern)?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
fn collect_paths_for_pattern<P: AsRef<str>>(pattern: P) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern.as_ref()).map_err(|err| SpliceError::Other {
        message: err.to_string(),
    })?;

    paths
        .map(|entry| {
            entry.map_err(|err| SpliceError::Other {
                message: err.to_string(),
            })
        })
        .collect()
}

/// True if `path` ends in `.pdf`, in any case.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn has_glob_magic(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Turn user-supplied inputs into a flat list of candidate files.
///
/// - An existing directory contributes its direct `.pdf` children, sorted by
///   file name.
/// - A string with glob characters that isn't an existing path is expanded.
/// - Anything else is passed through untouched so the caller can report it.
///
/// Order is preserved across inputs. Nothing is filtered or deduplicated
/// here apart from directory contents.
pub fn expand_inputs<I, P>(inputs: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut expanded = Vec::new();

    for input in inputs {
        let input = input.as_ref();

        if input.is_dir() {
            expanded.extend(pdfs_in_dir(input));
            continue;
        }

        match input.to_str() {
            Some(pattern) if !input.exists() && has_glob_magic(pattern) => {
                expanded.extend(collect_paths_for_patterns([pattern])?);
            }
            _ => expanded.push(input.to_path_buf()),
        }
    }

    Ok(expanded)
}

fn pdfs_in_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_pdf_path(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
