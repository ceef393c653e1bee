use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};
use walkdir::WalkDir;

use crate::config::ScanSettings;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Split off the leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Compare names so that digit runs order by value: `2` before `10`.
///
/// Runs of equal value fall back to their width, so `01` sorts after `1`.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a, b);
    loop {
        match (a.chars().next(), b.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (run_a, rest_a) = split_digits(a);
                let (run_b, rest_b) = split_digits(b);
                let (va, vb) = (run_a.trim_start_matches('0'), run_b.trim_start_matches('0'));
                let ord = va
                    .len()
                    .cmp(&vb.len())
                    .then_with(|| va.cmp(vb))
                    .then_with(|| run_a.len().cmp(&run_b.len()));
                if ord != Ordering::Equal {
                    return ord;
                }
                a = rest_a;
                b = rest_b;
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a = &a[x.len_utf8()..];
                b = &b[y.len_utf8()..];
            }
        }
    }
}

fn walker(dir: &Path, settings: &ScanSettings) -> Result<WalkDir, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }
    // Sibling order decides record adjacency; natural order keeps
    // unpadded track numbers ascending.
    if settings.sort {
        walker = walker.sort_by(|a, b| {
            natural_cmp(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
        });
    }
    Ok(walker)
}

/// Recursively list every regular file under `dir`, in traversal order.
///
/// The first I/O error aborts the walk.
pub fn collect(dir: &Path, settings: &ScanSettings) -> Result<Vec<String>, ScanError> {
    debug!(dir = %dir.display(), "collecting files");

    let mut files = Vec::new();
    for entry in walker(dir, settings)?
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = entry.map_err(|e| {
            error!("{e}");
            e
        })?;
        if entry.file_type().is_file() {
            files.push(entry.path().display().to_string());
        }
    }

    debug!(count = files.len(), "collected files");
    Ok(files)
}

/// Number of entries under `dir`, the root and directories included.
pub fn count_entries(dir: &Path, settings: &ScanSettings) -> Result<u64, ScanError> {
    let mut count = 0;
    for entry in walker(dir, settings)?
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        entry?;
        count += 1;
    }
    Ok(count)
}
