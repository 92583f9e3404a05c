use crate::error::{LocatorError, Result};
use crate::locate::Found;
use crate::markers::MarkerSet;
use crate::pattern::FilePattern;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

static HOME_DIR: Lazy<Option<PathBuf>> = Lazy::new(dirs::home_dir);

/// Limits for the ancestor walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AscentBounds {
    /// Number of ancestors visited, the start directory included.
    pub max_height: usize,
    /// Last directory examined; the walk never climbs past it.
    pub ceiling: Option<PathBuf>,
}

impl Default for AscentBounds {
    fn default() -> Self {
        Self {
            max_height: 64,
            ceiling: None,
        }
    }
}

impl AscentBounds {
    /// Bounds with the user's home directory as ceiling when `start` lies
    /// beneath it.
    #[must_use]
    pub fn for_start(start: &Path, max_height: usize) -> Self {
        let ceiling = HOME_DIR
            .as_deref()
            .filter(|home| start.starts_with(home))
            .map(Path::to_path_buf);
        Self {
            max_height,
            ceiling,
        }
    }
}

/// Canonical directory for a search start: the path itself, or its parent
/// when it names a file.
pub fn resolve_start(start: &Path) -> Result<PathBuf> {
    let metadata = std::fs::metadata(start).map_err(|_| {
        LocatorError::InvalidPath(format!("Path does not exist: {}", start.display()))
    })?;

    let dir = if metadata.is_dir() {
        start
    } else {
        start.parent().ok_or_else(|| {
            LocatorError::InvalidPath(format!("Path has no parent: {}", start.display()))
        })?
    };

    Ok(dir.canonicalize()?)
}

/// Nearest ancestor of `start` (itself included) containing a workspace
/// marker, with the number of directories visited.
pub fn find_workspace_root(
    start: &Path,
    markers: &MarkerSet,
    bounds: &AscentBounds,
) -> Result<(Option<PathBuf>, usize)> {
    let mut visited = 0usize;
    for dir in ancestors(start, bounds) {
        visited += 1;
        if markers.matches(dir) {
            return Ok((Some(dir.to_path_buf()), visited));
        }
    }
    Ok((None, visited))
}

/// Match `pattern` against the immediate entries of each ancestor of
/// `start`, nearest-first. `depth` on a hit is the ancestor height
/// (0 = the start directory itself).
pub fn ascend(
    start: &Path,
    pattern: &FilePattern,
    bounds: &AscentBounds,
) -> Result<(Vec<Found>, usize)> {
    let mut matches = Vec::new();
    let mut visited = 0usize;

    for (height, dir) in ancestors(start, bounds).enumerate() {
        visited += 1;
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Skipping unreadable ancestor {}: {err}", dir.display());
                continue;
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();

        for name in names {
            if pattern.matches(&name) {
                matches.push(Found {
                    path: dir.join(&name),
                    rel_path: name,
                    depth: height,
                });
            }
        }
    }

    Ok((matches, visited))
}

/// Ancestors of `start` (itself first), honoring height and ceiling.
fn ancestors<'a>(start: &'a Path, bounds: &'a AscentBounds) -> impl Iterator<Item = &'a Path> {
    let mut current = Some(start);
    let mut height = 0usize;
    let mut past_ceiling = false;

    std::iter::from_fn(move || {
        if past_ceiling || height >= bounds.max_height {
            return None;
        }
        let dir = current?;
        if bounds.ceiling.as_deref() == Some(dir) {
            past_ceiling = true;
        }
        current = dir.parent();
        height += 1;
        Some(dir)
    })
}
