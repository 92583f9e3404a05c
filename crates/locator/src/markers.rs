use crate::error::{LocatorError, Result};
use std::path::Path;

/// Entries that identify a catkin-style workspace root when present
/// directly inside a directory. An entry may contain a single `/` to probe
/// a file inside a well-known subdirectory (result spaces).
const BUILTIN_MARKERS: &[&str] = &[
    ".catkin_tools",
    ".catkin_workspace",
    ".groot",
    "devel/setup.bash",
    "install/setup.bash",
];

/// Ordered, deduplicated set of workspace root markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    names: Vec<String>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            names: BUILTIN_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl MarkerSet {
    /// Build a set from custom names only; an empty list falls back to the
    /// built-in markers.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self { names: Vec::new() };
        set.extend_from(names)?;
        if set.names.is_empty() {
            return Ok(Self::default());
        }
        Ok(set)
    }

    /// Append custom marker names, preserving order and dropping duplicates.
    pub fn extend_from<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let normalized = normalize_marker(name.as_ref())?;
            if normalized.is_empty() {
                continue;
            }
            if !self.names.contains(&normalized) {
                self.names.push(normalized);
            }
        }
        Ok(())
    }

    /// True when any marker entry exists under `dir`. Symlinked markers are
    /// detected without following the link target.
    pub fn matches(&self, dir: &Path) -> bool {
        self.names
            .iter()
            .any(|name| dir.join(name).symlink_metadata().is_ok())
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

fn normalize_marker(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') || trimmed.starts_with('\\') {
        return Err(LocatorError::InvalidMarker(format!(
            "absolute paths are not allowed: {raw}"
        )));
    }
    if trimmed.split(['/', '\\']).any(|part| part == "..") {
        return Err(LocatorError::InvalidMarker(format!(
            "parent components are not allowed: {raw}"
        )));
    }
    Ok(trimmed.to_string())
}
