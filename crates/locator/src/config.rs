use crate::error::{LocatorError, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "groot.yaml";

/// Result spaces and logs never hold files worth locating.
const DEFAULT_EXCLUDES: &[&str] = &["build/**", "devel/**", "install/**", "log/**"];

/// Locator settings, optionally read from a `groot.yaml` file. Flags
/// override config values; config values override the built-ins.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorConfig {
    /// Extra workspace markers, appended to the built-in set.
    pub markers: Vec<String>,
    /// Exclude globs over root-relative paths; replaces the default set
    /// when present in the file.
    pub exclude: Vec<String>,
    pub max_depth: Option<usize>,
    pub max_height: usize,
    pub follow_symlinks: bool,
    pub include_hidden: bool,
    pub respect_ignore_files: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
            exclude: DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect(),
            max_depth: None,
            max_height: 64,
            follow_symlinks: false,
            include_hidden: false,
            respect_ignore_files: true,
        }
    }
}

impl LocatorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&text).map_err(|source| LocatorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Locate and load the effective config. Lookup order: explicit path,
    /// `<workspace root>/groot.yaml`, then the user config directory. A
    /// missing file is not an error; defaults apply.
    pub fn discover(
        explicit: Option<&Path>,
        workspace_root: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LocatorError::InvalidPath(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let mut candidates = Vec::new();
        if let Some(root) = workspace_root {
            candidates.push(root.join(CONFIG_FILE_NAME));
        }
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("groot").join(CONFIG_FILE_NAME));
        }

        for candidate in candidates {
            if candidate.exists() {
                log::debug!("Loading config from {}", candidate.display());
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }
}
