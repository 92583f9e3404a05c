use crate::ascent::{self, AscentBounds};
use crate::config::LocatorConfig;
use crate::error::Result;
use crate::markers::MarkerSet;
use crate::pattern::FilePattern;
use crate::scanner::{ScanOptions, TreeScanner};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where to look, relative to the start directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    /// Ascend to the nearest workspace root, then scan downward from it;
    /// falls back to scanning from the start directory when no root
    /// exists.
    Auto,
}

/// One located file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Found {
    pub path: PathBuf,
    /// Slash-normalized path relative to the effective search root.
    pub rel_path: String,
    /// Ancestor height for upward hits (0 = start directory), directory
    /// depth below the root for downward hits (1 = direct child).
    pub depth: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub root: PathBuf,
    pub direction: Direction,
    /// Candidate files/directories examined before pattern matching.
    pub scanned: usize,
    pub matches: Vec<Found>,
    pub truncated: bool,
}

/// Workspace discovery entry point: owns the effective configuration and
/// marker set, dispatches on direction.
pub struct WorkspaceLocator {
    config: LocatorConfig,
    markers: MarkerSet,
}

impl WorkspaceLocator {
    pub fn new(config: LocatorConfig) -> Result<Self> {
        let mut markers = MarkerSet::default();
        markers.extend_from(config.markers.iter().map(String::as_str))?;
        Ok(Self { config, markers })
    }

    #[must_use]
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Nearest marked ancestor of `start`, if any.
    pub fn workspace_root(&self, start: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        let start = ascent::resolve_start(start.as_ref())?;
        let bounds = AscentBounds::for_start(&start, self.config.max_height);
        let (root, _) = ascent::find_workspace_root(&start, &self.markers, &bounds)?;
        Ok(root)
    }

    pub fn locate(
        &self,
        start: impl AsRef<Path>,
        pattern: &FilePattern,
        direction: Direction,
        limit: usize,
    ) -> Result<SearchOutcome> {
        let start = ascent::resolve_start(start.as_ref())?;
        let limit = limit.max(1);
        let bounds = AscentBounds::for_start(&start, self.config.max_height);

        match direction {
            Direction::Up => self.locate_up(&start, pattern, &bounds, limit),
            Direction::Down => self.locate_down(start, Direction::Down, pattern, limit),
            Direction::Auto => {
                let (root, _) = ascent::find_workspace_root(&start, &self.markers, &bounds)?;
                let root = match root {
                    Some(root) => root,
                    None => {
                        log::info!(
                            "No workspace root above {}; scanning from there",
                            start.display()
                        );
                        start
                    }
                };
                self.locate_down(root, Direction::Auto, pattern, limit)
            }
        }
    }

    /// Upward search. An empty pattern means "find the workspace root
    /// itself": the nearest marked ancestor is the single match.
    fn locate_up(
        &self,
        start: &Path,
        pattern: &FilePattern,
        bounds: &AscentBounds,
        limit: usize,
    ) -> Result<SearchOutcome> {
        if pattern.is_any() {
            let (root, visited) = ascent::find_workspace_root(start, &self.markers, bounds)?;
            let matches = root
                .map(|path| {
                    vec![Found {
                        path,
                        rel_path: ".".to_string(),
                        depth: visited.saturating_sub(1),
                    }]
                })
                .unwrap_or_default();

            return Ok(SearchOutcome {
                root: start.to_path_buf(),
                direction: Direction::Up,
                scanned: visited,
                matches,
                truncated: false,
            });
        }

        let (mut matches, visited) = ascent::ascend(start, pattern, bounds)?;
        let truncated = matches.len() > limit;
        matches.truncate(limit);

        Ok(SearchOutcome {
            root: start.to_path_buf(),
            direction: Direction::Up,
            scanned: visited,
            matches,
            truncated,
        })
    }

    fn locate_down(
        &self,
        root: PathBuf,
        direction: Direction,
        pattern: &FilePattern,
        limit: usize,
    ) -> Result<SearchOutcome> {
        let scanner = TreeScanner::new(&root, self.scan_options())?;
        let files = scanner.scan();
        let scanned = files.len();

        let mut matches: Vec<Found> = files
            .into_iter()
            .filter_map(|path| {
                let rel_path = scanner.relative(&path);
                pattern.matches(&rel_path).then(|| Found {
                    depth: rel_path.split('/').count(),
                    path,
                    rel_path,
                })
            })
            .collect();

        matches.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        let truncated = matches.len() > limit;
        matches.truncate(limit);

        Ok(SearchOutcome {
            root,
            direction,
            scanned,
            matches,
            truncated,
        })
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.config.max_depth,
            follow_symlinks: self.config.follow_symlinks,
            include_hidden: self.config.include_hidden,
            respect_ignore_files: self.config.respect_ignore_files,
            exclude: self.config.exclude.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn locator() -> WorkspaceLocator {
        WorkspaceLocator::new(LocatorConfig::default()).unwrap()
    }

    #[test]
    fn limit_zero_is_clamped_to_one() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "").unwrap();
        std::fs::write(temp.path().join("b.txt"), "").unwrap();

        let pattern = FilePattern::new(Some(".txt")).unwrap();
        let outcome = locator()
            .locate(temp.path(), &pattern, Direction::Down, 0)
            .unwrap();

        assert_eq!(outcome.matches.len(), 1);
        assert!(outcome.truncated);
    }

    #[test]
    fn downward_matches_are_sorted_by_rel_path() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/zeta")).unwrap();
        std::fs::create_dir_all(temp.path().join("src/alpha")).unwrap();
        std::fs::write(temp.path().join("src/zeta/package.xml"), "").unwrap();
        std::fs::write(temp.path().join("src/alpha/package.xml"), "").unwrap();

        let pattern = FilePattern::new(Some("package.xml")).unwrap();
        let outcome = locator()
            .locate(temp.path(), &pattern, Direction::Down, 200)
            .unwrap();

        let rels: Vec<&str> = outcome.matches.iter().map(|f| f.rel_path.as_str()).collect();
        assert_eq!(rels, vec!["src/alpha/package.xml", "src/zeta/package.xml"]);
        assert_eq!(outcome.matches[0].depth, 3);
    }
}
