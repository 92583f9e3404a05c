use crate::error::Result;
use crate::pattern::normalize_rel_path;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Filters applied to a downward scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub max_depth: Option<usize>,
    pub follow_symlinks: bool,
    pub include_hidden: bool,
    /// Honor `.gitignore`/`.ignore` files found in the tree.
    pub respect_ignore_files: bool,
    /// Globs evaluated against root-relative paths.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: false,
            include_hidden: false,
            respect_ignore_files: true,
            exclude: Vec::new(),
        }
    }
}

/// Gitignore-aware recursive file scanner rooted at one directory.
pub struct TreeScanner {
    root: PathBuf,
    options: ScanOptions,
    exclude: GlobSet,
}

impl TreeScanner {
    pub fn new(root: impl AsRef<Path>, options: ScanOptions) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &options.exclude {
            builder.add(Glob::new(pattern)?);
        }
        let exclude = builder.build()?;

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            options,
            exclude,
        })
    }

    /// All regular files surviving the filters, sorted by path. Unreadable
    /// subtrees degrade to a logged warning.
    #[must_use]
    pub fn scan(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return Vec::new();
        }

        let mut walker = WalkBuilder::new(&self.root);
        walker
            .hidden(!self.options.include_hidden)
            .follow_links(self.options.follow_symlinks)
            .max_depth(self.options.max_depth);

        if self.options.respect_ignore_files {
            // Catkin workspaces are not always git roots; apply .gitignore
            // rules even without a .git directory.
            walker.require_git(false);
        } else {
            walker
                .ignore(false)
                .git_ignore(false)
                .git_global(false)
                .git_exclude(false)
                .parents(false);
        }

        let mut files = Vec::new();
        for entry in walker.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ty| ty.is_file()) {
                continue;
            }
            if self.is_excluded(entry.path()) {
                continue;
            }
            files.push(entry.into_path());
        }

        files.sort();
        files
    }

    /// Slash-normalized path relative to the scan root.
    #[must_use]
    pub fn relative(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        normalize_rel_path(&rel.to_string_lossy())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude.is_match(rel)
    }
}
