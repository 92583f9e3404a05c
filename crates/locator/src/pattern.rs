use crate::error::Result;

/// File name/path matcher with the "substring or glob" convention: a
/// pattern containing glob metacharacters is compiled as a glob, anything
/// else matches by substring against the slash-normalized relative path.
#[derive(Debug, Clone)]
pub enum FilePattern {
    /// Absent or empty pattern: everything matches.
    Any,
    Substring(String),
    Glob {
        pattern: glob::Pattern,
        /// A glob without `/` also matches the bare file name, so
        /// `*.yaml` finds files at any depth.
        match_name: bool,
    },
}

/// `*` and `?` never cross `/`; use `**` to span directories.
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl FilePattern {
    pub fn new(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(Self::Any);
        };

        if raw.contains('*') || raw.contains('?') || raw.contains('[') {
            let pattern = glob::Pattern::new(raw)?;
            Ok(Self::Glob {
                pattern,
                match_name: !raw.contains('/'),
            })
        } else {
            Ok(Self::Substring(raw.to_string()))
        }
    }

    /// Match against a `/`-separated path relative to the search root.
    #[must_use]
    pub fn matches(&self, rel_path: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Substring(needle) => rel_path.contains(needle.as_str()),
            Self::Glob {
                pattern,
                match_name,
            } => {
                if pattern.matches_with(rel_path, MATCH_OPTIONS) {
                    return true;
                }
                if !match_name {
                    return false;
                }
                rel_path
                    .rsplit('/')
                    .next()
                    .is_some_and(|name| pattern.matches_with(name, MATCH_OPTIONS))
            }
        }
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Normalize a relative path for matching: `/` separators on every
/// platform.
#[must_use]
pub fn normalize_rel_path(raw: &str) -> String {
    if raw.contains('\\') {
        raw.replace('\\', "/")
    } else {
        raw.to_string()
    }
}
