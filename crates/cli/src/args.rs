use clap::Parser;
use groot_locator::Direction;
use std::path::PathBuf;

/// Locate workspace and configuration files in catkin-style trees.
#[derive(Debug, Parser)]
#[command(name = "groot-cfind", version, about)]
pub struct CfindArgs {
    /// File name substring, or a glob when it contains `*`, `?` or `[`.
    /// Omitted: enumerate (downward) or find the workspace root (upward).
    pub pattern: Option<String>,

    /// Directory to start from.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub start: PathBuf,

    /// Search ancestors only.
    #[arg(long, conflicts_with = "down")]
    pub up: bool,

    /// Search the tree below the start directory only.
    #[arg(long)]
    pub down: bool,

    /// Stop after the first match.
    #[arg(long)]
    pub first: bool,

    /// Maximum number of matches reported.
    #[arg(long, default_value_t = 200, value_name = "N")]
    pub limit: usize,

    /// Emit one JSON object instead of one path per line.
    #[arg(long)]
    pub json: bool,

    /// Print absolute paths.
    #[arg(long)]
    pub absolute: bool,

    /// Include hidden files and directories.
    #[arg(long)]
    pub hidden: bool,

    /// Do not honor .gitignore/.ignore files.
    #[arg(long = "no-ignore")]
    pub no_ignore: bool,

    /// Follow symbolic links.
    #[arg(long)]
    pub follow: bool,

    /// Depth cap for downward scans.
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Extra workspace root marker (repeatable).
    #[arg(long = "marker", value_name = "NAME")]
    pub markers: Vec<String>,

    /// Extra exclude glob over root-relative paths (repeatable).
    #[arg(long = "exclude", value_name = "GLOB")]
    pub excludes: Vec<String>,

    /// Explicit groot.yaml instead of the discovery chain.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress result output; report through the exit code only.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CfindArgs {
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.up {
            Direction::Up
        } else if self.down {
            Direction::Down
        } else {
            Direction::Auto
        }
    }

    #[must_use]
    pub fn effective_limit(&self) -> usize {
        if self.first {
            1
        } else {
            self.limit
        }
    }
}
