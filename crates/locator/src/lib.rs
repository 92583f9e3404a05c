//! # Groot Locator
//!
//! Workspace and configuration file discovery for catkin-style trees.
//!
//! ## Pipeline
//!
//! ```text
//! Start directory
//!     │
//!     ├──> Ascent (marker probing, bounded by height/ceiling)
//!     │      └─> Workspace root
//!     │
//!     ├──> Tree Scanner (.gitignore aware)
//!     │      └─> Candidate files
//!     │
//!     └──> File Pattern (substring or glob)
//!            └─> Sorted, bounded matches
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use groot_locator::{Direction, FilePattern, LocatorConfig, WorkspaceLocator};
//!
//! fn main() -> groot_locator::Result<()> {
//!     let locator = WorkspaceLocator::new(LocatorConfig::default())?;
//!     let pattern = FilePattern::new(Some("package.xml"))?;
//!     let outcome = locator.locate(".", &pattern, Direction::Auto, 200)?;
//!
//!     for found in &outcome.matches {
//!         println!("{}", found.rel_path);
//!     }
//!     Ok(())
//! }
//! ```

mod ascent;
mod config;
mod error;
mod locate;
mod markers;
mod pattern;
mod scanner;

pub use ascent::{ascend, find_workspace_root, resolve_start, AscentBounds};
pub use config::{LocatorConfig, CONFIG_FILE_NAME};
pub use error::{LocatorError, Result};
pub use locate::{Direction, Found, SearchOutcome, WorkspaceLocator};
pub use markers::MarkerSet;
pub use pattern::{normalize_rel_path, FilePattern};
pub use scanner::{ScanOptions, TreeScanner};
