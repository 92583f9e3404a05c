//! groot-cfind
//!
//! Workspace and configuration file locator for catkin-style trees.
//!
//! Ascends from a start directory to the nearest workspace root, then
//! scans downward for files matching a substring or glob pattern. Exit
//! codes follow the grep convention: 0 match, 1 no match, 2 error.

use anyhow::{Context, Result};
use clap::Parser;
use groot_locator::{
    find_workspace_root, resolve_start, AscentBounds, FilePattern, LocatorConfig, MarkerSet,
    WorkspaceLocator,
};
use std::path::PathBuf;

mod args;
mod output;

use args::CfindArgs;

const EXIT_MATCH: i32 = 0;
const EXIT_NO_MATCH: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let args = CfindArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("groot-cfind: {err:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run(args: &CfindArgs) -> Result<i32> {
    let pattern = FilePattern::new(args.pattern.as_deref()).context("invalid pattern")?;

    let config = resolve_config(args)?;
    let locator = WorkspaceLocator::new(config)?;

    let outcome = locator.locate(
        &args.start,
        &pattern,
        args.direction(),
        args.effective_limit(),
    )?;
    log::debug!(
        "Examined {} candidates under {}, matched {}",
        outcome.scanned,
        outcome.root.display(),
        outcome.matches.len()
    );

    if !args.quiet {
        let mut stdout = std::io::stdout().lock();
        if args.json {
            output::render_json(&outcome, args.pattern.as_deref(), &mut stdout)?;
        } else {
            let cwd = std::env::current_dir()?;
            output::render_plain(&outcome, &cwd, args.absolute, &mut stdout)?;
        }
    }

    Ok(if outcome.matches.is_empty() {
        EXIT_NO_MATCH
    } else {
        EXIT_MATCH
    })
}

/// Effective settings: built-ins, overlaid by the discovered config file,
/// overlaid by flags.
fn resolve_config(args: &CfindArgs) -> Result<LocatorConfig> {
    let workspace_root = pre_config_root(args)?;
    let (mut config, config_path) =
        LocatorConfig::discover(args.config.as_deref(), workspace_root.as_deref())?;
    if let Some(path) = &config_path {
        log::debug!("Using config {}", path.display());
    }

    config.markers.extend(args.markers.iter().cloned());
    config.exclude.extend(args.excludes.iter().cloned());
    if args.hidden {
        config.include_hidden = true;
    }
    if args.no_ignore {
        config.respect_ignore_files = false;
    }
    if args.follow {
        config.follow_symlinks = true;
    }
    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }

    Ok(config)
}

/// Workspace root probe used to find a root-level config file. Runs before
/// the config loads, so only built-in and `--marker` markers steer it.
fn pre_config_root(args: &CfindArgs) -> Result<Option<PathBuf>> {
    let mut markers = MarkerSet::default();
    markers.extend_from(args.markers.iter().map(String::as_str))?;

    // An unusable start path is reported by locate() with full context.
    let Ok(start) = resolve_start(&args.start) else {
        return Ok(None);
    };

    let bounds = AscentBounds::for_start(&start, LocatorConfig::default().max_height);
    let (root, _) = find_workspace_root(&start, &markers, &bounds)?;
    Ok(root)
}
