use groot_locator::{Direction, Found, SearchOutcome};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// One path per line on stdout, relative to `cwd` when possible.
pub fn render_plain(
    outcome: &SearchOutcome,
    cwd: &Path,
    absolute: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    for found in &outcome.matches {
        writeln!(out, "{}", display_path(found, cwd, absolute))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    rel_path: &'a str,
    depth: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    pattern: Option<&'a str>,
    root: String,
    direction: Direction,
    scanned: usize,
    returned: usize,
    truncated: bool,
    files: Vec<JsonFile<'a>>,
}

/// A single JSON object on stdout.
pub fn render_json(
    outcome: &SearchOutcome,
    pattern: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = JsonReport {
        pattern,
        root: outcome.root.display().to_string(),
        direction: outcome.direction,
        scanned: outcome.scanned,
        returned: outcome.matches.len(),
        truncated: outcome.truncated,
        files: outcome
            .matches
            .iter()
            .map(|found| JsonFile {
                path: found.path.display().to_string(),
                rel_path: &found.rel_path,
                depth: found.depth,
            })
            .collect(),
    };

    writeln!(out, "{}", serde_json::to_string(&report)?)?;
    Ok(())
}

fn display_path(found: &Found, cwd: &Path, absolute: bool) -> String {
    if absolute {
        return found.path.display().to_string();
    }
    match found.path.strip_prefix(cwd) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => found.path.display().to_string(),
    }
}
