use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// ws/
///   .catkin_tools/
///   src/pkg_a/package.xml
///   src/pkg_b/package.xml
fn build_workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let ws = temp.path().join("ws");
    fs::create_dir_all(ws.join(".catkin_tools")).unwrap();
    fs::create_dir_all(ws.join("src/pkg_a")).unwrap();
    fs::create_dir_all(ws.join("src/pkg_b")).unwrap();
    fs::write(ws.join("src/pkg_a/package.xml"), "<package/>").unwrap();
    fs::write(ws.join("src/pkg_b/package.xml"), "<package/>").unwrap();
    (temp, ws)
}

fn cfind(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("groot-cfind").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn finds_package_manifests_from_inside_the_workspace() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws).arg("package.xml").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec!["src/pkg_a/package.xml", "src/pkg_b/package.xml"]
    );
}

#[test]
fn ascends_to_the_workspace_root_before_scanning() {
    let (_temp, ws) = build_workspace();
    let deep = ws.join("src/pkg_a");

    let output = cfind(&deep).arg("package.xml").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2, "both packages found from a nested start");
}

#[test]
fn no_match_exits_one_with_empty_stdout() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws).arg("nothing-here").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_glob_exits_two() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws).arg("[unclosed").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("pattern"), "stderr: {stderr}");
}

#[test]
fn first_flag_stops_after_one_match() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws).args(["package.xml", "--first"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["src/pkg_a/package.xml"]);
}

#[test]
fn up_without_pattern_prints_the_workspace_root() {
    let (_temp, ws) = build_workspace();
    let deep = ws.join("src/pkg_a");

    let output = cfind(&deep).arg("--up").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let expected = fs::canonicalize(&ws).unwrap();
    assert_eq!(stdout_lines(&output), vec![expected.display().to_string()]);
}

#[test]
fn json_output_is_a_single_structured_object() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws).args(["package.xml", "--json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["pattern"], "package.xml");
    assert_eq!(value["direction"], "auto");
    assert_eq!(value["returned"], 2);
    assert_eq!(value["truncated"], false);
    assert_eq!(value["files"][0]["rel_path"], "src/pkg_a/package.xml");
}

#[test]
fn quiet_suppresses_output_but_keeps_the_exit_code() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws).args(["package.xml", "--quiet"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let output = cfind(&ws).args(["nothing", "-q"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn workspace_config_file_is_picked_up() {
    let (_temp, ws) = build_workspace();
    fs::write(ws.join("groot.yaml"), "exclude: [\"src/pkg_b/**\"]\n").unwrap();

    let output = cfind(&ws).arg("package.xml").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["src/pkg_a/package.xml"]);
}

#[test]
fn invalid_config_file_exits_two() {
    let (_temp, ws) = build_workspace();
    fs::write(ws.join("groot.yaml"), "markers: 42\n").unwrap();

    let output = cfind(&ws).arg("package.xml").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("groot.yaml"), "stderr: {stderr}");
}

#[test]
fn explicit_config_flag_wins_over_discovery() {
    let (_temp, ws) = build_workspace();
    fs::write(ws.join("groot.yaml"), "exclude: [\"src/pkg_b/**\"]\n").unwrap();
    let other = ws.join("other.yaml");
    fs::write(&other, "exclude: [\"src/pkg_a/**\"]\n").unwrap();

    let output = cfind(&ws)
        .args(["package.xml", "--config"])
        .arg(&other)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["src/pkg_b/package.xml"]);
}

#[test]
fn marker_flag_declares_additional_workspace_roots() {
    let temp = TempDir::new().unwrap();
    let ws = temp.path().join("plain");
    fs::create_dir_all(ws.join("nested/deep")).unwrap();
    fs::write(ws.join(".my_ws"), "").unwrap();
    fs::write(ws.join("nested/target.txt"), "").unwrap();

    let output = cfind(&ws.join("nested/deep"))
        .args(["target.txt", "--marker", ".my_ws"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    // The match sits above the cwd, so the fallback is an absolute path.
    let expected = fs::canonicalize(ws.join("nested/target.txt")).unwrap();
    assert_eq!(stdout_lines(&output), vec![expected.display().to_string()]);
}

#[test]
fn down_flag_stays_below_the_start_directory() {
    let (_temp, ws) = build_workspace();
    let pkg = ws.join("src/pkg_a");

    let output = cfind(&pkg).args(["package.xml", "--down"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["package.xml"]);
}

#[test]
fn limit_truncates_and_json_reports_it() {
    let (_temp, ws) = build_workspace();

    let output = cfind(&ws)
        .args(["package.xml", "--limit", "1", "--json"])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["returned"], 1);
    assert_eq!(value["truncated"], true);
}
