use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn run_resnap(args: &[&str], envs: &[(&str, &str)]) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_resnap").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("resnap.exe");
        } else {
            path.push("resnap");
        }
        path.to_string_lossy().into_owned()
    });

    // Isolated HOME so a developer's real config file can't leak in.
    let home = TempDir::new().expect("create temp home");
    let mut cmd = Command::new(bin);
    cmd.args(args);
    cmd.env("HOME", home.path());
    cmd.env("USERPROFILE", home.path());
    for (k, v) in envs {
        cmd.env(k, v);
    }
    let output = cmd.output().expect("run resnap");
    (output.status.success(), output.stdout, output.stderr)
}

#[test]
fn help_lists_new_subcommand() {
    let (ok, stdout, _) = run_resnap(&["--help"], &[]);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("new"));
    assert!(text.contains("--verbose"));
    assert!(text.contains("--quiet"));
}

#[test]
fn new_help_lists_dry_run() {
    let (ok, stdout, _) = run_resnap(&["new", "--help"], &[]);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains("--dry-run"));
    assert!(text.contains("--no-archive"));
}

#[test]
fn version_flag_prints_version() {
    let (ok, stdout, _) = run_resnap(&["--version"], &[]);
    assert!(ok);
    let text = String::from_utf8_lossy(&stdout);
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_exits_1_when_host_is_unreachable() {
    // Point the bridge at a nonexistent interpreter so the failure is
    // deterministic even on machines that have Resolve installed.
    let (ok, _, stderr) = run_resnap(
        &["new"],
        &[("RESNAP_PYTHON", "/nonexistent/resnap-python")],
    );
    assert!(!ok);
    let text = String::from_utf8_lossy(&stderr);
    assert!(text.contains("scripting bridge"), "stderr: {text}");
}

#[test]
fn dry_run_still_requires_the_host() {
    // The next version name needs sibling timeline names, so even
    // --dry-run connects first.
    let (ok, stdout, _) = run_resnap(
        &["new", "--dry-run"],
        &[("RESNAP_PYTHON", "/nonexistent/resnap-python")],
    );
    assert!(!ok);
    assert!(stdout.is_empty());
}

#[test]
fn quiet_suppresses_info_but_not_the_error() {
    let (ok, _, stderr) = run_resnap(
        &["new", "--quiet"],
        &[("RESNAP_PYTHON", "/nonexistent/resnap-python")],
    );
    assert!(!ok);
    assert!(!stderr.is_empty());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let (ok, _, _) = run_resnap(&["new", "--frobnicate"], &[]);
    assert!(!ok);
}
