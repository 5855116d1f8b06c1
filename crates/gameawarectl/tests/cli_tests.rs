//! CLI integration tests for gameawarectl
//!
//! Tests the non-interactive CLI surface:
//! - gameawarectl --help              lists every subcommand
//! - gameawarectl recommend --level   renders a recommendation offline
//! - gameawarectl history             renders the empty-history message
//! - gameawarectl history clear --yes clears without prompting
//!
//! The binary is exercised directly; tests skip when it has not been
//! built yet.

use std::env;
use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> Option<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").ok()?;
    let target = PathBuf::from(&manifest_dir).parent()?.parent()?.join("target");
    for profile in ["debug", "release"] {
        let candidate = target.join(profile).join("gameawarectl");
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

fn run(args: &[&str], data_dir: &std::path::Path) -> Option<(String, String)> {
    let binary = match get_binary_path() {
        Some(binary) => binary,
        None => {
            eprintln!("Skipping: gameawarectl binary not built");
            return None;
        }
    };
    let output = Command::new(binary)
        .args(args)
        .env("GAMEAWARE_DATA_DIR", data_dir)
        .env("GAMEAWARE_LOG", "error")
        .output()
        .expect("failed to run gameawarectl");
    Some((
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    ))
}

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let Some((stdout, _)) = run(&["--help"], dir.path()) else {
        return;
    };
    for subcommand in ["assess", "history", "recommend", "chat", "login", "logout", "register"] {
        assert!(stdout.contains(subcommand), "help is missing {subcommand}");
    }
}

#[test]
fn test_recommend_with_explicit_level_is_offline() {
    let dir = tempfile::tempdir().unwrap();
    let Some((stdout, _)) = run(
        &["recommend", "--level", "High Addiction"],
        dir.path(),
    ) else {
        return;
    };
    assert!(stdout.contains("Reduce screen time and seek balance."));
    assert!(stdout.contains("Dr. Emily Johnson"));
}

#[test]
fn test_recommend_with_unrecognized_level_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let Some((stdout, _)) = run(
        &["recommend", "--level", "Mystery Addiction"],
        dir.path(),
    ) else {
        return;
    };
    assert!(stdout.contains("No specific recommendation available."));
}

#[test]
fn test_history_on_fresh_store_is_empty_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let Some((stdout, stderr)) = run(&["history"], dir.path()) else {
        return;
    };
    assert!(stdout.contains("No assessments recorded yet"), "stderr: {stderr}");
}

#[test]
fn test_history_clear_with_yes_skips_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let Some((stdout, _)) = run(&["history", "clear", "--yes"], dir.path()) else {
        return;
    };
    assert!(stdout.contains("History cleared"));
}
