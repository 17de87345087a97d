use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates/prp")
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn prp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prp-tools").unwrap();
    cmd.current_dir(dir.path())
        .arg("--template-dir")
        .arg(template_dir());
    cmd
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn create_scaffolds_the_full_layout() {
    if !git_available() {
        return; // environment without git
    }
    let dir = TempDir::new().unwrap();
    prp(&dir)
        .args(["--name", "demo", "--lang", "python", "--llm", "claude"])
        .assert()
        .success();

    let dest = dir.path().join("demo");
    assert!(dest.join("Rules/python.md").is_file());
    assert!(dest.join("PRPs/templates/prp_base.md").is_file());
    assert!(dest.join("examples").is_dir());
    assert!(dest.join("GETTING_STARTED.md").is_file());
    assert!(dest.join("INITIAL_EXAMPLE.md").is_file());
    assert!(dest.join("README.md").is_file());
    assert!(dest.join(".gitignore").is_file());

    // Exactly one branding file, populated with the language's rules
    assert!(dest.join("CLAUDE.md").is_file());
    assert!(!dest.join("GEMINI.md").exists());
    let branding = std::fs::read_to_string(dest.join("CLAUDE.md")).unwrap();
    let rules = std::fs::read_to_string(template_dir().join("Rules/python.md")).unwrap();
    assert_eq!(branding, rules);

    // Placeholder resolved in the configured PRP template
    let base = std::fs::read_to_string(dest.join("PRPs/templates/prp_base.md")).unwrap();
    assert!(base.contains("CLAUDE"));
    assert!(!base.contains("{{LLM}}"));

    // Staged skeleton renamed into the inner source dir, with git initialized
    assert!(!dest.join("project").exists());
    assert!(dest.join("demo").is_dir());
    assert!(dest.join("demo/.git").is_dir());
}

#[test]
fn llm_flag_is_case_insensitive() {
    if !git_available() {
        return; // environment without git
    }
    let dir = TempDir::new().unwrap();
    prp(&dir)
        .args(["-n", "mixed", "-l", "python", "-m", "GeMiNi"])
        .assert()
        .success();

    assert!(dir.path().join("mixed/GEMINI.md").is_file());
    assert!(!dir.path().join("mixed/CLAUDE.md").exists());
}

#[test]
fn language_without_variant_keeps_the_generic_template() {
    if !git_available() {
        return; // environment without git
    }
    let dir = TempDir::new().unwrap();
    prp(&dir)
        .args(["-n", "rusty", "-l", "rust", "-m", "gemini"])
        .assert()
        .success();

    // rust has rules but no PRP template variant; the base stays byte-identical
    let generated =
        std::fs::read_to_string(dir.path().join("rusty/PRPs/templates/prp_base.md")).unwrap();
    let shipped =
        std::fs::read_to_string(template_dir().join("PRPs/templates/prp_base.md")).unwrap();
    assert_eq!(generated, shipped);

    let branding = std::fs::read_to_string(dir.path().join("rusty/GEMINI.md")).unwrap();
    let rules = std::fs::read_to_string(template_dir().join("Rules/rust.md")).unwrap();
    assert_eq!(branding, rules);
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[test]
fn second_run_with_the_same_name_fails() {
    if !git_available() {
        return; // environment without git
    }
    let dir = TempDir::new().unwrap();
    prp(&dir)
        .args(["-n", "twice", "-l", "python", "-m", "claude"])
        .assert()
        .success();

    prp(&dir)
        .args(["-n", "twice", "-l", "python", "-m", "claude"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn rejects_a_language_outside_the_discovered_set() {
    let dir = TempDir::new().unwrap();
    prp(&dir)
        .args(["-n", "demo", "-l", "haskell", "-m", "claude"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));

    // Rejected before any destination mutation
    assert!(!dir.path().join("demo").exists());
}

#[test]
fn rejects_an_unknown_llm_at_argument_parsing() {
    let dir = TempDir::new().unwrap();
    prp(&dir)
        .args(["-n", "demo", "-l", "python", "-m", "gpt4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected GEMINI or CLAUDE"));

    assert!(!dir.path().join("demo").exists());
}

#[test]
fn fails_when_the_local_template_source_is_missing() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("prp-tools").unwrap();
    cmd.current_dir(dir.path())
        .arg("--template-dir")
        .arg(dir.path().join("no-such-template"))
        .args(["-n", "demo", "-l", "python", "-m", "claude"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template source not found"));
}
