//! End-to-end tests for the `tc` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tc").expect("tc binary should build");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_writes_readme_into_dist() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dist")).unwrap();

    tc(&temp)
        .args(["--base-url", "https://example.com/", "talk-a/v1", "talk-a/v2", "talk-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 talks in 2 categories"));

    let readme = fs::read_to_string(temp.path().join("dist/README.md")).unwrap();
    assert!(readme.contains(
        "- talk-a\n  - [v1](https://example.com/talk-a/v1)\n  - [v2](https://example.com/talk-a/v2)\n- [talk b](https://example.com/talk-b)\n"
    ));
    assert!(readme.contains("[repo](https://github.com/luc-tielen/talks)"));
}

#[test]
fn test_fails_when_dist_is_missing() {
    let temp = TempDir::new().unwrap();

    tc(&temp)
        .arg("talk-b")
        .assert()
        .failure()
        .stderr(predicate::str::contains("dist/README.md"));

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn test_stdout_mode() {
    let temp = TempDir::new().unwrap();

    tc(&temp)
        .args(["--stdout", "-b", "https://example.com/", "solo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [solo](https://example.com/solo)"));
}

#[test]
fn test_local_config_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".talkcatalog.yml"),
        "base-url: https://cfg.example.org/\noutput: index.md\n",
    )
    .unwrap();

    tc(&temp).arg("meetups/rust").assert().success();

    let index = fs::read_to_string(temp.path().join("index.md")).unwrap();
    assert!(index.contains("- [meetups rust](https://cfg.example.org/meetups/rust)"));
}

#[test]
fn test_discover_talks() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("dist")).unwrap();
    for dir in ["fp/haskell", "fp/elm", "rust-intro"] {
        let talk = temp.path().join(dir);
        fs::create_dir_all(&talk).unwrap();
        fs::write(talk.join("presentation.mdx"), "# hi").unwrap();
    }

    tc(&temp).args(["--discover", "."]).assert().success();

    let readme = fs::read_to_string(temp.path().join("dist/README.md")).unwrap();
    assert!(readme.contains("- fp\n  - [elm]("));
    assert!(readme.contains("- [rust intro]("));
}
