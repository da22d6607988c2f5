//! End-to-end tests for the `pg` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const V1: &str = "name: greeter\nversion: 1.0.0\ntemplate: |\n  Say hello to {{user}}.\n  Keep it short.\nvariables: [user]\n";
const V2: &str = "name: greeter\nversion: 1.1.0\ntemplate: |\n  Say hello to {{user}}.\n  Keep it warm.\nvariables: [user]\n";

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let tool_dir = temp.path().join(".promptguard");
    fs::create_dir_all(&tool_dir).unwrap();
    fs::write(tool_dir.join("config.yaml"), "prompts_root: prompts\n").unwrap();

    let dir = temp.path().join("prompts/greeter");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("1.0.0.yaml"), V1).unwrap();
    fs::write(dir.join("1.1.0.yaml"), V2).unwrap();
    temp
}

fn pg(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pg").unwrap();
    cmd.current_dir(cwd)
        .env_remove("PROMPTGUARD_WORKSPACE")
        .env_remove("PROMPTGUARD_CONFIG")
        .env_remove("PROMPTGUARD_PROMPTS_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_validate_catalog_ok() {
    let ws = workspace();
    pg(ws.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating greeter@1.0.0"))
        .stdout(predicate::str::contains("2 passed"));
}

#[test]
fn test_validate_failing_file_exits_one() {
    let ws = workspace();
    let bad = ws.path().join("prompts/greeter/2.0.0.yaml");
    fs::write(
        &bad,
        "name: greeter\nversion: 2.0.0\ntemplate: hi\npolicy:\n  max_output_tokens: 0\n",
    )
    .unwrap();

    pg(ws.path())
        .arg("validate")
        .arg(&bad)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("max_output_tokens"));
}

#[test]
fn test_validate_from_nested_directory_discovers_workspace() {
    let ws = workspace();
    let nested = ws.path().join("prompts/greeter");
    pg(&nested)
        .args(["validate", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": 2"));
}

#[test]
fn test_diff_two_versions() {
    let ws = workspace();
    pg(ws.path())
        .args(["diff", "greeter@1.0.0", "greeter@1.1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Keep it short."))
        .stdout(predicate::str::contains("+ Keep it warm."));
}

#[test]
fn test_diff_same_version_reports_no_differences() {
    let ws = workspace();
    pg(ws.path())
        .args(["diff", "greeter@1.0.0", "greeter@1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences."));
}

#[test]
fn test_diff_rejects_malformed_and_mismatched_refs() {
    let ws = workspace();
    pg(ws.path())
        .args(["diff", "greeter", "greeter@1.1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expected format: name@version"));

    pg(ws.path())
        .args(["diff", "greeter@1.0.0", "other@1.0.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("different names"));
}

#[test]
fn test_list_and_show() {
    let ws = workspace();
    pg(ws.path())
        .arg("list")
        .assert()
        .success()
        .stdout("greeter\n");

    pg(ws.path())
        .args(["list", "greeter"])
        .assert()
        .success()
        .stdout("1.0.0\n1.1.0\n");

    pg(ws.path())
        .args(["show", "greeter@1.1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep it warm."));
}

#[test]
fn test_new_and_bump() {
    let ws = workspace();
    pg(ws.path())
        .args(["new", "summarizer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created summarizer@1.0.0"));

    pg(ws.path())
        .args(["bump", "summarizer@1.0.0", "--kind", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created summarizer@1.1.0"));

    assert!(ws.path().join("prompts/summarizer/1.1.0.yaml").is_file());

    pg(ws.path())
        .args(["bump", "summarizer@1.0.0", "--kind", "minor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_root_override() {
    let ws = workspace();
    let other = ws.path().join("elsewhere");
    fs::create_dir_all(&other).unwrap();

    pg(ws.path())
        .args(["list", "--root"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found"));
}

#[test]
fn test_config_flag_is_merged() {
    let ws = workspace();
    fs::write(ws.path().join("custom.yaml"), "prompts_root: catalog\n").unwrap();
    fs::create_dir_all(ws.path().join("catalog/alpha")).unwrap();

    pg(ws.path())
        .args(["-c", "custom.yaml", "list"])
        .assert()
        .success()
        .stdout("alpha\n");

    pg(ws.path())
        .args(["-c", "missing.yaml", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_workspace_flag_reads_that_workspace_config() {
    let ws = workspace();
    let other = ws.path().join("other");
    let tool_dir = other.join(".promptguard");
    fs::create_dir_all(&tool_dir).unwrap();
    fs::write(tool_dir.join("config.yaml"), "prompts_root: library\n").unwrap();
    fs::create_dir_all(other.join("library/beta")).unwrap();

    pg(ws.path())
        .arg("-w")
        .arg(&other)
        .arg("list")
        .assert()
        .success()
        .stdout("beta\n");
}

#[test]
fn test_stderr_is_quiet_by_default() {
    let ws = workspace();
    pg(ws.path())
        .args(["new", "quiet"])
        .assert()
        .success()
        .stderr("");
}
