//! Tests for error output, suggestions, and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn strata(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("NO_COLOR", "1")
        .env("STRATA_FRAMEWORK__SIBLING_DIR", "no-such-framework-checkout")
        .env_remove("STRATA_FRAMEWORK_PATH")
        .env_remove("STRATA_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn invalid_project_name() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["init", ".hidden"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("\u{2717} Error:"))
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join(".hidden").exists());
}

#[test]
fn project_name_with_separator() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["init", "a/b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("path separators"));
}

#[cfg(unix)]
#[test]
fn failing_toolchain_reports_stage_and_command() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .env("STRATA_TOOLCHAIN__PROGRAM", "false")
        .args(["init", "shop", "--module", "example.com/shop"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("initialize module"))
        .stderr(predicate::str::contains("false mod init example.com/shop"));

    // Files written before the failing step stay on disk
    assert!(temp.path().join("shop/cmd/server/main.go").is_file());
}

#[test]
fn missing_toolchain_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .env("STRATA_TOOLCHAIN__PROGRAM", "strata-no-such-go-binary")
        .args(["init", "shop"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("strata-no-such-go-binary"))
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn init_ddd_without_names() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["init-ddd", " , ,"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no context names given"));
}

#[test]
fn init_ddd_missing_project_dir() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["init-ddd", "user", "--project-dir", "does-not-exist"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Project directory not found"))
        .stderr(predicate::str::contains("strata init"));
}

#[test]
fn template_override_without_context_root() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir_all(templates.join("skeleton")).unwrap();

    strata(temp.path())
        .env("STRATA_TEMPLATES__LOCAL_PATH", &templates)
        .env("STRATA_TOOLCHAIN__PROGRAM", "true")
        .args(["init", "shop"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("check template roots"))
        .stderr(predicate::str::contains("'context'"));
}

#[test]
fn unknown_config_key() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("toolchain.program"));
}

#[test]
fn explicit_config_file_must_exist() {
    let temp = TempDir::new().unwrap();
    strata(temp.path())
        .args(["--config", "missing.toml", "config", "list"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn verbose_error_lists_stages_without_repeating() {
    let temp = TempDir::new().unwrap();
    let assert = strata(temp.path())
        .env("STRATA_TOOLCHAIN__PROGRAM", "strata-no-such-go-binary")
        .args(["-v", "init", "shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stage: initialize module"))
        .stderr(predicate::str::contains("--verbose").not());

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let headline = stderr
        .lines()
        .find(|line| line.starts_with("\u{2717} Error:"))
        .unwrap();
    for line in stderr.lines().filter(|l| l.trim_start().starts_with("Caused by:")) {
        let cause = line.trim_start().trim_start_matches("Caused by: ");
        assert!(!headline.contains(cause), "repeated cause: {cause}");
    }
}
