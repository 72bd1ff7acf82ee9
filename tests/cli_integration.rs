use assert_cmd::Command;
use predicates::prelude::*;

fn tree_printer() -> Command {
    let mut cmd = Command::cargo_bin("tree-printer").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/config-home")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    tree_printer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("box-drawing text diagram"));
}

#[test]
fn shows_version() {
    tree_printer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    tree_printer()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn render_subcommand_help() {
    tree_printer()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a directory as a tree"));
}

#[test]
fn verbose_flag_accepted() {
    tree_printer()
        .args(["-vvv", "render", "--no-report", "src"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" ── src\n"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    tree_printer()
        .args(["-vv", "render", "-d", "0", "--no-report", "src"])
        .assert()
        .success()
        .stdout(" ── src\n");
}

#[test]
fn invalid_config_path_fails() {
    tree_printer()
        .args(["--config", "/nonexistent/path.toml", "render"])
        .assert()
        .failure();
}

#[test]
fn man_page_is_generated() {
    tree_printer()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}
