//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BROKEN_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><link rel="stylesheet" href="\_expo\static\css\app.css" /></head>
<body><div id="root"></div><script src="\_expo\static\js\web\entry.js" defer></script></body>
</html>
"#;

const FIXED_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><link rel="stylesheet" href="/_expo/static/css/app.css" /></head>
<body><div id="root"></div><script src="/_expo/static/js/web/entry.js" defer></script></body>
</html>
"#;

fn pathfix(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("web-pathfix"));
    cmd.current_dir(dir).env_remove("PATHFIX_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_file(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, body).expect("write");
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    pathfix(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("web-pathfix"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    pathfix(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize backslash resource paths"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_default_target_is_fixed_in_place() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "dist/index.html", BROKEN_INDEX);

    pathfix(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking dist/index.html"))
        .stdout(predicate::str::contains("Found 2 backslash path references"))
        .stdout(predicate::str::contains("Fixed 2 path references"))
        .stdout(predicate::str::contains("All paths in dist/index.html now use forward slashes"));

    let fixed = fs::read_to_string(tmp.path().join("dist/index.html")).expect("read");
    assert_eq!(fixed, FIXED_INDEX);
}

#[test]
fn test_second_run_is_noop() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "dist/index.html", BROKEN_INDEX);

    pathfix(tmp.path()).assert().success();
    pathfix(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No backslash paths found"));

    let fixed = fs::read_to_string(tmp.path().join("dist/index.html")).expect("read");
    assert_eq!(fixed, FIXED_INDEX);
}

#[test]
fn test_missing_default_target_fails() {
    let tmp = TempDir::new().expect("tmp");

    pathfix(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));

    assert!(!tmp.path().join("dist/index.html").exists());
    assert!(!tmp.path().join("dist").exists());
}

#[test]
fn test_missing_explicit_path_fails_before_any_rewrite() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "a.html", BROKEN_INDEX);

    pathfix(tmp.path())
        .args(["a.html", "missing.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.html"));

    let untouched = fs::read_to_string(tmp.path().join("a.html")).expect("read");
    assert_eq!(untouched, BROKEN_INDEX);
}

#[test]
fn test_directory_target_with_summary() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "web-build/index.html", BROKEN_INDEX);
    write_file(tmp.path(), "web-build/about/index.html", "<p>clean</p>\n");
    write_file(tmp.path(), "web-build/static/app.js", r#"var a = "\\x";"#);

    pathfix(tmp.path())
        .arg("web-build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking web-build/about/index.html"))
        .stdout(predicate::str::contains(
            "2 files checked, 1 needed fixes, 2 references fixed, 0 remaining",
        ));

    let fixed = fs::read_to_string(tmp.path().join("web-build/index.html")).expect("read");
    assert_eq!(fixed, FIXED_INDEX);
    let js = fs::read_to_string(tmp.path().join("web-build/static/app.js")).expect("read");
    assert_eq!(js, r#"var a = "\\x";"#);
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "dist/index.html", BROKEN_INDEX);

    pathfix(tmp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: dist/index.html left unchanged"))
        .stdout(predicate::str::contains("Would fix 2 path references"))
        .stdout(predicate::str::contains("Fixed 2 path references").not());

    let untouched = fs::read_to_string(tmp.path().join("dist/index.html")).expect("read");
    assert_eq!(untouched, BROKEN_INDEX);
}

#[test]
fn test_config_file_sets_default_target() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "pathfix.toml", "target = 'out/app.html'\n");
    write_file(tmp.path(), "out/app.html", BROKEN_INDEX);

    pathfix(tmp.path()).assert().success().stdout(predicate::str::contains("Checking out/app.html"));

    let fixed = fs::read_to_string(tmp.path().join("out/app.html")).expect("read");
    assert_eq!(fixed, FIXED_INDEX);
}

#[test]
fn test_explicit_invalid_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "bad.toml", "max_cleanup_passes = 'lots'\n");

    pathfix(tmp.path())
        .args(["--config", "bad.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_residual_reference_warns_but_succeeds() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "dist/index.html", "<img src=\"\\broken.png>\n");

    pathfix(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 backslash references remain in dist/index.html"));
}

#[test]
fn test_pass_limit_is_reported_as_warning() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "pathfix.toml", "max_cleanup_passes = 2\n");
    write_file(tmp.path(), "dist/index.html", r#"<img src="\a\b\c\d\e.png">"#);

    pathfix(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleanup stopped at the pass limit"))
        .stdout(predicate::str::contains("now use forward slashes").not());

    let written = fs::read_to_string(tmp.path().join("dist/index.html")).expect("read");
    assert_eq!(written, r#"<img src="/a\b\c/d/e.png">"#);
}

#[test]
fn test_extensions_flag_overrides_directory_filter() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "site/index.html", BROKEN_INDEX);
    write_file(tmp.path(), "site/page.xhtml", BROKEN_INDEX);

    pathfix(tmp.path())
        .args(["-e", "xhtml", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking site/page.xhtml"))
        .stdout(predicate::str::contains("Checking site/index.html").not());

    let xhtml = fs::read_to_string(tmp.path().join("site/page.xhtml")).expect("read");
    assert_eq!(xhtml, FIXED_INDEX);
    let html = fs::read_to_string(tmp.path().join("site/index.html")).expect("read");
    assert_eq!(html, BROKEN_INDEX);
}

#[test]
fn test_empty_extensions_flag_is_rejected() {
    let tmp = TempDir::new().expect("tmp");
    write_file(tmp.path(), "site/index.html", BROKEN_INDEX);

    pathfix(tmp.path())
        .args(["--extensions", " , ", "site"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--extensions needs at least one extension"));

    let html = fs::read_to_string(tmp.path().join("site/index.html")).expect("read");
    assert_eq!(html, BROKEN_INDEX);
}
