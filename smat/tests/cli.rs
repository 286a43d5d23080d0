//! Command-line tests: run the `smat` binary against files in a temp dir.

#![cfg(feature = "serde")]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const A: &str = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 1, 3)\n";
const B: &str = "rows=2\ncols=2\n(0, 0, 4)\n(1, 1, 5)\n";

fn write_operands(dir: &Path, a: &str, b: &str) -> (PathBuf, PathBuf) {
    let a_path = dir.join("a.txt");
    let b_path = dir.join("b.txt");
    fs::write(&a_path, a).unwrap();
    fs::write(&b_path, b).unwrap();
    (a_path, b_path)
}

/// Run `smat <a> <b> <dir> <extra..>` feeding `stdin` to the menu
fn smat(a: &Path, b: &Path, dir: &Path, extra: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_smat"))
        .args([a, b, dir])
        .args(extra)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn smat");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait for smat")
}

#[test]
fn test_missing_result_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b) = write_operands(dir.path(), A, B);
    let missing = dir.path().join("nowhere");

    let output = smat(&a, &b, &missing, &["--op", "add"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!(
            "{} is not a directory or does not exist.",
            missing.display()
        )),
        "unexpected stderr: {stderr}"
    );
    assert!(!missing.exists());
}

#[test]
fn test_one_shot_multiply() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b) = write_operands(dir.path(), A, B);
    let results = tempfile::tempdir().unwrap();

    let output = smat(&a, &b, results.path(), &["--op", "multiply"], "");

    assert!(output.status.success());
    let product = results.path().join("product.txt");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("Multiplication result saved to {}", product.display())
    );
    assert_eq!(
        fs::read_to_string(&product).unwrap(),
        "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 10)\n(1, 1, 15)\n"
    );
}

#[test]
fn test_one_shot_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b) = write_operands(dir.path(), A, B);

    let args = ["--op", "add", "--format", "json"];
    let output = smat(&a, &b, dir.path(), &args, "");

    assert!(output.status.success());
    let text = fs::read_to_string(dir.path().join("sum.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["rows"], 2);
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn test_interactive_menu_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b) = write_operands(dir.path(), A, B);

    let output = smat(&a, &b, dir.path(), &[], "9\n1\n4\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid choice. Please try again."));
    assert!(stdout.contains("Addition result saved to"));
    assert!(stdout.ends_with("Exiting.\n"));
    assert!(dir.path().join("sum.txt").is_file());
}

#[test]
fn test_mismatched_operands_fail_in_one_shot_mode() {
    let dir = tempfile::tempdir().unwrap();
    let (a, b) = write_operands(dir.path(), "rows=2\ncols=3\n(0, 0, 1)\n", B);

    let output = smat(&a, &b, dir.path(), &["--op", "add"], "");

    assert!(!output.status.success());
    assert!(!dir.path().join("sum.txt").exists());
}
