// CLI 整合測試

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn textundo() -> Command {
    Command::cargo_bin("textundo").unwrap()
}

#[test]
fn test_demo_prints_each_step() {
    textundo()
        .arg("--demo")
        .assert()
        .success()
        .stdout("Hello, \nHello, world!\nHello, \n\n");
}

#[test]
fn test_script_from_stdin() {
    textundo()
        .write_stdin("exec A\nexec B\nundo\n# done\nprint\n")
        .assert()
        .success()
        .stdout("A\nAB\nA\nA\n[1 chars, 1 cols, 1 undo, 1 redo]\n");
}

#[test]
fn test_extra_undo_is_not_an_error() {
    textundo()
        .write_stdin("exec x\nundo\nundo\nundo\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("nothing to undo\nnothing to undo\n"));
}

#[test]
fn test_script_file_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("edit.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&script, "exec \"line one\\n\"\nexec 世界\nexec !\nundo\n").unwrap();

    textundo()
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "line one\n世界");
}

#[test]
fn test_output_with_save_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    textundo()
        .args(["--save-encoding", "gbk", "--output"])
        .arg(&output)
        .write_stdin("exec 你好\n")
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    let (decoded, _, _) = encoding_rs::GBK.decode(&bytes);
    assert_eq!(decoded, "你好");
}

#[test]
fn test_redo_in_script() {
    textundo()
        .write_stdin("exec one\nexec two\nundo\nundo\nredo\nredo\nredo\nexec !\nredo\n")
        .assert()
        .success()
        .stdout(
            "one\nonetwo\none\n\none\nonetwo\nnothing to redo\nonetwo!\nnothing to redo\n",
        );
}

#[test]
fn test_script_with_explicit_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("edit_gbk.txt");
    let (encoded, _, _) = encoding_rs::GBK.encode("exec 你好\nexec ，世界\nundo\n");
    fs::write(&script, &encoded).unwrap();

    textundo()
        .args(["--encoding", "gbk"])
        .arg(&script)
        .assert()
        .success()
        .stdout("你好\n你好，世界\n你好\n");
}

#[test]
fn test_limit_bounds_undo() {
    textundo()
        .args(["--limit", "1"])
        .write_stdin("exec a\nexec b\nundo\nundo\n")
        .assert()
        .success()
        .stdout("a\nab\na\nnothing to undo\n");
}

#[test]
fn test_unknown_operation_fails_with_line() {
    textundo()
        .write_stdin("exec a\nexplode\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("unknown operation `explode`"));
}

#[test]
fn test_missing_script_fails() {
    textundo()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn test_bad_arguments() {
    textundo().args(["--limit", "0"]).assert().failure();
    textundo()
        .args(["--encoding", "klingon"])
        .assert()
        .failure();
    textundo()
        .args(["--demo", "script.txt"])
        .assert()
        .failure();
}

#[test]
fn test_help() {
    textundo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCRIPT FORMAT"));
}
