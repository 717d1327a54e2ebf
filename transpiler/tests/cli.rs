use assert_cmd::Command;
use predicates::prelude::*;

fn transpiler() -> Command {
    Command::cargo_bin("transpiler").expect("failed to locate transpiler binary")
}

#[test]
fn writes_next_to_source_by_default() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = dir.path().join("add.bf");
    std::fs::write(&source, "+++.").expect("failed to write source");

    transpiler().arg(&source).assert().success();

    let output = std::fs::read_to_string(dir.path().join("add.c")).expect("no output file");
    assert!(output.contains("t[p] += 3;"));
    assert!(output.contains("putchar(t[p]);"));
}

#[test]
fn explicit_output_and_language() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = dir.path().join("clear.bf");
    let output = dir.path().join("translated.py");
    std::fs::write(&source, "+[-]").expect("failed to write source");

    transpiler()
        .arg(&source)
        .args(["--language", "python", "--output"])
        .arg(&output)
        .assert()
        .success();

    let output = std::fs::read_to_string(output).expect("no output file");
    assert!(output.contains("t[p] = 0\n"));
}

#[test]
fn dash_writes_to_stdout() {
    transpiler()
        .args(["-l", "rust", "-o", "-"])
        .write_stdin(",.")
        .assert()
        .success()
        .stdout(predicate::str::contains("fn main() {").and(predicate::str::contains("write_all")));
}

#[test]
fn unbalanced_source_fails() {
    transpiler()
        .args(["-o", "-"])
        .write_stdin("]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn java_class_is_named_after_output() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = dir.path().join("echo.bf");
    std::fs::write(&source, ",.").expect("failed to write source");

    transpiler()
        .arg(&source)
        .args(["-l", "java"])
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("echo.java")).expect("no output file");
    assert!(output.contains("public class Echo {"));
    assert!(output.contains("t[p] = System.in.read() & 255;"));
}

#[test]
fn all_writes_every_language() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = dir.path().join("hello_world.bf");
    std::fs::write(&source, "+++.").expect("failed to write source");

    transpiler().arg(&source).arg("--all").assert().success();

    for extension in ["c", "rs", "py", "java"] {
        let output = dir.path().join(format!("hello_world.{extension}"));
        assert!(output.exists(), "missing {}", output.display());
    }

    let java = std::fs::read_to_string(dir.path().join("hello_world.java")).expect("no java file");
    assert!(java.contains("public class HelloWorld {"));
}

#[test]
fn all_conflicts_with_output() {
    transpiler()
        .args(["--all", "-o", "-"])
        .write_stdin("+")
        .assert()
        .failure();
}
