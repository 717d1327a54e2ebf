use assert_cmd::Command;

#[test]
fn generated_program_runs() {
    let generated = Command::cargo_bin("textgen")
        .expect("failed to locate textgen binary")
        .write_stdin("Hi!")
        .output()
        .expect("failed to run textgen");
    assert!(generated.status.success());

    let program = parser::Parser::new(&generated.stdout)
        .parse()
        .expect("generated code must parse");
    let mut output = Vec::new();
    interpreter::Interpreter::<8>::new(program)
        .run_with(&b""[..], &mut output)
        .expect("failed to interpret");

    assert_eq!(output, b"Hi!");
}

#[test]
fn missing_text_file_fails() {
    Command::cargo_bin("textgen")
        .expect("failed to locate textgen binary")
        .arg("/definitely/not/here.txt")
        .assert()
        .failure();
}
