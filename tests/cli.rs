use std::process::{Command, Output};

fn turtlec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_turtlec")).args(args)
                                              .output()
                                              .unwrap_or_else(|e| panic!("Failed to run turtlec: {e}"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn inline_program_writes_commands() {
    let output = turtlec(&["PENDOWN FORWARD 10 RIGHT 90"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "D\nM 10\nR -90\n");
}

#[test]
fn commands_before_a_runtime_error_are_kept() {
    let output = turtlec(&["PENDOWN FORWARD 10 FORWARD missing"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "D\nM 10\n");
    assert!(stderr_of(&output).contains("Unknown variable 'missing'"));
}

#[test]
fn syntax_error_writes_nothing_to_stdout() {
    let output = turtlec(&["WHILE x > 0 DO\nFORWARD 1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("2: Unexpected token 'end of text', Expecting 'OD'"));
}

#[test]
fn defines_and_lenient_flag_seed_the_environment() {
    let output = turtlec(&["-D", "size=2.5", "--lenient", "FORWARD size + other"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "M 2.5\n");
}

#[test]
fn program_is_read_from_file() {
    let output = turtlec(&["--file", "tests/programs/spiral.turtle"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), include_str!("programs/spiral.expected"));
}
