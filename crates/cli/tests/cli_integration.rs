//! End-to-end tests driving the compiled `drill` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn drill(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_drill"))
        .args(args)
        .output()
        .expect("failed to run drill")
}

/// Runs `drill` with the given lines piped to stdin; closing the pipe
/// after the write is what delivers EOF to the interactive demos.
fn drill_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_drill"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn drill");
    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for drill")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_list_names_every_demo() {
    let output = drill(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for name in ["duplicates", "flatten", "kth-largest", "group-by", "memoize"] {
        assert!(text.contains(name), "missing demo {name:?} in:\n{text}");
    }
}

#[test]
fn test_run_fibonacci_prints_the_sequence() {
    let output = drill(&["run", "fibonacci"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]"));
}

#[test]
fn test_run_all_covers_every_demo() {
    let output = drill(&["run", "--all"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("── duplicates ──"));
    assert!(text.contains("── memoize ──"));
}

#[test]
fn test_run_unknown_demo_fails() {
    let output = drill(&["run", "no-such-demo"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown demo"));
}

#[test]
fn test_run_without_name_or_all_fails() {
    let output = drill(&["run"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_prints_a_parsable_sample() {
    let output = drill(&["config"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("[pace]"));
    assert!(text.contains("debounce_delay_ms"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[run]\nfibonacci_len = 12\n").unwrap();
    let path = file.path().display().to_string();

    let output = drill(&["--config", &path, "run", "fibonacci"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]"));
}

#[test]
fn test_missing_config_file_fails() {
    let output = drill(&["--config", "/nonexistent/drill.toml", "list"]);
    assert!(!output.status.success());
}

#[test]
fn test_debounce_pipe_echoes_only_the_last_line() {
    // Piped lines arrive far inside the 500 ms quiet period, so the
    // first is superseded and only the last fires after EOF.
    let output = drill_with_stdin(&["debounce", "--delay-ms", "500"], "hello\nworld\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("world"));
    assert!(text.contains("Lines typed:  2"));
    assert!(text.contains("Lines echoed: 1"), "unexpected output:\n{text}");
}

#[test]
fn test_throttle_pipe_executes_leading_and_drops_the_rest() {
    let output = drill_with_stdin(&["throttle", "--delay-ms", "5000"], "one\ntwo\nthree\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("one"));
    assert!(text.contains("Lines echoed:  1"));
    assert!(text.contains("Lines dropped: 2"), "unexpected output:\n{text}");
}
