use std::{
    io::Write as _,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn quill(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_quill"));
    command
        .args(args)
        .args(["--log-level", "error"])
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    command
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = quill(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("binary finishes")
}

#[test]
fn binary_compiles_to_stdout() {
    let input = samples_dir().join("minimal.quill");
    let output = quill(&["compile", input.to_str().unwrap()])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Title.\n\nClaim.\n\nResults:\n- 10% improvement\n\nInsight.\n\nSource: Source\nexample.com\n"
    );
}

#[test]
fn binary_reports_compile_errors() {
    let input = samples_dir().join("errors").join("exclamation.quill");
    let output = quill(&["compile", input.to_str().unwrap()])
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("Exclamation marks are not allowed (found 1)"),
        "{stderr}"
    );
    assert!(stderr.contains("exclamation marks not allowed"), "{stderr}");
}

#[test]
fn binary_reports_missing_config() {
    let input = samples_dir().join("minimal.quill");
    let output = quill(&[
        "compile",
        input.to_str().unwrap(),
        "--config",
        "absent.toml",
    ])
    .output()
    .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Missing configuration file"), "{stderr}");
}

#[test]
fn binary_analyzes_stdin_as_json() {
    let output = run_with_stdin(
        &["analyze", "-", "--json"],
        "Title.\n\nClaim.\n\nResults:\n- 10% improvement\n\nInsight.\n\nSource: Source\nexample.com",
    );

    assert!(output.status.success());
    let analysis: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(analysis["valid"], true);
    assert_eq!(analysis["score"], 100);
}

#[test]
fn binary_analyze_exits_nonzero_for_invalid_text() {
    let output = run_with_stdin(&["analyze", "-"], "");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Score: 35/100 (invalid)\n"), "{stdout}");
}
