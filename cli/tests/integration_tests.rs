use std::process::Command;

fn run_sample(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_argspec-sample"))
        .args(args)
        .output()
        .expect("failed to run sample binary")
}

#[test]
fn test_missing_required_argument_exits_with_errors() {
    let output = run_sample(&[]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("An error has occurred."));
    assert!(stdout.contains(" > Name is required."));
    assert!(stdout.contains("[USAGE]"));
}

#[test]
fn test_help_request_exits_distinctly() {
    let output = run_sample(&["Bob", "/?"]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[USAGE]"));
    assert!(stdout.contains("[LIST OF VALID ARGUMENTS]"));
    assert!(stdout.contains("/Help (/?) <Boolean>"));
    assert!(!stdout.contains("An error has occurred."));
}

#[test]
fn test_valid_arguments_run_the_app() {
    let output = run_sample(&["Bob", "/Age", "42", "/Job", "plumber"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello, Bob the plumber (Father)!"));
}

#[test]
fn test_report_flag_dumps_json() {
    let output = run_sample(&["Bob", "/Report"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("report output should be JSON");
    assert!(report["application_file_name"].is_string());
    assert_eq!(report["properties"][0]["name"], "Name");
}
