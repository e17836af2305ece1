use super::common::{command, fixture_dir, run_with_fixture_home, stderr, stdout};

#[test]
fn default_profile_prints_export_lines() {
    let output = run_with_fixture_home(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout:\n{stdout}");
    assert!(lines.contains(&"export AWS_ACCESS_KEY_ID=\"AKIA123\""));
    assert!(lines.contains(&"export AWS_SECRET_ACCESS_KEY=\"SECRET456\""));
}

#[test]
fn export_keys_are_uppercased_regardless_of_file_case() {
    let output = run_with_fixture_home(&["--profile", "ci"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    for line in [
        "export AWS_ACCESS_KEY_ID=\"AKIACI\"",
        "export AWS_SECRET_ACCESS_KEY=\"SECRETCI\"",
        "export AWS_SESSION_TOKEN=\"TOKENCI\"",
    ] {
        assert_eq!(
            stdout.lines().filter(|l| *l == line).count(),
            1,
            "expected `{line}` exactly once in:\n{stdout}"
        );
    }
}

#[test]
fn aws_home_flag_overrides_environment() {
    let output = command()
        .env("AWS_HOME", "/nonexistent/aws-home")
        .args(["--aws-home"])
        .arg(fixture_dir())
        .output()
        .expect("aws-env should run");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("export AWS_ACCESS_KEY_ID=\"AKIA123\""));
}

#[test]
fn repeated_runs_produce_identical_output() {
    let first = run_with_fixture_home(&["-p", "ci"]);
    let second = run_with_fixture_home(&["-p", "ci"]);

    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn set_env_keeps_the_same_stdout() {
    let plain = run_with_fixture_home(&[]);
    let with_set_env = run_with_fixture_home(&["--set-env"]);

    assert!(with_set_env.status.success(), "stderr: {}", stderr(&with_set_env));
    assert_eq!(plain.stdout, with_set_env.stdout);
}

#[test]
fn verbose_diagnostics_go_to_stderr_only() {
    let quiet = run_with_fixture_home(&[]);
    let verbose = run_with_fixture_home(&["--verbose"]);

    assert!(verbose.status.success(), "stderr: {}", stderr(&verbose));
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(stderr(&quiet).is_empty(), "quiet stderr: {}", stderr(&quiet));

    let diagnostics = stderr(&verbose);
    assert!(
        diagnostics.contains("Inspecting credentials file"),
        "verbose stderr:\n{diagnostics}"
    );
    assert!(diagnostics.contains("Extracting profile"));
}

#[test]
fn backslashes_are_escaped_once_in_export_lines() {
    let output = run_with_fixture_home(&["-p", "escaped"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert_eq!(stdout.lines().count(), 2, "stdout:\n{stdout}");
    assert!(
        stdout.contains("export AWS_SECRET_ACCESS_KEY=\"ab\\\\tcd\\\\nef\"\n"),
        "stdout:\n{stdout}"
    );
}
