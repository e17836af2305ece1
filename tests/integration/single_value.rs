use super::common::{run_with_fixture_home, stderr, stdout};

#[test]
fn access_key_prints_only_the_value() {
    let output = run_with_fixture_home(&["access-key"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "AKIA123\n");
}

#[test]
fn secret_key_honours_profile_flag_after_subcommand() {
    let output = run_with_fixture_home(&["secret-key", "-p", "ci"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "SECRETCI\n");
}

#[test]
fn absent_key_fails_without_printing() {
    let output = run_with_fixture_home(&["-p", "partial", "secret-key"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = stderr(&output);
    assert!(
        stderr.contains("aws_secret_access_key") && stderr.contains("partial"),
        "stderr: {stderr}"
    );
}

#[test]
fn backslashes_in_values_are_printed_as_written() {
    let output = run_with_fixture_home(&["secret-key", "-p", "escaped"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "ab\\tcd\\nef\n");
}
