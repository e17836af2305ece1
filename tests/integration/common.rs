use std::{
    path::PathBuf,
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_aws-env");

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/aws")
}

/// Build a command with `AWS_HOME` and `RUST_LOG` scrubbed from the inherited environment.
pub fn command() -> Command {
    let mut command = Command::new(BINARY_PATH);
    command.env_remove("AWS_HOME").env_remove("RUST_LOG");
    command
}

/// Run the binary with `AWS_HOME` pointing at the fixture directory.
pub fn run_with_fixture_home(args: &[&str]) -> Output {
    command()
        .env("AWS_HOME", fixture_dir())
        .args(args)
        .output()
        .expect("aws-env should run")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
