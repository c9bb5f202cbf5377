#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Test helper for running geodist commands with less boilerplate
pub struct GeodistTest {
    cmd: Command,
}

pub fn geodist_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("geodist"))
}

impl GeodistTest {
    /// Create a new geodist command test
    pub fn new() -> Self {
        Self {
            cmd: geodist_command(),
        }
    }

    /// Add arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    /// Add a single argument to the command
    pub fn arg<S: AsRef<std::ffi::OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Pipe text to stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input);
        self
    }

    /// Assert the command succeeds
    pub fn assert_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Assert the command succeeds and contains text in stdout
    pub fn assert_success_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .success()
            .stdout(predicate::str::contains(text))
    }

    /// Assert the command succeeds and contains all texts in stdout
    pub fn assert_success_contains_all(mut self, texts: &[&str]) -> assert_cmd::assert::Assert {
        let mut assertion = self.cmd.assert().success();
        for text in texts {
            assertion = assertion.stdout(predicate::str::contains(*text));
        }
        assertion
    }

    /// Assert the command fails
    pub fn assert_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Get command output for inspection
    pub fn get_output(mut self) -> std::process::Output {
        self.cmd.output().unwrap()
    }
}

/// Quick helper for the reference coordinate pair
pub fn reference_pair() -> GeodistTest {
    GeodistTest::new().args(["26.86296° N, 81.04288° E", "26.86343° N, 81.04136° E"])
}

/// Quick helper for a pair with a chosen output format (put before positional args)
pub fn pair_with_format(coord1: &str, coord2: &str, format: &str) -> GeodistTest {
    let format_arg = format!("--format={}", format);
    GeodistTest::new().args([format_arg.as_str(), coord1, coord2])
}
