//! # Test helpers
//!
//! `CliRunner` drives `videopoker_cli::run_with_input` in-process and captures
//! stdout, stderr and the exit code. Interactive input for `play` is passed as a
//! string.
//!
//! ```rust,ignore
//! let res = CliRunner::new().run_with_input(&["play", "--seed", "1"], "all\n");
//! assert_eq!(res.exit_code, 0);
//! ```
#![allow(dead_code)]

use std::io::Cursor;

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        CliRunner
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_input(args, "")
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        let mut argv = vec!["videopoker"];
        argv.extend_from_slice(args);
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let exit_code = videopoker_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8(out).expect("stdout is utf-8"),
            stderr: String::from_utf8(err).expect("stderr is utf-8"),
        }
    }
}
