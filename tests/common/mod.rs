//! Shared test utilities for firstcaps integration harnesses.
//!
//! Import via `mod common; use common::*;` at the top of each harness file.
//! The binary helpers spawn the real `firstcaps` executable, so they exercise
//! the same stdin/stdout wiring a user gets.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run the `firstcaps` binary with `input` piped to its stdin and wait for it
/// to exit. Panics on spawn failure; assertion-worthy state (exit status,
/// stdout) is returned for the caller to check.
pub fn run_bin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_firstcaps"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn firstcaps binary");

    child
        .stdin
        .take()
        .expect("child stdin is piped")
        .write_all(input)
        .expect("failed to write to child stdin");
    // The stdin handle is dropped here, closing the pipe and signalling EOF.

    child
        .wait_with_output()
        .expect("failed to wait for firstcaps binary")
}

/// Stdout of a finished run as UTF-8 text.
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("firstcaps stdout is UTF-8")
}
