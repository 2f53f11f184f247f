//! firstcaps — print each uppercase letter of a line once, in
//! first-occurrence order.
//!
//! Reads one line (bounded length) from the input, scans it in a single
//! forward pass with a 26-slot seen-set, and writes the deduplicated
//! uppercase letters — or `Not Found` when the line has none.
//!
//! # Architecture
//!
//! ```text
//! Reader ──► Filter ──► Report
//! ```
//!
//! Each layer is a public module so the integration harnesses can drive them
//! directly. [`run_with`] wires all three over generic streams.

pub mod filter;
pub mod reader;
pub mod report;

pub use filter::{scan, ScanOutcome};
pub use reader::{read_line_bounded, DEFAULT_MAX_LINE_LEN};
pub use report::{write_outcome, FALLBACK_TEXT};

use std::io::{BufRead, Write};

/// Run the whole pipeline once: read one bounded line from `input`, scan it,
/// and write the outcome to `output`.
///
/// Generic over the streams so tests can substitute in-memory buffers for
/// stdin/stdout.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_len: usize,
) -> anyhow::Result<()> {
    let line = reader::read_line_bounded(input, max_len)?;
    let outcome = filter::scan(&line);
    report::write_outcome(output, &outcome)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        run_with(&mut Cursor::new(input), &mut out, DEFAULT_MAX_LINE_LEN).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pipeline_end_to_end() {
        assert_eq!(run("AaBbAaCc\n"), "ABC\n");
    }

    #[test]
    fn pipeline_fallback() {
        assert_eq!(run("\n"), "Not Found\n");
    }
}
