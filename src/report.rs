//! Report layer — writes the scan outcome to the output stream.
//!
//! Either the deduplicated letters or the fallback text, never both, always
//! followed by a single newline.

use std::io::Write;

use crate::filter::ScanOutcome;

/// Printed in place of the letter sequence when no uppercase letter was found.
pub const FALLBACK_TEXT: &str = "Not Found";

/// Write `outcome` to `output`: the letters when any were found, otherwise
/// [`FALLBACK_TEXT`]. A trailing newline is emitted on both branches.
pub fn write_outcome<W: Write>(output: &mut W, outcome: &ScanOutcome) -> std::io::Result<()> {
    if outcome.found_any {
        output.write_all(outcome.letters.as_bytes())?;
    } else {
        output.write_all(FALLBACK_TEXT.as_bytes())?;
    }
    output.write_all(b"\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
