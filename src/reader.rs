//! Reader layer — bounded one-line input.
//!
//! The scan operates on exactly one line, capped at a fixed number of data
//! bytes. The cap is an explicit parameter rather than a buried literal, so
//! the truncation boundary is visible at every call site.
//!
//! # Truncation semantics
//!
//! A line longer than `max_len` is truncated: the first `max_len` bytes are
//! kept and the rest of the line (up to the line feed or EOF) is read and
//! discarded. The line terminator is stripped, including a `\r` preceding the
//! `\n`. EOF before any byte arrives is an empty line, not an error.

use std::io::BufRead;

/// Data bytes kept per line, matching an 80-column input buffer.
pub const DEFAULT_MAX_LINE_LEN: usize = 80;

/// Read one line from `input`, keeping at most `max_len` data bytes.
///
/// Non-UTF-8 bytes are lossily converted; the replacement characters fall
/// outside `'A'..='Z'` and pass through the scan without effect.
pub fn read_line_bounded<R: BufRead>(input: &mut R, max_len: usize) -> std::io::Result<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(max_len.min(4096));
    let mut kept = 0usize;
    let mut discarded = 0usize;
    let mut saw_newline = false;

    while !saw_newline {
        let chunk = input.fill_buf()?;
        if chunk.is_empty() {
            break; // EOF
        }

        let (line_part, terminated) = match chunk.iter().position(|&b| b == b'\n') {
            Some(pos) => (&chunk[..pos], true),
            None => (chunk, false),
        };

        let take = (max_len - kept).min(line_part.len());
        buf.extend_from_slice(&line_part[..take]);
        kept += take;
        discarded += line_part.len() - take;

        let consumed = line_part.len() + usize::from(terminated);
        input.consume(consumed);
        saw_newline = terminated;
    }

    if saw_newline && buf.last() == Some(&b'\r') {
        buf.pop();
    }

    if discarded > 0 {
        tracing::debug!(kept, discarded, "line exceeded max length, truncated");
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
