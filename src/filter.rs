//! Filter layer — the deduplicating uppercase scan.
//!
//! [`scan`] walks a line once, left to right, and collects each ASCII
//! uppercase letter the first time it appears. Later repeats are dropped;
//! everything outside `'A'..='Z'` (lowercase, digits, punctuation,
//! whitespace, wider codepoints) is inspected and ignored.

// ---------------------------------------------------------------------------
// Seen-set
// ---------------------------------------------------------------------------

const ALPHABET_LEN: usize = 26;

/// Tracks which uppercase letters have already been emitted during one scan.
///
/// A fixed array of 26 booleans indexed by `letter - 'A'`. Created fresh per
/// scan and never shared; each slot flips `false → true` at most once.
#[derive(Debug, Default)]
struct SeenSet {
    marks: [bool; ALPHABET_LEN],
}

impl SeenSet {
    /// Mark `letter` as seen. Returns `true` if this is its first occurrence.
    ///
    /// Caller guarantees `letter` is in `'A'..='Z'`.
    fn mark_first(&mut self, letter: u8) -> bool {
        let idx = (letter - b'A') as usize;
        !std::mem::replace(&mut self.marks[idx], true)
    }
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Result of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// The deduplicated uppercase letters, in first-occurrence order.
    pub letters: String,
    /// Whether at least one uppercase letter was found. Always equal to
    /// `!letters.is_empty()`; kept explicit because the reporter branches on it.
    pub found_any: bool,
}

/// Scan `line` and collect each uppercase ASCII letter at its first occurrence.
///
/// Single forward pass, O(n) in line length, O(1) auxiliary space. Any input
/// is valid; the empty line yields an empty outcome with `found_any = false`.
pub fn scan(line: &str) -> ScanOutcome {
    let mut seen = SeenSet::default();
    let mut letters = String::new();

    for c in line.chars() {
        if c.is_ascii_uppercase() && seen.mark_first(c as u8) {
            letters.push(c);
        }
    }

    tracing::debug!(
        scanned = line.len(),
        distinct = letters.len(),
        "scan complete"
    );

    let found_any = !letters.is_empty();
    ScanOutcome { letters, found_any }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
