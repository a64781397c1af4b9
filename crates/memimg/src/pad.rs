//! In-place row padding of memory-image files.
//!
//! A memory-image file lists one row of a simulated memory per line. RTL
//! tools expect the file to hold exactly as many rows as the memory has
//! words, so a hand-written image is padded up to that count with all-zero
//! rows whose width matches the widest row already present.
//!
//! The rewrite is destructive: the input file is read fully, validated, and
//! then truncated and rewritten. Validation failures happen before any
//! write, so a rejected call leaves the file byte-for-byte untouched. A
//! crash mid-write can still truncate the file; there is no backup.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MemImageError, Result};

/// Summary of a completed padding run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadReport {
    /// Total rows in the rewritten file.
    pub rows: usize,
    /// Filler rows appended.
    pub fill_rows: usize,
    /// Width in characters of each filler row.
    pub fill_width: usize,
}

/// Pads the file at `path` with all-zero rows until it holds `target_rows`.
///
/// Blank and whitespace-only lines are dropped; the remaining lines are kept
/// verbatim (newline-normalized) and followed by `target_rows - counted`
/// filler rows. Each filler row is as wide as the widest kept line, and the
/// rewritten file carries no trailing newline.
///
/// # Errors
///
/// * [`MemImageError::EmptyInput`] when no non-blank line exists.
/// * [`MemImageError::InsufficientTarget`] when `target_rows` does not
///   strictly exceed the counted rows; this is never a silent no-op.
/// * [`MemImageError::Io`] on read or write failure.
pub fn pad_in_place(path: &Path, target_rows: usize) -> Result<PadReport> {
    let text = fs::read_to_string(path).map_err(|e| MemImageError::io(path, e))?;

    let mut kept: Vec<&str> = Vec::new();
    let mut max_width = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        max_width = max_width.max(line.chars().count());
        kept.push(line);
    }

    if kept.is_empty() {
        return Err(MemImageError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    if target_rows <= kept.len() {
        return Err(MemImageError::InsufficientTarget {
            target: target_rows,
            rows: kept.len(),
        });
    }
    let fill_rows = target_rows - kept.len();

    debug!(
        rows = kept.len(),
        fill_rows,
        fill_width = max_width,
        "padding image"
    );

    let filler = "0".repeat(max_width);
    let mut out = kept.join("\n");
    out.push('\n');
    for i in 0..fill_rows {
        out.push_str(&filler);
        if i + 1 < fill_rows {
            out.push('\n');
        }
    }

    fs::write(path, out).map_err(|e| MemImageError::io(path, e))?;

    Ok(PadReport {
        rows: target_rows,
        fill_rows,
        fill_width: max_width,
    })
}
