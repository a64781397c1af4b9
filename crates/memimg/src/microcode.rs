//! Microcode memory-image synthesis.
//!
//! Converts a CSV-described signal table into a dense, address-indexed
//! memory image. The pipeline is a single deterministic pass:
//! 1. **Index:** Each data record's address column (a binary string) keys a
//!    sparse map; the payload is the concatenation of every column after it.
//! 2. **Materialize:** A `2^address_bits`-row table is pre-filled with
//!    all-zero words and the sparse entries are overlaid by address.
//! 3. **Render:** Rows are emitted in address order, one per line.
//!
//! The first data record fixes the word width (`signals_size`); later
//! records are taken as-is without width validation, matching the original
//! toolchain's permissiveness for ragged tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::csv;
use crate::error::{MemImageError, Result};

/// Widest supported memory in address bits.
///
/// Bounds the materialized table at `2^32` rows so the shift below cannot
/// overflow; RTL memories in this toolchain are orders of magnitude smaller.
pub const MAX_ADDRESS_BITS: u32 = 32;

/// Parameters of a synthesis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Zero-based CSV column holding the binary address string. Columns at
    /// or before this index are excluded from the data payload.
    pub address_field: usize,
    /// Memory width in address bits; the image holds `2^address_bits` rows.
    pub address_bits: u32,
}

/// Summary of a completed synthesis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthReport {
    /// Rows written to the output image.
    pub rows: usize,
    /// Width in characters of each word.
    pub word_width: usize,
}

/// A dense, address-ordered memory image.
///
/// Index = address; every word is nominally `word_width` characters, with
/// unlisted addresses all-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    words: Vec<String>,
    word_width: usize,
}

impl MemoryImage {
    fn zeroed(rows: usize, word_width: usize) -> Self {
        Self {
            words: vec!["0".repeat(word_width); rows],
            word_width,
        }
    }

    /// Number of rows in the image.
    pub fn rows(&self) -> usize {
        self.words.len()
    }

    /// Word width fixed by the first data record.
    pub const fn word_width(&self) -> usize {
        self.word_width
    }

    /// The word stored at `address`, if the address is in range.
    pub fn word(&self, address: usize) -> Option<&str> {
        self.words.get(address).map(String::as_str)
    }

    /// Renders the image as text: one word per line, newline-separated,
    /// no trailing newline after the final row.
    pub fn render(&self) -> String {
        self.words.join("\n")
    }
}

/// Builds a memory image from CSV text.
///
/// The first non-blank record is a header and is discarded unconditionally;
/// it is never validated against `address_field`. Every following record
/// contributes one sparse entry, and duplicate addresses are resolved
/// last-write-wins.
///
/// # Errors
///
/// * [`MemImageError::UnsupportedAddressWidth`] when `address_bits` exceeds
///   [`MAX_ADDRESS_BITS`].
/// * [`MemImageError::NoDataRows`] when no record follows the header.
/// * [`MemImageError::MissingAddressColumn`] when a record is shorter than
///   `address_field + 1` columns.
/// * [`MemImageError::MalformedAddress`] when an address column does not
///   parse as base-2.
/// * [`MemImageError::AddressOutOfRange`] when a parsed address needs more
///   than `address_bits` bits.
pub fn build_image(csv_text: &str, opts: &SynthesisOptions) -> Result<MemoryImage> {
    if opts.address_bits > MAX_ADDRESS_BITS {
        return Err(MemImageError::UnsupportedAddressWidth {
            bits: opts.address_bits,
        });
    }
    let rows = 1_usize << opts.address_bits;

    let mut records = csv_text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    if records.next().is_none() {
        return Err(MemImageError::NoDataRows);
    }

    let mut sparse: HashMap<usize, String> = HashMap::new();
    let mut word_width: Option<usize> = None;

    for (index, line) in records {
        let line_no = index + 1;
        let fields = csv::split_record(line);

        let Some(field) = fields.get(opts.address_field) else {
            return Err(MemImageError::MissingAddressColumn {
                line: line_no,
                column: opts.address_field,
            });
        };
        let trimmed = field.trim();
        let address = usize::from_str_radix(trimmed, 2).map_err(|_| {
            MemImageError::MalformedAddress {
                line: line_no,
                field: trimmed.to_string(),
            }
        })?;
        if address >= rows {
            return Err(MemImageError::AddressOutOfRange {
                line: line_no,
                address,
                address_bits: opts.address_bits,
            });
        }

        let word: String = fields[opts.address_field + 1..].concat();
        if word_width.is_none() {
            word_width = Some(word.len());
        }
        let _ = sparse.insert(address, word);
    }

    let Some(word_width) = word_width else {
        return Err(MemImageError::NoDataRows);
    };

    debug!(rows, word_width, listed = sparse.len(), "materializing image");

    let mut image = MemoryImage::zeroed(rows, word_width);
    for (address, word) in sparse {
        image.words[address] = word;
    }
    Ok(image)
}

/// Reads the CSV at `csv_path`, builds the image, and writes it to
/// `out_path` as text (one word per line, no trailing newline).
///
/// # Errors
///
/// Everything [`build_image`] returns, plus [`MemImageError::Io`] on read
/// or write failure. A build failure prevents any write to `out_path`.
pub fn synthesize(
    csv_path: &Path,
    opts: &SynthesisOptions,
    out_path: &Path,
) -> Result<SynthReport> {
    let text = fs::read_to_string(csv_path).map_err(|e| MemImageError::io(csv_path, e))?;
    let image = build_image(&text, opts)?;
    fs::write(out_path, image.render()).map_err(|e| MemImageError::io(out_path, e))?;

    Ok(SynthReport {
        rows: image.rows(),
        word_width: image.word_width(),
    })
}
