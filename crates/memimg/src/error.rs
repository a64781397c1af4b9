//! Error definitions for the memory-image converters.
//!
//! Every failure either converter can hit is a variant of [`MemImageError`].
//! All errors are terminal for the run: no retry, no rollback of partially
//! written output. The library never terminates the process; binaries map
//! an `Err` to a message and a nonzero exit code.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, MemImageError>;

/// Unified error type for both converters.
#[derive(Debug, Error)]
pub enum MemImageError {
    /// An underlying file read or write failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File the operation was addressing.
        path: PathBuf,
        /// The originating I/O error.
        #[source]
        source: io::Error,
    },

    /// The padder found no non-blank lines in its input.
    #[error("{}: file is empty", .path.display())]
    EmptyInput {
        /// File that was scanned.
        path: PathBuf,
    },

    /// The requested row count does not exceed the rows already present.
    ///
    /// Padding never silently no-ops: asking for a target at or below the
    /// current row count is an error and leaves the file untouched.
    #[error("target of {target} rows does not exceed the {rows} rows already in the file")]
    InsufficientTarget {
        /// Requested total row count.
        target: usize,
        /// Non-blank rows counted in the input.
        rows: usize,
    },

    /// The CSV held a header but no data rows.
    ///
    /// The first data row fixes the word width, so at least one is required.
    #[error("no data rows after the CSV header")]
    NoDataRows,

    /// An address column did not parse as a binary integer.
    #[error("line {line}: {field:?} is not a binary address")]
    MalformedAddress {
        /// One-based CSV line number.
        line: usize,
        /// The offending field, trimmed.
        field: String,
    },

    /// A data record was too short to contain the address column.
    #[error("line {line}: record has no column {column}")]
    MissingAddressColumn {
        /// One-based CSV line number.
        line: usize,
        /// Zero-based column index that was requested.
        column: usize,
    },

    /// A parsed address does not fit in the configured memory.
    #[error("line {line}: address {address:#b} does not fit in {address_bits} address bits")]
    AddressOutOfRange {
        /// One-based CSV line number.
        line: usize,
        /// The parsed address.
        address: usize,
        /// Configured memory width in address bits.
        address_bits: u32,
    },

    /// The configured address width would overflow the host.
    #[error(
        "{bits} address bits is wider than the supported maximum of {}",
        crate::microcode::MAX_ADDRESS_BITS
    )]
    UnsupportedAddressWidth {
        /// Requested memory width in address bits.
        bits: u32,
    },
}

impl MemImageError {
    /// Wraps an I/O error with the path it was hit on.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
