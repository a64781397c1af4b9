//! Memory-image utilities for an RTL toolchain.
//!
//! This crate implements the two offline converters used to prepare ROM/RAM
//! initialization files for hardware designs:
//! 1. **Row padding:** Extend a text memory-image file in place with all-zero
//!    filler rows until it holds a target number of rows.
//! 2. **Microcode synthesis:** Turn a CSV table of control signals into a
//!    dense, address-ordered memory-image file of exactly `2^address_bits`
//!    rows, unlisted addresses zero-filled.
//!
//! Both converters are single-pass and fully synchronous; each entry point
//! takes explicit options and returns a typed [`Result`], so the process
//! boundary (argument parsing, exit codes) lives entirely in the binaries.

/// Minimal Excel-dialect CSV record splitting.
pub mod csv;
/// Error types shared by both converters.
pub mod error;
/// Microcode memory-image synthesis.
pub mod microcode;
/// In-place row padding of memory-image files.
pub mod pad;

/// Unified error type; every fallible operation in this crate returns it.
pub use crate::error::{MemImageError, Result};
/// Dense memory image plus the options that shape a synthesis run.
pub use crate::microcode::{MemoryImage, SynthReport, SynthesisOptions};
/// Summary returned by a successful padding run.
pub use crate::pad::PadReport;
