//! Row-padding tests.
//!
//! Covers the padding contract: output row count, filler width, blank-line
//! handling, and that every rejected call leaves the file untouched.

use pretty_assertions::assert_eq;

use memimg_core::error::MemImageError;
use memimg_core::pad::{PadReport, pad_in_place};

use crate::common::{read_back, seeded_file};

#[test]
fn test_pads_to_target_with_widest_line() {
    // Widths 4, 6, 5; the filler must match the widest.
    let file = seeded_file("1010\n110011\n01010\n");

    let report = pad_in_place(file.path(), 5).unwrap();

    assert_eq!(
        report,
        PadReport {
            rows: 5,
            fill_rows: 2,
            fill_width: 6
        }
    );
    assert_eq!(read_back(file.path()), "1010\n110011\n01010\n000000\n000000");
}

#[test]
fn test_output_has_no_trailing_newline() {
    let file = seeded_file("11\n");

    let _ = pad_in_place(file.path(), 3).unwrap();

    assert!(!read_back(file.path()).ends_with('\n'));
}

#[test]
fn test_input_without_trailing_newline() {
    let file = seeded_file("1010\n1111");

    let _ = pad_in_place(file.path(), 4).unwrap();

    assert_eq!(read_back(file.path()), "1010\n1111\n0000\n0000");
}

#[test]
fn test_blank_lines_dropped_and_not_counted() {
    let file = seeded_file("101\n\n   \n010\n\t\n");

    let report = pad_in_place(file.path(), 4).unwrap();

    assert_eq!(report.fill_rows, 2);
    assert_eq!(read_back(file.path()), "101\n010\n000\n000");
}

#[test]
fn test_crlf_terminators_do_not_widen_filler() {
    let file = seeded_file("1010\r\n11\r\n");

    let report = pad_in_place(file.path(), 3).unwrap();

    assert_eq!(report.fill_width, 4);
    assert_eq!(read_back(file.path()), "1010\n11\n0000");
}

#[test]
fn test_target_equal_to_rows_fails() {
    let file = seeded_file("1\n0\n1\n");

    let err = pad_in_place(file.path(), 3).unwrap_err();

    assert!(matches!(
        err,
        MemImageError::InsufficientTarget { target: 3, rows: 3 }
    ));
}

#[test]
fn test_target_below_rows_fails_and_file_unmodified() {
    let seed = "1010\n0101\n1111\n";
    let file = seeded_file(seed);

    let err = pad_in_place(file.path(), 2).unwrap_err();

    assert!(matches!(err, MemImageError::InsufficientTarget { .. }));
    assert_eq!(read_back(file.path()), seed);
}

#[test]
fn test_empty_file_fails() {
    let file = seeded_file("");

    let err = pad_in_place(file.path(), 8).unwrap_err();

    assert!(matches!(err, MemImageError::EmptyInput { .. }));
    assert_eq!(read_back(file.path()), "");
}

#[test]
fn test_whitespace_only_file_counts_as_empty() {
    let file = seeded_file("  \n\t\n\n");

    let err = pad_in_place(file.path(), 8).unwrap_err();

    assert!(matches!(err, MemImageError::EmptyInput { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_image.txt");

    let err = pad_in_place(&path, 8).unwrap_err();

    assert!(matches!(err, MemImageError::Io { .. }));
}

#[test]
fn test_rerun_against_own_output_needs_larger_target() {
    // Filler rows count as rows on a second pass, so the same target is
    // rejected and a larger one keeps growing the file.
    let file = seeded_file("11\n");

    let _ = pad_in_place(file.path(), 3).unwrap();
    let err = pad_in_place(file.path(), 3).unwrap_err();
    assert!(matches!(
        err,
        MemImageError::InsufficientTarget { target: 3, rows: 3 }
    ));

    let report = pad_in_place(file.path(), 5).unwrap();
    assert_eq!(report.fill_rows, 2);
    assert_eq!(read_back(file.path()), "11\n00\n00\n00\n00");
}
