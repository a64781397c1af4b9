//! Synthesizes a binary memory-image file from a CSV signal table.
//!
//! The CSV's first row is a header and is ignored. Every other row carries a
//! binary address in column `--begin` and the word's bits in the columns
//! after it. The output lists `2^--lines` rows in address order; addresses
//! absent from the CSV come out all-zero. Usage errors exit 2 (clap), input
//! and I/O failures exit 1, `--help` exits 0.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use memimg_core::microcode::{self, SynthesisOptions};

#[derive(Parser, Debug)]
#[command(
    name = "gen_microcode",
    version,
    about = "Synthesize a binary memory-image file from a CSV signal table",
    long_about = "Synthesize a binary memory-image file from a CSV signal table.\n\nThe first CSV row is a header and is discarded. Each data row holds a binary address string in the column given by --begin; the columns after it concatenate into that address's word. The output holds 2^<bits> rows, one word per line, in address order, with unlisted addresses all-zero. Duplicate addresses resolve last-write-wins."
)]
struct Cli {
    /// Number of memory address bits; the image holds 2^<bits> rows.
    #[arg(short = 'l', long = "lines", value_name = "bits")]
    lines: u32,

    /// Zero-based CSV column holding the binary address string.
    #[arg(short = 'b', long = "begin", value_name = "colIndex")]
    begin: usize,

    /// Input CSV: header row, then (..., address, signal columns) rows.
    input: PathBuf,

    /// Output memory-image file, one binary word per line.
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let opts = SynthesisOptions {
        address_field: cli.begin,
        address_bits: cli.lines,
    };
    match microcode::synthesize(&cli.input, &opts, &cli.output) {
        Ok(report) => {
            println!(
                "Successfully written {}: {} rows of {} bits.",
                cli.output.display(),
                report.rows,
                report.word_width
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gen_microcode: {e}");
            ExitCode::FAILURE
        }
    }
}
