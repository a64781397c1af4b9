//! Pads a memory-image file in place with all-zero rows.
//!
//! One-shot converter: reads the file, validates, then truncates and
//! rewrites it with filler rows appended until the target row count is
//! reached. Usage errors exit 2 (clap), validation and I/O failures exit 1,
//! `--help` exits 0.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use memimg_core::pad;

#[derive(Parser, Debug)]
#[command(
    name = "fill_image",
    version,
    about = "Pad a memory-image file with all-zero rows up to a target row count",
    long_about = "Pad a memory-image file in place with all-zero rows up to a target row count.\n\nBlank lines are dropped; every filler row is as wide as the widest remaining line. The target must strictly exceed the current row count."
)]
struct Cli {
    /// Target number of rows in the padded file.
    #[arg(short = 'n', long = "rows")]
    rows: usize,

    /// Memory-image file to pad in place.
    filename: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match pad::pad_in_place(&cli.filename, cli.rows) {
        Ok(report) => {
            println!(
                "{}: {} rows ({} filler rows of width {})",
                cli.filename.display(),
                report.rows,
                report.fill_rows,
                report.fill_width
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("fill_image: {e}");
            ExitCode::FAILURE
        }
    }
}
