//! CLI for pngcrc.

mod commands;
mod prompt;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use pngcrc_core::config::{self, PngcrcConfig};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub use commands::Outcome;

/// Write a `<image>.crc32` sidecar holding the image's CRC32.
#[derive(Debug, Parser)]
#[command(name = "pngcrc", version)]
#[command(
    about = "Generate a .crc32 checksum file for PNG change detection",
    long_about = None
)]
pub struct Cli {
    /// Path to the image (normally a .png).
    pub image: PathBuf,

    /// Continue without asking when the file does not have the expected extension.
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    /// Load the user config and generate the sidecar.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Outcome> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        self.run_with_config(&cfg, input, out)
    }

    pub fn run_with_config<R: BufRead, W: Write>(
        &self,
        cfg: &PngcrcConfig,
        input: &mut R,
        out: &mut W,
    ) -> Result<Outcome> {
        let assume_yes = self.yes || cfg.assume_yes;
        commands::run_generate(&self.image, assume_yes, cfg, input, out)
    }
}

/// Print a clap parse error (or help/version) to `out` and return the exit status.
///
/// Usage, help and version all go to stdout. Wrong argument counts exit
/// with 1; `--help` and `--version` exit with 0.
pub fn report_parse_error<W: Write>(err: &clap::Error, out: &mut W) -> u8 {
    let code = parse_error_exit_code(err);
    let _ = write!(out, "{}", err.render());
    if code != 0 {
        let _ = writeln!(
            out,
            "\nGenerates a .crc32 checksum file for image change detection."
        );
    }
    let _ = out.flush();
    code
}

pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Print a failed run as `Error: <details>`.
pub fn report_error<W: Write>(err: &anyhow::Error, out: &mut W) {
    let _ = writeln!(out, "Error: {:#}", err);
    let _ = out.flush();
}

/// Exit status for a finished run: declining the prompt is not a failure.
pub fn exit_code(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Generated(_)) | Ok(Outcome::Declined) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests;
