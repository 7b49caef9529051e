//! Generate command: checksum an image and write its `.crc32` sidecar.

use super::Outcome;
use crate::cli::prompt;
use anyhow::Result;
use pngcrc_core::config::PngcrcConfig;
use pngcrc_core::generate::{ensure_exists, generate, has_expected_extension};
use std::io::{BufRead, Write};
use std::path::Path;

/// Check the path, ask about an unexpected extension, then write the sidecar
/// and report it on `out`.
pub fn run_generate<R: BufRead, W: Write>(
    image: &Path,
    assume_yes: bool,
    cfg: &PngcrcConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    ensure_exists(image)?;

    if !has_expected_extension(image, &cfg.expected_extension) {
        writeln!(
            out,
            "Warning: File '{}' doesn't have .{} extension",
            image.display(),
            cfg.expected_extension.trim_start_matches('.')
        )?;
        if assume_yes {
            tracing::debug!(image = %image.display(), "extension mismatch, continuing (--yes)");
        } else if !prompt::confirm(input, out, "Continue anyway?")? {
            tracing::info!(image = %image.display(), "declined after extension warning");
            return Ok(Outcome::Declined);
        }
    }

    writeln!(out, "Calculating CRC32 for {}...", image.display())?;
    let generated = generate(image)?;

    writeln!(out, "✓ Generated {}", generated.sidecar.display())?;
    writeln!(out, "  CRC32: {}", generated.checksum)?;
    if cfg.upload_reminder {
        writeln!(out)?;
        writeln!(out, "Upload both files together to the server your device polls:")?;
        writeln!(out, "  - {}", generated.image.display())?;
        writeln!(out, "  - {}", generated.sidecar.display())?;
    }

    Ok(Outcome::Generated(generated))
}
