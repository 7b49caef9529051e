//! `.crc32` sidecar files: naming, writing and reading back.
//!
//! A sidecar holds exactly `0x` + 8 lowercase hex digits with no newline.

use crate::checksum::Crc32;
use crate::error::GenerateError;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the image path.
pub const SIDECAR_SUFFIX: &str = ".crc32";

/// `photo.png` -> `photo.png.crc32`. The image extension is kept.
pub fn sidecar_path(image: &Path) -> PathBuf {
    let mut name: OsString = image.as_os_str().to_os_string();
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

/// Create or truncate the sidecar for `image` and write `crc` into it.
/// Returns the sidecar path.
pub fn write_sidecar(image: &Path, crc: Crc32) -> Result<PathBuf, GenerateError> {
    let path = sidecar_path(image);
    fs::write(&path, crc.to_string()).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(sidecar = %path.display(), %crc, "wrote sidecar");
    Ok(path)
}

/// Read a sidecar file and parse its checksum.
pub fn read_sidecar(sidecar: &Path) -> Result<Crc32> {
    let content = fs::read_to_string(sidecar)
        .with_context(|| format!("read {}", sidecar.display()))?;
    let crc = content
        .parse::<Crc32>()
        .with_context(|| format!("parse {}", sidecar.display()))?;
    Ok(crc)
}
