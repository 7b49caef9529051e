//! Image -> sidecar pipeline: existence check, checksum, write.

use crate::checksum::{crc32_path, Crc32};
use crate::error::GenerateError;
use crate::sidecar::write_sidecar;
use std::path::{Path, PathBuf};

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub image: PathBuf,
    pub sidecar: PathBuf,
    pub checksum: Crc32,
}

/// Fail with `NotFound` unless `image` exists.
pub fn ensure_exists(image: &Path) -> Result<(), GenerateError> {
    if image.exists() {
        Ok(())
    } else {
        Err(GenerateError::NotFound(image.to_path_buf()))
    }
}

/// True when the path ends in `.<extension>`, ignoring case.
///
/// Advisory only: the file content is never inspected.
pub fn has_expected_extension(image: &Path, extension: &str) -> bool {
    let name = image.to_string_lossy().to_lowercase();
    let suffix = format!(".{}", extension.trim_start_matches('.').to_lowercase());
    name.ends_with(&suffix)
}

/// Compute the CRC32 of `image` and write `<image>.crc32` next to it.
pub fn generate(image: &Path) -> Result<Generated, GenerateError> {
    ensure_exists(image)?;
    let checksum = crc32_path(image)?;
    let sidecar = write_sidecar(image, checksum)?;
    tracing::info!(
        image = %image.display(),
        sidecar = %sidecar.display(),
        %checksum,
        "generated sidecar"
    );
    Ok(Generated {
        image: image.to_path_buf(),
        sidecar,
        checksum,
    })
}
