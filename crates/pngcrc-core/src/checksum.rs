//! CRC32 (ISO-HDLC, the zlib/gzip polynomial) of a whole file.
//!
//! The value renders as `0x` followed by 8 lowercase hex digits, which is the
//! exact content of a `.crc32` sidecar.

use crate::error::{GenerateError, ParseCrc32Error};
use crc32fast::Hasher;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Maximum number of hex digits in a 32-bit value.
const HEX_DIGITS: usize = 8;

/// A CRC32 checksum as stored in a sidecar file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32(pub u32);

impl fmt::Display for Crc32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Parses sidecar content the way a polling device reads it: surrounding
/// whitespace is ignored and the `0x`/`0X` prefix is optional.
impl FromStr for Crc32 {
    type Err = ParseCrc32Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ParseCrc32Error::new(s, "no hex digits"));
        }
        if digits.len() > HEX_DIGITS {
            return Err(ParseCrc32Error::new(s, "more than 8 hex digits"));
        }
        // from_str_radix would accept a leading '+'.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseCrc32Error::new(s, "not a hex number"));
        }
        u32::from_str_radix(digits, 16)
            .map(Crc32)
            .map_err(|_| ParseCrc32Error::new(s, "not a hex number"))
    }
}

/// CRC32 of an in-memory byte slice.
pub fn crc32_bytes(data: &[u8]) -> Crc32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    Crc32(hasher.finalize())
}

/// Read the whole file and return its CRC32.
///
/// The file handle is closed before the checksum is computed.
pub fn crc32_path(path: &Path) -> Result<Crc32, GenerateError> {
    let data = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            GenerateError::NotFound(path.to_path_buf())
        } else {
            GenerateError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read input");
    Ok(crc32_bytes(&data))
}
