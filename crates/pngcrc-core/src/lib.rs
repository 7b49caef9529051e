pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod generate;
pub mod sidecar;

pub use checksum::Crc32;
pub use error::{GenerateError, ParseCrc32Error};
pub use generate::{generate, Generated};
