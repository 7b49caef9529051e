use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user configuration loaded from `~/.config/pngcrc/config.toml`.
///
/// Every field has a default, so a missing file or a partial file behaves like
/// the plain command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PngcrcConfig {
    /// Extension (without the dot) that skips the confirmation prompt.
    pub expected_extension: String,
    /// Answer "y" to the extension prompt without reading stdin.
    pub assume_yes: bool,
    /// Print the "upload both files" reminder after a successful run.
    pub upload_reminder: bool,
}

impl Default for PngcrcConfig {
    fn default() -> Self {
        Self {
            expected_extension: "png".to_string(),
            assume_yes: false,
            upload_reminder: true,
        }
    }
}

/// Location of the config file. Does not create it.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pngcrc")?;
    Ok(xdg_dirs.get_config_home().join("pngcrc").join("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults if there is none.
pub fn load() -> Result<PngcrcConfig> {
    let path = config_path()?;
    load_from(&path)
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<PngcrcConfig> {
    if !path.exists() {
        return Ok(PngcrcConfig::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PngcrcConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PngcrcConfig::default();
        assert_eq!(cfg.expected_extension, "png");
        assert!(!cfg.assume_yes);
        assert!(cfg.upload_reminder);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PngcrcConfig {
            expected_extension: "bmp".to_string(),
            assume_yes: true,
            upload_reminder: false,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PngcrcConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let parsed: PngcrcConfig = toml::from_str("assume_yes = true\n").unwrap();
        assert!(parsed.assume_yes);
        assert_eq!(parsed.expected_extension, "png");
        assert!(parsed.upload_reminder);
    }

    #[test]
    fn missing_file_is_default_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(load_from(&path).unwrap(), PngcrcConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "upload_reminder = \"sometimes\"").unwrap();
        assert!(load_from(&path).is_err());
    }
}
