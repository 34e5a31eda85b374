use std::collections::HashSet;
use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{ChipPool, DEFAULT_CHIPS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub chips: ChipConfig,
    pub display: DisplayConfig,
}

/// Symbols the players pick their chips from.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChipConfig {
    pub pool: Vec<char>,
}

impl Default for ChipConfig {
    fn default() -> Self {
        ChipConfig {
            pool: DEFAULT_CHIPS.to_vec(),
        }
    }
}

impl ChipConfig {
    pub fn to_pool(&self) -> ChipPool {
        ChipPool::new(self.pool.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Character drawn for an empty cell
    pub empty_cell: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { empty_cell: ' ' }
    }
}

impl AppConfig {
    /// Read and validate a config file. A missing file is an error here.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file means the default chips
    /// and display; only a present-but-broken file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check the pool holds six distinct printable symbols and the blank cell
    /// marker can be told apart from them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pool = &self.chips.pool;
        if pool.len() != DEFAULT_CHIPS.len() {
            return Err(ConfigError::Validation(format!(
                "chips.pool must hold exactly {} symbols, got {}",
                DEFAULT_CHIPS.len(),
                pool.len()
            )));
        }
        if let Some(c) = pool.iter().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigError::Validation(format!(
                "chips.pool contains unprintable symbol {c:?}"
            )));
        }
        let mut seen = HashSet::new();
        if let Some(c) = pool.iter().find(|&&c| !seen.insert(c)) {
            return Err(ConfigError::Validation(format!(
                "chips.pool lists '{c}' more than once"
            )));
        }
        let empty_cell = self.display.empty_cell;
        if empty_cell.is_control() {
            return Err(ConfigError::Validation(format!(
                "display.empty_cell must be printable, got {empty_cell:?}"
            )));
        }
        if pool.contains(&empty_cell) {
            return Err(ConfigError::Validation(format!(
                "display.empty_cell '{}' is also a chip symbol",
                self.display.empty_cell
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.chips.to_pool(), ChipPool::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
empty_cell = "."
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.empty_cell, '.');
        assert_eq!(config.chips.pool, DEFAULT_CHIPS.to_vec());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_custom_pool() {
        let toml_str = r#"
[chips]
pool = ["X", "O", "+", "=", "$", "~"]
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        assert_eq!(config.chips.to_pool().remaining(), &['X', 'O', '+', '=', '$', '~']);
    }

    #[test]
    fn test_multi_character_symbol_fails_to_parse() {
        let toml_str = r#"
[chips]
pool = ["XX", "O", "+", "=", "$", "~"]
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_short_pool() {
        let mut config = AppConfig::default();
        config.chips.pool.pop();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_symbol() {
        let mut config = AppConfig::default();
        config.chips.pool[5] = '&';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_whitespace_symbol() {
        let mut config = AppConfig::default();
        config.chips.pool[0] = ' ';
        config.display.empty_cell = '.';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_cell_in_pool() {
        let mut config = AppConfig::default();
        config.display.empty_cell = '@';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_control_empty_cell() {
        for c in ['\t', '\n', '\u{7f}'] {
            let mut config = AppConfig::default();
            config.display.empty_cell = c;
            assert!(config.validate().is_err(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
empty_cell = "-"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.empty_cell, '-');
        assert_eq!(config.chips, ChipConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chips]\npool = [\"&\"]\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
