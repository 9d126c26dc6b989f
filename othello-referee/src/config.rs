//! Match settings and their TOML loader.

use crate::error::ConfigError;
use othello_rules::{Color, Opening};
use std::path::Path;

/// Match settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub opening: Opening,
    pub first_to_move: Color,
    /// Rejected attempts allowed per turn before the referee gives up on a seat.
    pub max_rejections: u32,
    /// Print the board to stderr after every move and pass.
    pub echo_boards: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            opening: Opening::Standard,
            first_to_move: Color::Black,
            max_rejections: 3,
            echo_boards: false,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rejections == 0 {
            return Err(ConfigError::Validation(
                "max_rejections must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
    }

    #[test]
    fn parse_all_fields() {
        let config = MatchConfig::from_toml_str(
            r#"
            opening = "swapped"
            first_to_move = "white"
            max_rejections = 5
            echo_boards = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            MatchConfig {
                opening: Opening::Swapped,
                first_to_move: Color::White,
                max_rejections: 5,
                echo_boards: true,
            }
        );
    }

    #[test]
    fn zero_rejections_is_invalid() {
        let err = MatchConfig::from_toml_str("max_rejections = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn unknown_opening_is_a_parse_error() {
        let err = MatchConfig::from_toml_str(r#"opening = "diagonal""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "othello-referee-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "first_to_move = \"white\"\n").unwrap();
        let config = MatchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.first_to_move, Color::White);
        assert_eq!(config.max_rejections, 3);
    }

    #[test]
    fn missing_file() {
        let path = Path::new("/nonexistent/othello-referee/match.toml");
        assert!(matches!(
            MatchConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(
            MatchConfig::load_or_default(path).unwrap(),
            MatchConfig::default()
        );
    }
}
