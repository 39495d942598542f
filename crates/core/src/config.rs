//! Game configuration
//!
//! Dimensions and seed for a game. The start offsets of the shapes are fixed,
//! so grids narrower than `MIN_COLUMNS` or shorter than `MIN_ROWS` are
//! rejected by [`GameConfig::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MIN_COLUMNS, MIN_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid height, buffer rows included
    pub rows: usize,
    /// Grid width
    pub columns: usize,
    /// Queue seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default dimensions with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS {
            return Err(ConfigError::TooFewRows {
                rows: self.rows,
                min: MIN_ROWS,
            });
        }
        if self.columns < MIN_COLUMNS {
            return Err(ConfigError::TooFewColumns {
                columns: self.columns,
                min: MIN_COLUMNS,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 22);
        assert_eq!(config.columns, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_grids() {
        let config = GameConfig::default().with_size(5, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewRows { rows: 5, min: 6 })
        ));

        let config = GameConfig::default().with_size(22, 6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewColumns { columns: 6, min: 7 })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config, GameConfig::seeded(42));

        let config = GameConfig::from_json_str(r#"{ "rows": 30, "columns": 12 }"#).unwrap();
        assert_eq!(config.rows, 30);
        assert_eq!(config.columns, 12);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "columns": 3 }"#),
            Err(ConfigError::TooFewColumns { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/nonexistent/blockfall.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/blockfall.json"));
    }
}
