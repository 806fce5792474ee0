use crate::domain::settings::Settings;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};

fn default_min_length() -> usize {
    3
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Minimum trimmed length of a board name
    #[serde(default = "default_min_length")]
    pub min_board_name_length: usize,
    /// Minimum trimmed length of a task title
    #[serde(default = "default_min_length")]
    pub min_task_title_length: usize,
    /// Settings applied on start and on every reset
    #[serde(default)]
    pub default_settings: Settings,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_board_name_length: default_min_length(),
            min_task_title_length: default_min_length(),
            default_settings: Settings::default(),
        }
    }
}

impl StoreConfig {
    /// Parses a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.min_board_name_length == 0 {
            return Err(KanbanError::ConfigError(
                "min_board_name_length must be at least 1".to_string(),
            ));
        }
        if self.min_task_title_length == 0 {
            return Err(KanbanError::ConfigError(
                "min_task_title_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{Language, Theme};

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.min_board_name_length, 3);
        assert_eq!(config.min_task_title_length, 3);
        assert_eq!(config.default_settings.language, Language::En);
        assert_eq!(config.default_settings.theme, Theme::Light);
    }

    #[test]
    fn test_from_json_with_partial_fields() {
        let config = StoreConfig::from_json(
            r#"{"min_task_title_length": 5, "default_settings": {"theme": "dark"}}"#,
        )
        .unwrap();

        assert_eq!(config.min_board_name_length, 3);
        assert_eq!(config.min_task_title_length, 5);
        assert_eq!(config.default_settings.language, Language::En);
        assert_eq!(config.default_settings.theme, Theme::Dark);
    }

    #[test]
    fn test_from_json_rejects_zero_lengths() {
        let result = StoreConfig::from_json(r#"{"min_board_name_length": 0}"#);
        assert!(matches!(result, Err(KanbanError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = StoreConfig::from_json("{not json");
        assert!(matches!(result, Err(KanbanError::SerializationError(_))));
    }
}
