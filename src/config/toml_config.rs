use crate::config::GameSettings;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional settings file. Every field is optional; anything omitted
/// keeps its default, and command-line flags still win.
///
/// ```toml
/// [game]
/// total_rounds = 10
/// choices_per_round = 12
///
/// [pacing]
/// correct_delay_ms = 2000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub game: Option<GameSection>,
    pub pacing: Option<PacingSection>,
    pub storage: Option<StorageSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSection {
    pub total_rounds: Option<u32>,
    pub choices_per_round: Option<usize>,
    pub points_per_correct: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PacingSection {
    pub correct_delay_ms: Option<u64>,
    pub incorrect_delay_ms: Option<u64>,
    pub settle_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<String>,
    pub portraits_dir: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(game) = &self.game {
            if let Some(v) = game.total_rounds {
                settings.total_rounds = v;
            }
            if let Some(v) = game.choices_per_round {
                settings.choices_per_round = v;
            }
            if let Some(v) = game.points_per_correct {
                settings.points_per_correct = v;
            }
        }
        if let Some(pacing) = &self.pacing {
            if let Some(v) = pacing.correct_delay_ms {
                settings.pacing.correct_delay_ms = v;
            }
            if let Some(v) = pacing.incorrect_delay_ms {
                settings.pacing.incorrect_delay_ms = v;
            }
            if let Some(v) = pacing.settle_delay_ms {
                settings.pacing.settle_delay_ms = v;
            }
        }
        if let Some(storage) = &self.storage {
            if let Some(v) = &storage.data_dir {
                settings.data_dir = v.clone();
            }
            if let Some(v) = &storage.portraits_dir {
                settings.portraits_dir = v.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_only_overrides_named_fields() {
        let config: TomlConfig = toml::from_str(
            r#"
[game]
total_rounds = 5

[pacing]
settle_delay_ms = 0
"#,
        )
        .unwrap();

        let mut settings = GameSettings::default();
        config.apply(&mut settings);
        assert_eq!(settings.total_rounds, 5);
        assert_eq!(settings.choices_per_round, 12);
        assert_eq!(settings.pacing.settle_delay_ms, 0);
        assert_eq!(settings.pacing.correct_delay_ms, 2000);
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let config: TomlConfig = toml::from_str("").unwrap();
        let mut settings = GameSettings::default();
        config.apply(&mut settings);
        assert_eq!(settings.total_rounds, 10);
        assert_eq!(settings.data_dir, "./data");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(toml::from_str::<TomlConfig>("[game\ntotal_rounds = ").is_err());
    }
}
