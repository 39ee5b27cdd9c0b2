pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::{QuizError, Result};
use crate::utils::validation::{validate_at_most, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOTAL_ROUNDS: u32 = 10;
pub const DEFAULT_CHOICES_PER_ROUND: usize = 12;
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 10;

/// Cosmetic delays between answer feedback and the next board, in ms.
/// These pace the terminal output; nothing synchronizes on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pacing {
    pub correct_delay_ms: u64,
    pub incorrect_delay_ms: u64,
    pub settle_delay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            correct_delay_ms: 2000,
            incorrect_delay_ms: 1000,
            settle_delay_ms: 500,
        }
    }
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            correct_delay_ms: 0,
            incorrect_delay_ms: 0,
            settle_delay_ms: 0,
        }
    }
}

/// Fully resolved game settings: TOML file values (when given) overridden
/// by command-line flags, with built-in defaults underneath.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub total_rounds: u32,
    pub choices_per_round: usize,
    pub points_per_correct: u32,
    pub data_dir: String,
    pub portraits_dir: String,
    pub seed: Option<u64>,
    pub pacing: Pacing,
    pub persist: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            choices_per_round: DEFAULT_CHOICES_PER_ROUND,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            data_dir: "./data".to_string(),
            portraits_dir: "./portraits".to_string(),
            seed: None,
            pacing: Pacing::default(),
            persist: true,
        }
    }
}

impl GameSettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = GameSettings::default();

        if let Some(path) = &cli.config {
            let file = TomlConfig::from_file(path)?;
            file.apply(&mut settings);
        }

        if let Some(rounds) = cli.rounds {
            settings.total_rounds = rounds;
        }
        if let Some(choices) = cli.choices {
            settings.choices_per_round = choices;
        }
        if let Some(data_dir) = &cli.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(portraits_dir) = &cli.portraits_dir {
            settings.portraits_dir = portraits_dir.clone();
        }
        settings.seed = cli.seed;
        if cli.fast {
            settings.pacing = Pacing::none();
        }
        settings.persist = !cli.no_persist;

        settings.validate()?;
        Ok(settings)
    }

    /// The roster-relative checks: a session must be able to deal every
    /// round without repeating a target, and a board must fit the roster.
    pub fn validate_for_roster(&self, roster_len: usize) -> Result<()> {
        validate_at_most("choices_per_round", self.choices_per_round, roster_len)?;
        if (roster_len as u32) < self.total_rounds {
            return Err(QuizError::ConfigError {
                message: format!(
                    "roster of {} cannot supply {} distinct targets",
                    roster_len, self.total_rounds
                ),
            });
        }
        Ok(())
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("total_rounds", self.total_rounds as usize, 1)?;
        validate_positive_number("choices_per_round", self.choices_per_round, 2)?;
        validate_positive_number("points_per_correct", self.points_per_correct as usize, 1)?;
        Ok(())
    }
}
