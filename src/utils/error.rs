use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Roster exhausted: every candidate has already been a target")]
    ExhaustionError,

    #[error("Invalid game transition: {event} while {phase}")]
    TransitionError { phase: String, event: String },
}

impl QuizError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            QuizError::IoError(e) => format!("A file operation failed: {}", e),
            QuizError::SerializationError(_) => "Saved game data could not be decoded.".to_string(),
            QuizError::TomlParseError(_) => "The settings file could not be parsed.".to_string(),
            QuizError::ConfigError { message } => message.clone(),
            QuizError::ValidationError { message } => message.clone(),
            QuizError::ExhaustionError => {
                "The roster is too small for the configured number of rounds.".to_string()
            }
            QuizError::TransitionError { .. } => "That action is not available right now.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuizError::IoError(_) => "Check that the data directory exists and is writable.",
            QuizError::SerializationError(_) => "Delete the corrupt file and start fresh.",
            QuizError::TomlParseError(_) | QuizError::ConfigError { .. } => {
                "Review the command-line flags and the settings file."
            }
            QuizError::ValidationError { .. } => "Adjust the input and try again.",
            QuizError::ExhaustionError => "Lower --rounds below the roster size.",
            QuizError::TransitionError { .. } => "Finish or restart the current game first.",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
