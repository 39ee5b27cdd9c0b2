use crate::utils::error::{QuizError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const MIN_PLAYER_NAME_CHARS: usize = 2;

/// Trims the name and rejects anything shorter than two characters.
/// Returns the trimmed name so callers store the cleaned-up form.
pub fn validate_player_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.chars().count() < MIN_PLAYER_NAME_CHARS {
        return Err(QuizError::ValidationError {
            message: format!(
                "Please enter a name with at least {} characters.",
                MIN_PLAYER_NAME_CHARS
            ),
        });
    }
    Ok(trimmed)
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(QuizError::ConfigError {
            message: format!("{} must be at least {}, got {}", field_name, min_value, value),
        });
    }
    Ok(())
}

pub fn validate_at_most(field_name: &str, value: usize, max_value: usize) -> Result<()> {
    if value > max_value {
        return Err(QuizError::ConfigError {
            message: format!("{} must be at most {}, got {}", field_name, max_value, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_player_name() {
        assert_eq!(validate_player_name("Al").unwrap(), "Al");
        assert_eq!(validate_player_name("  Al  ").unwrap(), "Al");
        assert!(validate_player_name("A").is_err());
        assert!(validate_player_name(" A ").is_err());
        assert!(validate_player_name("   ").is_err());
        assert!(validate_player_name("").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rounds", 10, 1).is_ok());
        assert!(validate_positive_number("rounds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_at_most() {
        assert!(validate_at_most("choices", 12, 46).is_ok());
        assert!(validate_at_most("choices", 47, 46).is_err());
    }
}
