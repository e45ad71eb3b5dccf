use std::fmt;

/// Errors that can occur while reading host settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Color setting is not of the form `#RRGGBB`
    InvalidColor {
        value: String,
        suggestion: Option<String>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidColor { value, suggestion } => {
                write!(f, "Invalid color '{}'", value)?;
                if let Some(sug) = suggestion {
                    write!(f, " (Suggestion: {})", sug)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
