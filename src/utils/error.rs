use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("No valid assignment found after {attempts} attempts")]
    MatchingExhausted { attempts: usize },

    #[error("Notification to {participant} failed: {reason}")]
    Notification { participant: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Roster request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("CSV roster error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SantaError {
    pub fn invalid_roster(reason: impl Into<String>) -> Self {
        SantaError::InvalidRoster {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        SantaError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
