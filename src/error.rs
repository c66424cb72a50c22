use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Inputs for which round-robin net assignment is undefined.
    #[error(
        "Invalid configuration: {reason} (number_of_people={number_of_people}, net_count={net_count})"
    )]
    InvalidConfiguration {
        number_of_people: i64,
        net_count: i64,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bracket error: {0}")]
    Bracket(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an invalid configuration error for the given sequence inputs
    pub fn invalid_configuration(
        number_of_people: i64,
        net_count: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            number_of_people,
            net_count,
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a bracket data error with context
    pub fn bracket_error(msg: impl Into<String>) -> Self {
        Self::Bracket(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error is a caller input-validation failure rather than a runtime fault
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, AppError::InvalidConfiguration { .. })
    }
}
