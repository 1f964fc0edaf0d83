use thiserror::Error;

/// A configuration value that parsed but is not usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("invalid log level '{value}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel { value: String },
}

impl ConfigError {
    pub(crate) fn unknown_theme(name: impl Into<String>, available: &[&str]) -> Self {
        Self::UnknownTheme {
            name: name.into(),
            available: available.join(", "),
        }
    }
}
