//! Error types for Roundel core.

use std::fmt;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
    /// The signal has been dropped and is no longer available.
    SignalDropped,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
            Self::SignalDropped => write!(f, "Signal has been dropped"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Errors raised while loading toolkit configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or does not match the schema.
    Parse(String),
    /// A value parsed but is outside its accepted domain.
    InvalidValue {
        /// Dotted path of the offending key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Failed to parse configuration: {msg}"),
            Self::InvalidValue { key, message } => {
                write!(f, "Invalid value for '{key}': {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "refresh.zone_height".into(),
            message: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'refresh.zone_height': must be positive"
        );
    }

    #[test]
    fn test_signal_error_display() {
        let err: Box<dyn Error> = Box::new(SignalError::SignalDropped);
        assert_eq!(err.to_string(), "Signal has been dropped");
        assert!(err.source().is_none());
    }
}
