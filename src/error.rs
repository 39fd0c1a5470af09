use colored::Colorize;
use std::fmt;

/// Errors that can occur while resolving services or configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is empty or not set
    BlankOrUnset { key: String },
    /// A naming convention field needed for the lookup was left empty
    MissingNamingField { field: &'static str },
    /// The variable does not hold a parseable URL
    InvalidUrl {
        key: String,
        value: String,
        reason: String,
    },
    /// The URL authority could not be split into host and port
    InvalidAuthority {
        key: String,
        value: String,
        reason: String,
    },
    /// The port is not a valid TCP port number
    InvalidPort { key: String, value: String },
    /// The raw value is not a valid encoded literal of the expected type
    Decode {
        key: String,
        value: String,
        expected: &'static str,
        reason: String,
    },
    /// The decoded string is not a valid duration expression
    InvalidDuration {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// The environment variable this error is about, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingNamingField { .. } => None,
            ConfigError::BlankOrUnset { key }
            | ConfigError::InvalidUrl { key, .. }
            | ConfigError::InvalidAuthority { key, .. }
            | ConfigError::InvalidPort { key, .. }
            | ConfigError::Decode { key, .. }
            | ConfigError::InvalidDuration { key, .. } => Some(key),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlankOrUnset { key } => {
                write!(
                    f,
                    "({}) is blank or unset in the environment",
                    key.magenta().bold()
                )
            }
            ConfigError::MissingNamingField { field } => {
                write!(f, "{} var name cannot be blank", field.magenta().bold())
            }
            ConfigError::InvalidUrl { key, value, reason } => {
                write!(
                    f,
                    "{}: Invalid URL {}: {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                    reason
                )
            }
            ConfigError::InvalidAuthority { key, value, reason } => {
                write!(
                    f,
                    "{}: Invalid host:port in {}: {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                    reason
                )
            }
            ConfigError::InvalidPort { key, value } => {
                write!(
                    f,
                    "{}: Invalid port {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red()
                )
            }
            ConfigError::Decode {
                key,
                value,
                expected,
                reason,
            } => {
                write!(
                    f,
                    "{}: Invalid value {}, expected {}: {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                    expected.cyan(),
                    reason
                )
            }
            ConfigError::InvalidDuration { key, value, reason } => {
                write!(
                    f,
                    "{}: Invalid duration {}: {}",
                    key.magenta().bold(),
                    format!("'{}'", value).red(),
                    reason
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
