use crate::{
    ConfigLoader,
    error::ConfigError,
    source::{EnvSource, ProcessEnv, env_not_blank},
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Loads startup configuration from environment variables
///
/// Values are stored as JSON literals, so a string setting is written with its quotes:
/// `GREETING="\"hello\""`, `RETRIES=3`, `VERBOSE=true`, `TIMEOUT="\"1h30m\""`.
///
/// The `must_get_*` accessors panic when a value is missing or malformed. They are meant
/// for mandatory settings read while the process starts, where there is nothing useful
/// to do except stop. Use the `try_get_*` variants to handle the error instead.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader<S = ProcessEnv> {
    source: S,
}

impl EnvLoader<ProcessEnv> {
    /// Create a loader reading from the process environment
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl<S: EnvSource> EnvLoader<S> {
    /// Create a loader reading from an arbitrary source
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Does nothing, the environment needs no setup
    pub fn initialize(&self) -> Result<(), ConfigError> {
        tracing::trace!("initialize is a no-op for the environment loader");
        Ok(())
    }

    /// Does nothing, the environment cannot be written to
    pub fn import(&self, data: &[u8]) -> Result<(), ConfigError> {
        tracing::trace!(bytes = data.len(), "import is a no-op for the environment loader");
        Ok(())
    }

    /// Does nothing, the environment cannot be written to
    pub fn put(&self, key: &str, value: &[u8]) -> Result<(), ConfigError> {
        tracing::trace!(key, bytes = value.len(), "put is a no-op for the environment loader");
        Ok(())
    }

    /// Fetches the raw value of `key`
    ///
    /// Blank and unset variables are both reported as [`ConfigError::BlankOrUnset`].
    pub fn get(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        env_not_blank(&self.source, key).map(String::into_bytes)
    }

    /// Fetches `key` and decodes it from a quoted JSON string
    pub fn try_get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.decode(key, "string")
    }

    /// Fetches `key` and decodes it from a JSON boolean
    pub fn try_get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.decode(key, "bool")
    }

    /// Fetches `key` and decodes it from a JSON integer
    pub fn try_get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.decode(key, "integer")
    }

    /// Fetches `key` as a string and parses it as a duration such as `5s` or `1h30m`
    pub fn try_get_duration(&self, key: &str) -> Result<Duration, ConfigError> {
        let value = self.try_get_string(key)?;
        humantime::parse_duration(&value).map_err(|e| ConfigError::InvalidDuration {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        })
    }

    /// # Panics
    ///
    /// If `key` is blank, unset or not a quoted JSON string.
    pub fn must_get_string(&self, key: &str) -> String {
        must(key, self.try_get_string(key))
    }

    /// # Panics
    ///
    /// If `key` is blank, unset or not `true`/`false`.
    pub fn must_get_bool(&self, key: &str) -> bool {
        must(key, self.try_get_bool(key))
    }

    /// # Panics
    ///
    /// If `key` is blank, unset or not a JSON integer that fits in an `i64`.
    pub fn must_get_int(&self, key: &str) -> i64 {
        must(key, self.try_get_int(key))
    }

    /// # Panics
    ///
    /// If `key` is blank, unset, not a quoted JSON string, or not a valid duration.
    pub fn must_get_duration(&self, key: &str) -> Duration {
        must(key, self.try_get_duration(key))
    }

    fn decode<T: DeserializeOwned>(
        &self,
        key: &str,
        expected: &'static str,
    ) -> Result<T, ConfigError> {
        let raw = self.get(key)?;
        serde_json::from_slice(&raw).map_err(|e| ConfigError::Decode {
            key: key.to_string(),
            value: String::from_utf8_lossy(&raw).into_owned(),
            expected,
            reason: e.to_string(),
        })
    }
}

/// Aborts the calling flow on a configuration error
fn must<T>(key: &str, result: Result<T, ConfigError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            let message = match &e {
                ConfigError::BlankOrUnset { .. } => {
                    format!("Could not fetch config ({}) {}", key, e)
                }
                ConfigError::InvalidDuration { .. } => {
                    format!("Could not parse config ({}) into a duration: {}", key, e)
                }
                _ => format!("Could not unmarshal config ({}) {}", key, e),
            };
            tracing::error!(key, error = %e, "required configuration is unusable");
            panic!("{}", message);
        }
    }
}

impl<S: EnvSource> ConfigLoader for EnvLoader<S> {
    fn initialize(&self) -> Result<(), ConfigError> {
        Self::initialize(self)
    }

    fn import(&self, data: &[u8]) -> Result<(), ConfigError> {
        Self::import(self, data)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), ConfigError> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        Self::get(self, key)
    }

    fn must_get_string(&self, key: &str) -> String {
        Self::must_get_string(self, key)
    }

    fn must_get_bool(&self, key: &str) -> bool {
        Self::must_get_bool(self, key)
    }

    fn must_get_int(&self, key: &str) -> i64 {
        Self::must_get_int(self, key)
    }

    fn must_get_duration(&self, key: &str) -> Duration {
        Self::must_get_duration(self, key)
    }
}
