use crate::error::ConfigError;
use std::{
    collections::{BTreeMap, HashMap},
    env,
};

/// Read-only access to a string keyed store of string values
///
/// The process environment is the production store; maps stand in for it in tests.
pub trait EnvSource {
    /// Returns the value stored under `key`, or `None` if it is not set
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values count as unset
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Fetches `key`, treating an empty value the same as a missing one
pub fn env_not_blank<S: EnvSource + ?Sized>(source: &S, key: &str) -> Result<String, ConfigError> {
    match source.var(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::BlankOrUnset {
            key: key.to_string(),
        }),
    }
}
