pub mod error;
pub mod loader;
pub mod location;
pub mod locator;
pub mod naming;
pub mod source;

// Re-export main types
pub use error::ConfigError;
pub use loader::EnvLoader;
pub use location::{ServiceLocation, parse_service_url};
pub use locator::{DB_SERVICE_SUFFIX, EnvLocator};
pub use naming::NamingConvention;
pub use source::{EnvSource, ProcessEnv, env_not_blank};

use std::time::Duration;
use url::Url;

/// Trait for finding where a service lives, as a DNS or consul lookup would
pub trait ServiceDiscovery {
    /// Resolve a logical service name to a host and port
    fn find_service(&self, service_name: &str) -> Result<ServiceLocation, ConfigError>;

    /// Resolve a service and format it as an `http` or `https` URL
    fn get_http_url(&self, service_name: &str, use_tls: bool) -> Result<Url, ConfigError>;
}

/// Trait for loading configuration from a key/value store
pub trait ConfigLoader {
    /// Prepare the store for reads
    fn initialize(&self) -> Result<(), ConfigError>;

    /// Load a batch of values into the store
    fn import(&self, data: &[u8]) -> Result<(), ConfigError>;

    /// Store a single value
    fn put(&self, key: &str, value: &[u8]) -> Result<(), ConfigError>;

    /// Fetch the raw value of a key
    fn get(&self, key: &str) -> Result<Vec<u8>, ConfigError>;

    /// Fetch a string value, panicking if it is missing or malformed
    fn must_get_string(&self, key: &str) -> String;

    /// Fetch a boolean value, panicking if it is missing or malformed
    fn must_get_bool(&self, key: &str) -> bool;

    /// Fetch an integer value, panicking if it is missing or malformed
    fn must_get_int(&self, key: &str) -> i64;

    /// Fetch a duration value, panicking if it is missing or malformed
    fn must_get_duration(&self, key: &str) -> Duration;
}
