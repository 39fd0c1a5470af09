use crate::{
    ServiceDiscovery,
    error::ConfigError,
    location::{ServiceLocation, parse_port, parse_service_url},
    naming::NamingConvention,
    source::{EnvSource, ProcessEnv, env_not_blank},
};
use url::Url;

/// Services whose name ends with this are resolved from the database host/port variables
pub const DB_SERVICE_SUFFIX: &str = "-db";

/// Resolves service locations from environment variables instead of DNS
///
/// A service such as `secure-code` is read from a single URL variable
/// (`HMD_SECURE_CODE_URL=http://code-1547809825.internal:8080` with prefix `HMD`
/// and suffix `URL`). Any service ending in `-db` is read from the two database
/// variables of the [`NamingConvention`] instead.
#[derive(Debug, Clone)]
pub struct EnvLocator<S = ProcessEnv> {
    naming: NamingConvention,
    source: S,
}

impl EnvLocator<ProcessEnv> {
    /// Create a locator reading from the process environment
    pub fn new(naming: NamingConvention) -> Self {
        Self::with_source(naming, ProcessEnv)
    }
}

impl<S: EnvSource> EnvLocator<S> {
    /// Create a locator reading from an arbitrary source
    pub fn with_source(naming: NamingConvention, source: S) -> Self {
        Self { naming, source }
    }

    /// The naming convention this locator was built with
    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Resolve `service_name` to a host and port
    pub fn locate(&self, service_name: &str) -> Result<ServiceLocation, ConfigError> {
        let location = if service_name.ends_with(DB_SERVICE_SUFFIX) {
            self.locate_db()
        } else {
            self.locate_service(service_name)
        }?;

        tracing::debug!(service = service_name, %location, "located service");
        Ok(location)
    }

    /// Resolve `service_name` and format it as an `http` or `https` URL
    ///
    /// The port is left out of the URL when it is zero.
    pub fn get_http_url(&self, service_name: &str, use_tls: bool) -> Result<Url, ConfigError> {
        let location = self.locate(service_name)?;

        location
            .to_http_url(use_tls)
            .map_err(|e| ConfigError::InvalidUrl {
                key: service_name.to_string(),
                value: location.authority(),
                reason: e.to_string(),
            })
    }

    fn locate_service(&self, service_name: &str) -> Result<ServiceLocation, ConfigError> {
        let key = self.naming.build_service_var(service_name);
        tracing::debug!(service = service_name, key = %key, "reading service url");

        let raw = env_not_blank(&self.source, &key)?;
        parse_service_url(&key, &raw)
    }

    fn locate_db(&self) -> Result<ServiceLocation, ConfigError> {
        // Only checked here, since services without a database leave these empty
        if self.naming.db_host_var.is_empty() {
            return Err(ConfigError::MissingNamingField { field: "db host" });
        }
        if self.naming.db_port_var.is_empty() {
            return Err(ConfigError::MissingNamingField { field: "db port" });
        }

        let host = env_not_blank(&self.source, &self.naming.db_host_var)?;
        let port = env_not_blank(&self.source, &self.naming.db_port_var)?;
        let port = parse_port(&self.naming.db_port_var, &port)?;

        Ok(ServiceLocation::new(host, Some(port)))
    }
}

impl<S: EnvSource> ServiceDiscovery for EnvLocator<S> {
    fn find_service(&self, service_name: &str) -> Result<ServiceLocation, ConfigError> {
        self.locate(service_name)
    }

    fn get_http_url(&self, service_name: &str, use_tls: bool) -> Result<Url, ConfigError> {
        Self::get_http_url(self, service_name, use_tls)
    }
}
