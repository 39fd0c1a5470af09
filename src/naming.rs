/// Rules for deriving environment variable names from logical service names
///
/// Empty strings mean "not set". The database variable names are only checked when a
/// database lookup is attempted, since not every service has a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    /// Variable holding the database host, e.g. `DB_HOST`
    pub db_host_var: String,
    /// Variable holding the database port, e.g. `DB_PORT`
    pub db_port_var: String,
    /// Leading segment added to every service variable, e.g. `HMD`
    pub service_prefix: String,
    /// Trailing segment added to every service variable, e.g. `URL`
    pub service_suffix: String,
}

impl NamingConvention {
    pub fn new(
        db_host_var: impl Into<String>,
        db_port_var: impl Into<String>,
        service_prefix: impl Into<String>,
        service_suffix: impl Into<String>,
    ) -> Self {
        Self {
            db_host_var: db_host_var.into(),
            db_port_var: db_port_var.into(),
            service_prefix: service_prefix.into(),
            service_suffix: service_suffix.into(),
        }
    }

    pub fn with_db_vars(mut self, host: impl Into<String>, port: impl Into<String>) -> Self {
        self.db_host_var = host.into();
        self.db_port_var = port.into();
        self
    }

    pub fn with_service_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.service_prefix = prefix.into();
        self
    }

    pub fn with_service_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.service_suffix = suffix.into();
        self
    }

    /// Builds the variable name for a service
    ///
    /// `"secure-code"` with prefix `HMD` and suffix `URL` becomes `HMD_SECURE_CODE_URL`.
    pub fn build_service_var(&self, service_name: &str) -> String {
        let mut slugs: Vec<&str> = Vec::new();

        if !self.service_prefix.is_empty() {
            slugs.push(&self.service_prefix);
        }
        slugs.extend(service_name.split('-'));
        if !self.service_suffix.is_empty() {
            slugs.push(&self.service_suffix);
        }

        slugs.join("_").to_uppercase()
    }
}
