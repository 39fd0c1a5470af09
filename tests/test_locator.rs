use env_locator::{ConfigError, EnvLocator, NamingConvention, ServiceDiscovery, ServiceLocation};

fn locator() -> EnvLocator {
    dotenvy::from_filename("./test.env").ok();
    EnvLocator::new(NamingConvention::new(
        "TEST_DB_HOST",
        "TEST_DB_PORT",
        "HMD",
        "URL",
    ))
}

#[test]
fn test_locate_service_from_env() {
    // Loaded from test.env, HMD_SECURE_CODE_URL=http://code-1547809825.internal:8080
    let location = locator().locate("secure-code").unwrap();

    assert_eq!(
        location,
        ServiceLocation::new("code-1547809825.internal", Some(8080))
    );
}

#[test]
fn test_locate_db_from_env() {
    let location = locator().locate("orders-db").unwrap();

    assert_eq!(location.host, "dbserver");
    assert_eq!(location.port, Some(5432));
}

#[test]
fn test_locate_db_bad_port_from_env() {
    dotenvy::from_filename("./test.env").ok();
    let locator = EnvLocator::new(NamingConvention::new(
        "TEST_DB_HOST",
        "TEST_BAD_DB_PORT",
        "",
        "",
    ));

    let error = locator.locate("orders-db").unwrap_err();

    assert!(matches!(error, ConfigError::InvalidPort { .. }));
    assert_eq!(error.key(), Some("TEST_BAD_DB_PORT"));
}

#[test]
fn test_locate_db_without_naming_fails() {
    let locator = EnvLocator::new(NamingConvention::default().with_service_suffix("URL"));

    let error = locator.locate("orders-db").unwrap_err();

    assert_eq!(error, ConfigError::MissingNamingField { field: "db host" });
}

#[test]
fn test_missing_service_is_error() {
    let error = locator().locate("not-configured").unwrap_err();

    assert_eq!(
        error,
        ConfigError::BlankOrUnset {
            key: "HMD_NOT_CONFIGURED_URL".to_string()
        }
    );
}

#[test]
fn test_service_without_port_is_error() {
    let error = locator().locate("no-port").unwrap_err();

    assert!(matches!(error, ConfigError::InvalidAuthority { .. }));
}

#[test]
fn test_http_url_from_env() {
    let url = locator().get_http_url("billing-api", false).unwrap();

    // The path of the stored URL is not carried over
    assert_eq!(url.as_str(), "http://billing.internal:443/");
}

#[test]
fn test_https_url_with_zero_port() {
    let url = locator().get_http_url("status", true).unwrap();

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.as_str(), "https://status.internal/");
}

#[test]
fn test_usable_as_service_discovery() {
    fn resolve(discovery: &impl ServiceDiscovery, name: &str) -> String {
        discovery.find_service(name).unwrap().to_string()
    }

    assert_eq!(resolve(&locator(), "secure-code"), "code-1547809825.internal:8080");
}
