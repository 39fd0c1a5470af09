use colored::Colorize;
use env_locator::{EnvLoader, EnvLocator, NamingConvention};
use std::{env, fmt::Display};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let env_file = match take_flag_value(&mut args, "--env-file") {
        Ok(path) => path.unwrap_or_else(|| "./test.env".to_string()),
        Err(flag) => {
            eprintln!("{} {} needs a value", "✗".red(), flag);
            usage();
            std::process::exit(2);
        }
    };
    let use_tls = take_flag(&mut args, "--tls");
    dotenvy::from_filename(&env_file).ok();

    match (args.first().map(String::as_str), args.get(1)) {
        (Some("var"), Some(service)) => println!("{}", naming().build_service_var(service)),
        (Some("locate"), Some(service)) => report(locator().locate(service)),
        (Some("url"), Some(service)) => report(locator().get_http_url(service, use_tls)),
        (Some("get"), Some(key)) => report(
            EnvLoader::new()
                .get(key)
                .map(|raw| String::from_utf8_lossy(&raw).into_owned()),
        ),
        (Some("string"), Some(key)) => println!("{}", EnvLoader::new().must_get_string(key)),
        (Some("bool"), Some(key)) => println!("{}", EnvLoader::new().must_get_bool(key)),
        (Some("int"), Some(key)) => println!("{}", EnvLoader::new().must_get_int(key)),
        (Some("duration"), Some(key)) => {
            let duration = EnvLoader::new().must_get_duration(key);
            println!("{}", humantime::format_duration(duration));
        }
        (Some(arg), _) => println!(
            "unknown command or missing name: {}. Available: var, locate, url, get, string, bool, int, duration",
            arg
        ),
        (None, _) => usage(),
    };
}

fn usage() {
    println!("Usage: util-cli [--env-file PATH] [--tls] <command> <name>");
    println!("Commands:");
    println!("  var <service>      - Print the variable name a service is read from");
    println!("  locate <service>   - Resolve a service to host and port");
    println!("  url <service>      - Resolve a service to an http(s) URL");
    println!("  get <key>          - Print the raw value of a config key");
    println!("  string <key>       - Decode a config key as a string");
    println!("  bool <key>         - Decode a config key as a boolean");
    println!("  int <key>          - Decode a config key as an integer");
    println!("  duration <key>     - Decode a config key as a duration");
    println!();
    println!("The naming convention is read from LOCATOR_DB_HOST_VAR, LOCATOR_DB_PORT_VAR,");
    println!("LOCATOR_SERVICE_PREFIX and LOCATOR_SERVICE_SUFFIX.");
}

fn naming() -> NamingConvention {
    let var = |key: &str| env::var(key).unwrap_or_default();
    NamingConvention::new(
        var("LOCATOR_DB_HOST_VAR"),
        var("LOCATOR_DB_PORT_VAR"),
        var("LOCATOR_SERVICE_PREFIX"),
        var("LOCATOR_SERVICE_SUFFIX"),
    )
}

fn locator() -> EnvLocator {
    EnvLocator::new(naming())
}

fn report<T: Display, E: Display>(result: Result<T, E>) {
    match result {
        Ok(value) => println!("{} {}", "✓".green(), value),
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

/// Removes `flag` and its value, failing if the flag is last
fn take_flag_value<'a>(
    args: &mut Vec<String>,
    flag: &'a str,
) -> Result<Option<String>, &'a str> {
    let Some(index) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    args.remove(index);
    if index < args.len() {
        Ok(Some(args.remove(index)))
    } else {
        Err(flag)
    }
}
