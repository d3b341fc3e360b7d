use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default search endpoint.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://www.zazzle.com/svc/z3/search/GetSearchWithProperties";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("ZINSIGHT_ENV", "development"))?;

    let bind_addr = or_default("ZINSIGHT_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("ZINSIGHT_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("ZINSIGHT_LOG_LEVEL", "info");

    let upstream_url = or_default("ZINSIGHT_UPSTREAM_URL", DEFAULT_UPSTREAM_URL);
    if !(upstream_url.starts_with("http://") || upstream_url.starts_with("https://")) {
        return Err(invalid(
            "ZINSIGHT_UPSTREAM_URL",
            format!("\"{upstream_url}\" is not an http(s) URL"),
        ));
    }
    let upstream_timeout_secs = parse_u64("ZINSIGHT_UPSTREAM_TIMEOUT_SECS", "30")?;
    let upstream_user_agent = or_default(
        "ZINSIGHT_UPSTREAM_USER_AGENT",
        "zinsight/0.1 (search-insights)",
    );

    let page_size = parse_u32("ZINSIGHT_PAGE_SIZE", "120")?;
    if page_size == 0 {
        return Err(invalid("ZINSIGHT_PAGE_SIZE", "must be at least 1".to_string()));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        upstream_url,
        upstream_timeout_secs,
        upstream_user_agent,
        page_size,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ZINSIGHT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
