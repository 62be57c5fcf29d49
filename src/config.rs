use std::env;
use anyhow::{Context, Result};

/// Process configuration, read from the environment exactly once at startup.
///
/// Handlers never touch the process environment directly; everything they
/// need is carried here and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub hostname: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env_or("PORT", "8080")
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let environment = env_or("ENV", "development");

        let hostname = env_or("HOSTNAME", "unknown");

        Ok(Config {
            port,
            environment,
            hostname,
        })
    }

    /// Address the listener binds to. All interfaces, configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Hostname: {}", self.hostname);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

/// Read an environment variable, substituting `default` when the variable is
/// unset or set to the empty string.
fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
