//! Server configuration loaded from environment variables.
//!
//! Blank or unset variables fall back to defaults. Unparseable values are
//! logged at `warn` and fall back too, so logging settings load first and
//! the bind address after logging is up.

use log::{info, warn};
use moodboard_core::default_log_level;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub const HOST_VAR: &str = "MOODBOARD_HOST";
pub const PORT_VAR: &str = "MOODBOARD_PORT";
pub const LOG_LEVEL_VAR: &str = "MOODBOARD_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "MOODBOARD_LOG_DIR";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Absolute directory for rolling log files; `None` logs to stderr.
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: non_blank(&lookup, LOG_LEVEL_VAR).unwrap_or_else(|| Self::default().level),
            dir: non_blank(&lookup, LOG_DIR_VAR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: try_load(&lookup, HOST_VAR, defaults.host),
            port: try_load(&lookup, PORT_VAR, defaults.port),
        }
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = non_blank(lookup, key) else {
        info!("event=config_load module=http status=default key={key} value={default}");
        return default;
    };
    raw.parse().unwrap_or_else(|err| {
        warn!(
            "event=config_load module=http status=fallback key={key} value={raw} default={default} error={err}"
        );
        default
    })
}

#[cfg(test)]
mod tests {
    use super::{LogConfig, ServerConfig, HOST_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR, PORT_VAR};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_and_blank_values_use_defaults() {
        let env = lookup(&[(PORT_VAR, "  "), (LOG_LEVEL_VAR, "")]);
        let config = ServerConfig::from_lookup(&env);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.address().to_string(), "0.0.0.0:3000");
        assert_eq!(LogConfig::from_lookup(&env), LogConfig::default());
    }

    #[test]
    fn values_are_trimmed_and_parsed() {
        let env = lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, " 8080 "),
            (LOG_LEVEL_VAR, " debug "),
            (LOG_DIR_VAR, "/var/log/moodboard"),
        ]);
        assert_eq!(
            ServerConfig::from_lookup(&env).address().to_string(),
            "127.0.0.1:8080"
        );
        let log = LogConfig::from_lookup(&env);
        assert_eq!(log.level, "debug");
        assert_eq!(log.dir.as_deref(), Some("/var/log/moodboard"));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "eighty")]));
        assert_eq!(config, ServerConfig::default());

        let config =
            ServerConfig::from_lookup(lookup(&[(HOST_VAR, "not-an-ip"), (PORT_VAR, "70000")]));
        assert_eq!(config.address().to_string(), "0.0.0.0:3000");

        let config = ServerConfig::from_lookup(lookup(&[(HOST_VAR, "bogus"), (PORT_VAR, "4000")]));
        assert_eq!(config.address().to_string(), "0.0.0.0:4000");
    }
}
