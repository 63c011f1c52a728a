//! Gateway configuration loaded from `NUMSORT_*` environment variables.

use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

/// Environment variable holding the bind address.
pub const HOST_VAR: &str = "NUMSORT_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "NUMSORT_PORT";
/// Environment variable holding the name reported by `GET /`.
pub const SERVICE_NAME_VAR: &str = "NUMSORT_SERVICE_NAME";
/// Environment variable holding the request body size limit in bytes.
pub const MAX_BODY_BYTES_VAR: &str = "NUMSORT_MAX_BODY_BYTES";
/// Environment variable holding the default log filter directive.
pub const LOG_VAR: &str = "NUMSORT_LOG";

/// Log filter used when neither `RUST_LOG` nor `NUMSORT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SERVICE_NAME: &str = "Solar Car API";
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address to bind, e.g. `0.0.0.0` or `127.0.0.1`.
    pub host: IpAddr,
    /// TCP port to bind.
    pub port: u16,
    /// Name echoed by the root status endpoint.
    pub service_name: String,
    /// Largest accepted request body; larger bodies get 413.
    pub max_body_bytes: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if any variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if any variable is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(HOST_VAR) {
            config.host = parse(HOST_VAR, &raw)?;
        }
        if let Some(raw) = lookup(PORT_VAR) {
            config.port = parse(PORT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(SERVICE_NAME_VAR) {
            let name = raw.trim();
            if name.is_empty() {
                return Err(invalid(SERVICE_NAME_VAR, &raw, "must not be empty"));
            }
            config.service_name = name.to_owned();
        }
        if let Some(raw) = lookup(MAX_BODY_BYTES_VAR) {
            let limit: usize = parse(MAX_BODY_BYTES_VAR, &raw)?;
            if limit == 0 {
                return Err(invalid(MAX_BODY_BYTES_VAR, &raw, "must be greater than zero"));
            }
            config.max_body_bytes = limit;
        }
        if let Some(raw) = lookup(LOG_VAR) {
            config.log_filter = raw;
        }

        Ok(config)
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| invalid(var, raw, e))
}

fn invalid(var: &'static str, value: &str, reason: impl Display) -> ConfigError {
    ConfigError::InvalidValue { var, value: value.to_owned(), reason: reason.to_string() }
}
