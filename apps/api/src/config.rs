use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable holding the bind address
pub const HOST_VAR: &str = "TEAM_DIVIDER_HOST";
/// Environment variable holding the listen port
pub const PORT_VAR: &str = "TEAM_DIVIDER_PORT";

/// Server configuration
///
/// Read from the process environment after `.env` has been loaded.
/// Missing or malformed values fall back to the defaults with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Builds the config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: parse_or(lookup(HOST_VAR), HOST_VAR, defaults.host),
            port: parse_or(lookup(PORT_VAR), PORT_VAR, defaults.port),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using {}", key, value, default);
            default
        }),
    }
}
