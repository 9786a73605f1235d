//! Server configuration loaded from environment variables.

use std::net::IpAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_CAPACITY: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (from ASSIGNMENT_HOST)
    pub host: IpAddr,
    /// Port to bind (from ASSIGNMENT_PORT)
    pub port: u16,
    /// Number of log records kept for the log endpoint (from ASSIGNMENT_LOG_CAPACITY)
    pub log_capacity: usize,
    /// Allowed CORS origins (from ASSIGNMENT_CORS_ORIGINS, comma-separated).
    /// `None` means any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("ASSIGNMENT_HOST") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "ASSIGNMENT_HOST",
                expected: "an IP address",
                value,
            })?,
            None => default_host(),
        };

        let port = match lookup("ASSIGNMENT_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "ASSIGNMENT_PORT",
                expected: "a port number",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let log_capacity = match lookup("ASSIGNMENT_LOG_CAPACITY") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "ASSIGNMENT_LOG_CAPACITY",
                expected: "a non-negative integer",
                value,
            })?,
            None => DEFAULT_LOG_CAPACITY,
        };

        let cors_origins = lookup("ASSIGNMENT_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Ok(Self {
            host,
            port,
            log_capacity,
            cors_origins,
        })
    }

    pub fn with_host(mut self, host: Option<IpAddr>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        self
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            log_capacity: DEFAULT_LOG_CAPACITY,
            cors_origins: None,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::LOCALHOST)
}
