//! Transport settings.
//!
//! Values are set through [`HyperClientBuilder`](crate::HyperClientBuilder);
//! a whole [`ClientConfig`] can also be handed over with
//! [`HyperClientBuilder::config`](crate::HyperClientBuilder::config).

use std::time::Duration;

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("mattermost4rs/", env!("CARGO_PKG_VERSION"));

/// Limit for one exchange, from sending the request to the last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Limit for establishing the TCP connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings of a [`HyperClient`](crate::HyperClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Limit for one exchange, body included.
    pub timeout: Duration,
    /// Limit for establishing the TCP connection.
    pub connect_timeout: Duration,
    /// Keep-alive pool towards the server.
    pub pool: PoolConfig,
    /// `User-Agent` added to requests that do not set one.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            pool: PoolConfig::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Idle connections kept for reuse.
///
/// A client usually talks to a single server, so the per-host limit is the
/// size of the whole pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Idle connections kept per host.
    pub max_idle_per_host: usize,
    /// How long an idle connection is kept.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: Duration::from_secs(90),
        }
    }
}
