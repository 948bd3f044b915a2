//! Configuration for ledwire
//!
//! Centralized configuration with defaults matching the board firmware.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::error::{LedwireError, Result};

/// Default port of the actuation channel (`led<N> <action>`)
pub const DEFAULT_ACTUATION_PORT: u16 = 5678;

/// Default port of the query channel (`read gpio<c> <N>`)
pub const DEFAULT_QUERY_PORT: u16 = 1234;

/// Main configuration for a ledwire service
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Local address both channels bind to
    pub bind_addr: IpAddr,

    /// UDP port of the actuation channel
    pub actuation_port: u16,

    /// UDP port of the query channel
    pub query_port: u16,

    // -------------------------------------------------------------------------
    // Dispatch Loop Configuration
    // -------------------------------------------------------------------------
    /// Upper bound on a single readiness wait
    pub poll_timeout: Duration,

    /// Wait before binding, gives the network stack time to come up
    pub startup_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            actuation_port: DEFAULT_ACTUATION_PORT,
            query_port: DEFAULT_QUERY_PORT,
            poll_timeout: Duration::from_secs(5),
            startup_delay: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check settings that would make the service unusable
    ///
    /// Port 0 asks the OS for an ephemeral port, so two zeros are fine.
    pub fn validate(&self) -> Result<()> {
        if self.actuation_port != 0 && self.actuation_port == self.query_port {
            return Err(LedwireError::Config(format!(
                "actuation and query channels share port {}",
                self.actuation_port
            )));
        }
        if self.poll_timeout.is_zero() {
            return Err(LedwireError::Config(
                "poll timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the local address to bind
    pub fn bind_addr(mut self, addr: impl Into<IpAddr>) -> Self {
        self.config.bind_addr = addr.into();
        self
    }

    /// Set the actuation channel port
    pub fn actuation_port(mut self, port: u16) -> Self {
        self.config.actuation_port = port;
        self
    }

    /// Set the query channel port
    pub fn query_port(mut self, port: u16) -> Self {
        self.config.query_port = port;
        self
    }

    /// Set the readiness wait timeout
    pub fn poll_timeout(mut self, timeout: Duration) -> Self {
        self.config.poll_timeout = timeout;
        self
    }

    /// Set the pre-bind startup delay
    pub fn startup_delay(mut self, delay: Duration) -> Self {
        self.config.startup_delay = delay;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
