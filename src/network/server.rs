//! UDP Server
//!
//! Provisions both channels and drives the dispatch loop.
//!
//! ## Lifecycle
//! ```text
//! Initializing ──bind ok──► Serving ──fatal error / shutdown──► Terminated
//!      │                                                            ▲
//!      └───────────────bind failed (no server returned)─────────────┘
//! ```

use std::net::SocketAddr;
use std::thread;

use mio::net::UdpSocket;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{LedwireError, Result};
use crate::hardware::LedBoard;
use super::{bind_channel, Channel, DispatchLoop, MioReadiness, ShutdownHandle};

/// Where the service is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Channels provisioned, loop not started
    Initializing,

    /// Dispatch loop running
    Serving,

    /// Loop ended; permanent
    Terminated,
}

/// UDP command server for ledwire
pub struct Server<B> {
    state: ServiceState,
    actuation_addr: SocketAddr,
    query_addr: SocketAddr,
    shutdown: ShutdownHandle,
    /// Taken when serving ends, which closes both sockets
    dispatch: Option<DispatchLoop<MioReadiness, UdpSocket, B>>,
}

impl<B: LedBoard> Server<B> {
    /// Wait out the startup delay, then bind both channels
    ///
    /// Either channel failing to bind is fatal; there is no partial service.
    pub fn bind(config: Config, board: B) -> Result<Self> {
        config.validate()?;

        if !config.startup_delay.is_zero() {
            tracing::info!("Waiting {:?} for the network stack", config.startup_delay);
            thread::sleep(config.startup_delay);
        }

        let actuation = bind_channel(config.bind_addr, config.actuation_port)?;
        let query = bind_channel(config.bind_addr, config.query_port)?;

        let actuation_addr = actuation.local_addr()?;
        let query_addr = query.local_addr()?;

        let mut actuation = UdpSocket::from_std(actuation);
        let mut query = UdpSocket::from_std(query);

        let mut readiness = MioReadiness::new()?;
        readiness.register(&mut actuation, Channel::Actuation)?;
        readiness.register(&mut query, Channel::Query)?;

        let dispatch = DispatchLoop::new(
            readiness,
            actuation,
            query,
            Engine::new(board),
            config.poll_timeout,
        );

        Ok(Self {
            state: ServiceState::Initializing,
            actuation_addr,
            query_addr,
            shutdown: dispatch.shutdown_handle(),
            dispatch: Some(dispatch),
        })
    }

    /// Serve commands (blocking)
    ///
    /// Returns once the loop ends, after which the server stays terminated.
    pub fn run(&mut self) -> Result<()> {
        let mut dispatch = self.dispatch.take().ok_or(LedwireError::Terminated)?;

        self.state = ServiceState::Serving;
        tracing::info!(
            "Serving actuation on {} and queries on {}",
            self.actuation_addr,
            self.query_addr
        );

        let result = dispatch.run();

        drop(dispatch);
        self.state = ServiceState::Terminated;

        match &result {
            Ok(()) => tracing::info!("Server terminated"),
            Err(e) => tracing::error!("Server terminated: {}", e),
        }
        result
    }

    /// Ask a running server to stop after its current iteration
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Bound address of a channel (useful when binding port 0)
    pub fn local_addr(&self, channel: Channel) -> SocketAddr {
        match channel {
            Channel::Actuation => self.actuation_addr,
            Channel::Query => self.query_addr,
        }
    }
}
