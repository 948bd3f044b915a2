//! Dispatch Loop
//!
//! Waits on both channels, reads one datagram per ready channel, runs it
//! through the engine and replies to the sender.
//!
//! ## Iteration
//! ```text
//! wait(timeout) ─┬─ timeout ───────────────► Idle
//!                ├─ error ─────────────────► fatal, loop ends
//!                └─ ready ─► actuation? ─► recv → engine → send
//!                            query?     ─► recv → engine → send
//! ```

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::engine::Engine;
use crate::error::{LedwireError, Result};
use crate::hardware::LedBoard;
use crate::protocol::MAX_COMMAND_LEN;
use super::{Channel, Endpoint, Readiness};

/// Receive attempts per ready channel before it is parked
const RECV_ATTEMPTS: usize = 2;

/// Outcome of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    /// Nothing arrived before the timeout
    Idle,

    /// At least one command was processed and answered; the flags name the
    /// channels that carried one
    Handled { actuation: bool, query: bool },
}

/// Cloneable request to stop the loop after the current iteration
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    requested: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Single-threaded command loop over two channels
///
/// Sockets, buffers and peer addresses are all owned here or local to one
/// iteration.
pub struct DispatchLoop<R, E, B> {
    readiness: R,
    actuation: E,
    query: E,
    engine: Engine<B>,
    poll_timeout: Duration,
    shutdown: ShutdownHandle,
}

impl<R, E, B> DispatchLoop<R, E, B>
where
    R: Readiness,
    E: Endpoint,
    B: LedBoard,
{
    pub fn new(readiness: R, actuation: E, query: E, engine: Engine<B>, poll_timeout: Duration) -> Self {
        Self {
            readiness,
            actuation,
            query,
            engine,
            poll_timeout,
            shutdown: ShutdownHandle::new(),
        }
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn engine(&self) -> &Engine<B> {
        &self.engine
    }

    /// Serve until the readiness wait fails or shutdown is requested
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.shutdown.is_requested() {
                tracing::info!("Shutdown requested, leaving dispatch loop");
                return Ok(());
            }
            self.run_once()?;
        }
    }

    /// Run a single wait/read/reply iteration
    ///
    /// The actuation channel is fully handled before the query channel is
    /// looked at.
    pub fn run_once(&mut self) -> Result<Iteration> {
        let ready = match self.readiness.wait(self.poll_timeout) {
            Ok(ready) => ready,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                tracing::trace!("Readiness wait interrupted, waiting again");
                return Ok(Iteration::Idle);
            }
            Err(e) => {
                tracing::error!("Readiness wait failed: {}", e);
                return Err(LedwireError::Poll(e));
            }
        };

        if ready.is_empty() {
            tracing::trace!("No data within {:?}", self.poll_timeout);
            return Ok(Iteration::Idle);
        }

        let actuation = ready.actuation && self.serve(Channel::Actuation);
        let query = ready.query && self.serve(Channel::Query);

        if !actuation && !query {
            return Ok(Iteration::Idle);
        }
        Ok(Iteration::Handled { actuation, query })
    }

    /// Read one datagram from `channel` and answer it
    ///
    /// Returns false when nothing was processed: no datagram, an empty one,
    /// or a receive error.
    fn serve(&mut self, channel: Channel) -> bool {
        let endpoint = match channel {
            Channel::Actuation => &self.actuation,
            Channel::Query => &self.query,
        };

        // One spare byte so an oversized datagram is seen as oversized
        // rather than silently truncated to a valid length.
        let mut buffer = [0u8; MAX_COMMAND_LEN + 1];

        // A pending socket error (ICMP unreachable for an earlier reply) can
        // sit in front of a queued datagram. A second failure parks the
        // channel until its next readiness event.
        let mut attempts = 0;
        let (received, peer) = loop {
            match endpoint.recv_from(&mut buffer) {
                Ok(datagram) => break datagram,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    self.readiness.drained(channel);
                    return false;
                }
                Err(e) => {
                    tracing::warn!("recv_from() on {} channel failed: {}", channel, e);
                    attempts += 1;
                    if attempts == RECV_ATTEMPTS {
                        self.readiness.drained(channel);
                        return false;
                    }
                }
            }
        };

        if received == 0 {
            tracing::trace!("Ignoring empty datagram on {} channel from {}", channel, peer);
            return false;
        }

        let response = self.engine.handle(channel, &buffer[..received], peer);

        if let Err(e) = endpoint.send_to(&response.to_bytes(), peer) {
            tracing::warn!("send_to() {} on {} channel failed: {}", peer, channel, e);
        }

        true
    }
}
