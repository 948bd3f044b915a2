//! Readiness abstraction
//!
//! The dispatch loop only sees `Readiness` (wait for either channel) and
//! `Endpoint` (receive/send one datagram). The production pair is
//! `MioReadiness` with mio UDP sockets; tests plug in fakes.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use mio::net::UdpSocket;
use mio::{Events, Interest, Poll, Token};

use super::Channel;

/// Channels with a datagram waiting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ready {
    pub actuation: bool,
    pub query: bool,
}

impl Ready {
    pub const NONE: Ready = Ready { actuation: false, query: false };

    /// Readiness for a single channel
    pub fn only(channel: Channel) -> Self {
        let mut ready = Ready::NONE;
        ready.insert(channel);
        ready
    }

    pub fn is_empty(&self) -> bool {
        !self.actuation && !self.query
    }

    pub fn contains(&self, channel: Channel) -> bool {
        match channel {
            Channel::Actuation => self.actuation,
            Channel::Query => self.query,
        }
    }

    pub fn insert(&mut self, channel: Channel) {
        *self.flag(channel) = true;
    }

    pub fn remove(&mut self, channel: Channel) {
        *self.flag(channel) = false;
    }

    fn flag(&mut self, channel: Channel) -> &mut bool {
        match channel {
            Channel::Actuation => &mut self.actuation,
            Channel::Query => &mut self.query,
        }
    }
}

/// Bounded wait for readability on both channels
pub trait Readiness {
    /// Block up to `timeout`; an empty `Ready` means the wait timed out
    fn wait(&mut self, timeout: Duration) -> io::Result<Ready>;

    /// The channel's socket reported `WouldBlock`; stop reporting it until
    /// new data arrives
    fn drained(&mut self, channel: Channel);
}

/// Datagram socket as seen by the dispatch loop
pub trait Endpoint {
    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;

    fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize>;
}

impl Endpoint for UdpSocket {
    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        UdpSocket::recv_from(self, buf)
    }

    fn send_to(&self, buf: &[u8], target: SocketAddr) -> io::Result<usize> {
        UdpSocket::send_to(self, buf, target)
    }
}

// =============================================================================
// mio implementation
// =============================================================================

const ACTUATION_TOKEN: Token = Token(0);
const QUERY_TOKEN: Token = Token(1);

fn token_for(channel: Channel) -> Token {
    match channel {
        Channel::Actuation => ACTUATION_TOKEN,
        Channel::Query => QUERY_TOKEN,
    }
}

fn channel_for(token: Token) -> Option<Channel> {
    match token {
        ACTUATION_TOKEN => Some(Channel::Actuation),
        QUERY_TOKEN => Some(Channel::Query),
        _ => None,
    }
}

/// `mio::Poll` over the two channel sockets
///
/// mio is edge-triggered, while the loop reads only one datagram per ready
/// socket per iteration. A channel therefore stays ready until its socket
/// reports `WouldBlock`, and waits return immediately while any channel is
/// still ready.
pub struct MioReadiness {
    poll: Poll,
    events: Events,
    pending: Ready,
}

impl MioReadiness {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            poll: Poll::new()?,
            events: Events::with_capacity(Channel::ALL.len()),
            pending: Ready::NONE,
        })
    }

    /// Watch `socket` for readability on behalf of `channel`
    pub fn register(&mut self, socket: &mut UdpSocket, channel: Channel) -> io::Result<()> {
        self.poll
            .registry()
            .register(socket, token_for(channel), Interest::READABLE)
    }
}

impl Readiness for MioReadiness {
    fn wait(&mut self, timeout: Duration) -> io::Result<Ready> {
        let timeout = if self.pending.is_empty() {
            timeout
        } else {
            Duration::ZERO
        };

        self.poll.poll(&mut self.events, Some(timeout))?;

        for event in self.events.iter() {
            if let Some(channel) = channel_for(event.token()) {
                self.pending.insert(channel);
            }
        }

        Ok(self.pending)
    }

    fn drained(&mut self, channel: Channel) {
        self.pending.remove(channel);
    }
}
