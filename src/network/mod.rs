//! Network Module
//!
//! UDP socket provisioning and the command dispatch loop.
//!
//! ## Architecture
//! - One UDP socket per channel, both bound at startup
//! - A single thread waits on both sockets with a bounded timeout
//! - Each ready socket yields at most one datagram per iteration
//! - Commands routed through Engine

mod channel;
mod socket;
mod readiness;
mod dispatch;
mod server;

pub use channel::Channel;
pub use socket::bind_channel;
pub use readiness::{Endpoint, MioReadiness, Readiness, Ready};
pub use dispatch::{DispatchLoop, Iteration, ShutdownHandle};
pub use server::{Server, ServiceState};
