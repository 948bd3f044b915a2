//! Socket provisioning
//!
//! Creates and binds the UDP socket behind one channel.

use std::net::{IpAddr, SocketAddr, UdpSocket};

use socket2::{Domain, Protocol, Socket, Type};

use crate::error::{LedwireError, Result};

/// Open a non-blocking UDP socket bound to `addr:port`
///
/// Creation and binding fail with distinct errors. On failure the socket is
/// closed before returning.
pub fn bind_channel(addr: IpAddr, port: u16) -> Result<UdpSocket> {
    let address = SocketAddr::new(addr, port);

    let socket = Socket::new(Domain::for_address(address), Type::DGRAM, Some(Protocol::UDP))
        .map_err(|source| {
            tracing::error!("socket() failed for port {}: {}", port, source);
            LedwireError::SocketCreate { port, source }
        })?;

    socket.bind(&address.into()).map_err(|source| {
        tracing::error!("bind() failed for {}: {}", address, source);
        LedwireError::Bind { port, source }
    })?;

    socket.set_nonblocking(true)?;

    let socket: UdpSocket = socket.into();
    tracing::info!("UDP channel bound to {}", socket.local_addr()?);

    Ok(socket)
}
