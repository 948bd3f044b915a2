//! Error types for ledwire
//!
//! Two layers: `LedwireError` covers failures that end the service,
//! `CommandError` covers a single rejected command and never leaves the
//! dispatch loop.

use thiserror::Error;

/// Result type alias using LedwireError
pub type Result<T> = std::result::Result<T, LedwireError>;

/// Service-level error type. Every variant is fatal to the server.
#[derive(Debug, Error)]
pub enum LedwireError {
    // -------------------------------------------------------------------------
    // Socket Provisioning Errors
    // -------------------------------------------------------------------------
    #[error("Failed to create UDP socket for port {port}: {source}")]
    SocketCreate {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bind UDP port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Dispatch Loop Errors
    // -------------------------------------------------------------------------
    #[error("Readiness wait failed: {0}")]
    Poll(std::io::Error),

    #[error("Service already terminated")]
    Terminated,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reason a single command was rejected.
///
/// Only the generic `error\n` reply goes back over the wire; the kind and its
/// code are for local diagnostics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandError {
    /// Empty or oversized datagram
    #[error("empty or oversized command buffer")]
    Argument,

    /// Text does not follow the channel's token grammar
    #[error("command does not match the expected format")]
    WrongFormat,

    /// LED number outside 3..=6
    #[error("LED number out of range")]
    LedNumber,

    /// Action word other than on/off/toggle
    #[error("unknown LED action")]
    LedCommand,

    /// GPIO bank other than 'd'
    #[error("unknown GPIO bank")]
    GpioName,

    /// Pin outside {12, 13, 14, 15}
    #[error("GPIO pin out of range")]
    GpioPin,

    /// Reserved catch-all, not produced by the current grammar
    #[error("unknown command error")]
    Unknown,
}

impl CommandError {
    /// Stable diagnostic code written to the log alongside the error
    pub fn code(&self) -> i8 {
        match self {
            CommandError::Unknown => -1,
            CommandError::WrongFormat => -2,
            CommandError::LedNumber => -3,
            CommandError::LedCommand => -4,
            CommandError::GpioName => -5,
            CommandError::GpioPin => -6,
            CommandError::Argument => -7,
        }
    }
}
