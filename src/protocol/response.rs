//! Response definitions
//!
//! Replies sent back to the peer that issued a command.

use std::fmt;

use crate::error::{LedwireError, Result};
use super::GpioReading;

/// A reply to send to the originating peer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Actuation command applied
    Ok,

    /// Query answered
    Gpio(GpioReading),

    /// Command rejected; the reason stays local
    Error,
}

impl Response {
    /// Encode the reply as datagram payload
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => f.write_str("OK\n"),
            Response::Gpio(reading) => {
                writeln!(f, "GPIO.{}={}", reading.pin, u8::from(reading.state))
            }
            Response::Error => f.write_str("error\n"),
        }
    }
}

/// Decode a reply datagram
///
/// Trailing NULs are ignored; firmware builds pad their replies with them.
pub fn parse_response(bytes: &[u8]) -> Result<Response> {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    let text = std::str::from_utf8(&bytes[..end])
        .map_err(|_| LedwireError::Protocol("reply is not valid UTF-8".to_string()))?;

    match text {
        "OK\n" => return Ok(Response::Ok),
        "error\n" => return Ok(Response::Error),
        _ => {}
    }

    let reading = text
        .strip_prefix("GPIO.")
        .and_then(|rest| rest.strip_suffix('\n'))
        .and_then(|rest| rest.split_once('='))
        .and_then(|(pin, state)| {
            let pin = pin.parse::<u8>().ok()?;
            let state = match state {
                "0" => false,
                "1" => true,
                _ => return None,
            };
            Some(GpioReading { pin, state })
        })
        .ok_or_else(|| LedwireError::Protocol(format!("unrecognized reply: {:?}", text)))?;

    Ok(Response::Gpio(reading))
}
