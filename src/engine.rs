//! Engine Module
//!
//! Turns a received datagram into a hardware action and a reply.
//!
//! ## Responsibilities
//! - Route the payload to the parser of its channel
//! - Invoke the matching `LedBoard` call
//! - Map every rejection to the generic error reply, logging the reason

use std::net::SocketAddr;

use crate::error::CommandError;
use crate::hardware::LedBoard;
use crate::network::Channel;
use crate::protocol::{
    parse_gpio_query, parse_led_command, GpioReading, LedAction, LedCommand, Response,
};

/// Command executor bound to one LED board
///
/// Holds no LED state of its own; every query goes back to the board.
pub struct Engine<B> {
    board: B,
}

impl<B: LedBoard> Engine<B> {
    pub fn new(board: B) -> Self {
        Self { board }
    }

    /// Handle one datagram from `channel` and build the reply
    ///
    /// `peer` is only used for logging.
    pub fn handle(&mut self, channel: Channel, payload: &[u8], peer: SocketAddr) -> Response {
        let result = match channel {
            Channel::Actuation => self.execute_led(payload).map(|command| {
                tracing::debug!("{} from {}: {} {}", channel, peer, command.led, command.action);
                Response::Ok
            }),
            Channel::Query => self.execute_query(payload).map(|reading| {
                tracing::debug!(
                    "{} from {}: pin {} is {}",
                    channel,
                    peer,
                    reading.pin,
                    u8::from(reading.state)
                );
                Response::Gpio(reading)
            }),
        };

        result.unwrap_or_else(|e| {
            tracing::warn!(
                "{} command from {} rejected: {} (code {})",
                channel,
                peer,
                e,
                e.code()
            );
            Response::Error
        })
    }

    /// Parse an actuation command and apply it
    ///
    /// Nothing reaches the board unless parsing succeeds.
    pub fn execute_led(&mut self, payload: &[u8]) -> Result<LedCommand, CommandError> {
        let command = parse_led_command(payload)?;
        match command.action {
            LedAction::On => self.board.turn_on(command.led),
            LedAction::Off => self.board.turn_off(command.led),
            LedAction::Toggle => self.board.toggle(command.led),
        }
        Ok(command)
    }

    /// Parse a query and read the current level of the mapped LED
    pub fn execute_query(&self, payload: &[u8]) -> Result<GpioReading, CommandError> {
        let query = parse_gpio_query(payload)?;
        Ok(GpioReading {
            pin: query.pin(),
            state: self.board.state(query.led()),
        })
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }
}
