//! Command definitions
//!
//! Structured values produced by the parsers.

use std::fmt;

use crate::hardware::Led;

/// The only GPIO bank the query grammar accepts
pub const GPIO_BANK: char = 'd';

/// What to do with an LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedAction {
    On,
    Off,
    Toggle,
}

impl LedAction {
    /// Match an action word exactly (case-sensitive)
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "on" => Some(LedAction::On),
            "off" => Some(LedAction::Off),
            "toggle" => Some(LedAction::Toggle),
            _ => None,
        }
    }

    /// Wire spelling of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            LedAction::On => "on",
            LedAction::Off => "off",
            LedAction::Toggle => "toggle",
        }
    }
}

impl fmt::Display for LedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated actuation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedCommand {
    pub led: Led,
    pub action: LedAction,
}

impl LedCommand {
    pub fn new(led: Led, action: LedAction) -> Self {
        Self { led, action }
    }
}

/// Canonical request text, e.g. `led3 toggle`
impl fmt::Display for LedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "led{} {}", self.led.command_number(), self.action)
    }
}

/// A validated read-state query on bank `d`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioQuery {
    pin: u8,
    led: Led,
}

impl GpioQuery {
    /// Query for `pin`, if it is one of the mapped pins
    pub fn new(pin: u8) -> Option<Self> {
        Led::from_gpio_pin(pin).map(|led| Self { pin, led })
    }

    /// Query for the pin wired to `led`
    pub fn for_led(led: Led) -> Self {
        Self { pin: led.gpio_pin(), led }
    }

    pub fn bank(&self) -> char {
        GPIO_BANK
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// LED whose state answers this query
    pub fn led(&self) -> Led {
        self.led
    }
}

/// Canonical request text, e.g. `read gpiod 13`
impl fmt::Display for GpioQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read gpio{} {}", self.bank(), self.pin)
    }
}

/// Result of a query: pin number and its level at the moment of the call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioReading {
    pub pin: u8,
    pub state: bool,
}
