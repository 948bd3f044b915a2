//! Protocol Module
//!
//! Defines the text protocol spoken on both UDP channels.
//!
//! ## Protocol Format
//!
//! One datagram carries one command, at most 32 bytes of ASCII. No framing
//! beyond the datagram boundary; a trailing newline or NUL is tolerated.
//!
//! ### Actuation channel
//! ```text
//! led<N> <action>        N ∈ {3,4,5,6}, action ∈ {on, off, toggle}
//! ```
//!
//! ### Query channel
//! ```text
//! read gpio<c> <N>       c = 'd', N ∈ {12,13,14,15}
//! ```
//!
//! ### Responses
//! - `OK\n`: actuation command applied
//! - `GPIO.<N>=<0|1>\n`: current level of the queried pin
//! - `error\n`: any rejected command, without further detail

mod command;
mod parser;
mod response;

pub use command::{GpioQuery, GpioReading, LedAction, LedCommand, GPIO_BANK};
pub use parser::{parse_gpio_query, parse_led_command, MAX_COMMAND_LEN};
pub use response::{parse_response, Response};
