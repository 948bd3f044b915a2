//! Hardware Module
//!
//! Thin boundary to the LED/GPIO collaborator.
//!
//! ## Responsibilities
//! - Name the four LEDs and their command/pin mappings
//! - Define the `LedBoard` trait the engine drives
//! - Provide a host-side simulated board
//!
//! ## Mapping Table
//! ```text
//! ┌──────┬─────────┬──────────┬───────┐
//! │ LED  │ Command │ GPIO pin │ Index │
//! ├──────┼─────────┼──────────┼───────┤
//! │ LED3 │ led3    │ PD13     │ 0     │
//! │ LED4 │ led4    │ PD12     │ 1     │
//! │ LED5 │ led5    │ PD14     │ 2     │
//! │ LED6 │ led6    │ PD15     │ 3     │
//! └──────┴─────────┴──────────┴───────┘
//! ```

mod led;
mod simulated;

pub use led::{Led, LED_COUNT};
pub use simulated::SimulatedBoard;

/// Direct access to the LED hardware.
///
/// Calls are synchronous register accesses: no caching, no debouncing,
/// and no failure path.
pub trait LedBoard {
    /// Drive the LED on
    fn turn_on(&mut self, led: Led);

    /// Drive the LED off
    fn turn_off(&mut self, led: Led);

    /// Invert the LED's current output
    fn toggle(&mut self, led: Led);

    /// Read the LED's current output level
    fn state(&self, led: Led) -> bool;
}
