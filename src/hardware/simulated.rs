//! Simulated LED board
//!
//! Stands in for the GPIO port on hosts without the hardware. Clones share
//! the same LED state, so a test can keep a handle while the server drives
//! the board.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Led, LedBoard, LED_COUNT};

/// In-memory LED board with shared state
#[derive(Debug, Clone, Default)]
pub struct SimulatedBoard {
    /// Output level per LED, indexed by `Led::index`
    levels: Arc<Mutex<[bool; LED_COUNT]>>,
}

impl SimulatedBoard {
    /// Create a board with every LED off
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all LED levels in hardware-table order
    pub fn snapshot(&self) -> [bool; LED_COUNT] {
        *self.levels.lock()
    }

    fn set(&self, led: Led, on: bool) {
        let mut levels = self.levels.lock();
        levels[led.index()] = on;
        tracing::info!("{} -> {}", led, if on { "on" } else { "off" });
    }
}

impl LedBoard for SimulatedBoard {
    fn turn_on(&mut self, led: Led) {
        self.set(led, true);
    }

    fn turn_off(&mut self, led: Led) {
        self.set(led, false);
    }

    fn toggle(&mut self, led: Led) {
        let mut levels = self.levels.lock();
        let level = &mut levels[led.index()];
        *level = !*level;
        tracing::info!("{} toggled -> {}", led, if *level { "on" } else { "off" });
    }

    fn state(&self, led: Led) -> bool {
        self.levels.lock()[led.index()]
    }
}
