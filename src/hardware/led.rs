//! LED identities and their mapping table

use std::fmt;

/// Number of LEDs on the board
pub const LED_COUNT: usize = 4;

/// One of the board's user LEDs, named after its silkscreen label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Led {
    Led3,
    Led4,
    Led5,
    Led6,
}

/// Row of the mapping table
struct Mapping {
    led: Led,
    command_number: i32,
    gpio_pin: u8,
}

static MAPPINGS: [Mapping; LED_COUNT] = [
    Mapping { led: Led::Led3, command_number: 3, gpio_pin: 13 },
    Mapping { led: Led::Led4, command_number: 4, gpio_pin: 12 },
    Mapping { led: Led::Led5, command_number: 5, gpio_pin: 14 },
    Mapping { led: Led::Led6, command_number: 6, gpio_pin: 15 },
];

impl Led {
    /// All LEDs in hardware-table order
    pub const ALL: [Led; LED_COUNT] = [Led::Led3, Led::Led4, Led::Led5, Led::Led6];

    /// LED addressed by `led<N>`, if N is in 3..=6
    pub fn from_command_number(number: i32) -> Option<Led> {
        MAPPINGS
            .iter()
            .find(|m| m.command_number == number)
            .map(|m| m.led)
    }

    /// LED wired to port D pin `pin`, if the pin is one of 12..=15
    pub fn from_gpio_pin(pin: u8) -> Option<Led> {
        MAPPINGS.iter().find(|m| m.gpio_pin == pin).map(|m| m.led)
    }

    fn mapping(self) -> &'static Mapping {
        // MAPPINGS holds one row per variant, in declaration order
        &MAPPINGS[self.index()]
    }

    /// 0-based position in the hardware table
    pub fn index(self) -> usize {
        match self {
            Led::Led3 => 0,
            Led::Led4 => 1,
            Led::Led5 => 2,
            Led::Led6 => 3,
        }
    }

    /// Number used in `led<N>` commands
    pub fn command_number(self) -> i32 {
        self.mapping().command_number
    }

    /// Port D pin driving this LED
    pub fn gpio_pin(self) -> u8 {
        self.mapping().gpio_pin
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LED{}", self.command_number())
    }
}
