//! Command grammar parsers
//!
//! A small byte scanner for each channel. Matching follows C `scanf`
//! conventions: a space in the pattern matches any run of whitespace
//! (including none), numeric fields skip leading whitespace, literals must
//! match exactly, and input after the last matched field is ignored.
//!
//! ## Patterns
//! ```text
//! actuation: "led" <int> ws* <word>
//! query:     "read" ws* "gpio" <char> ws* <int>
//! ```
//!
//! ## Validation Order
//! ```text
//! actuation: buffer size → format → LED number → action word
//! query:     buffer size → format → bank → pin
//! ```

use crate::error::CommandError;
use crate::hardware::Led;
use super::{GpioQuery, LedAction, LedCommand, GPIO_BANK};

/// Largest datagram accepted as a command
pub const MAX_COMMAND_LEN: usize = 32;

// =============================================================================
// Actuation
// =============================================================================

/// Parse `led<N> <action>`
pub fn parse_led_command(buffer: &[u8]) -> Result<LedCommand, CommandError> {
    let mut scanner = Scanner::new(command_bytes(buffer)?);

    if !scanner.literal(b"led") {
        return Err(CommandError::WrongFormat);
    }
    let number = scanner.decimal().ok_or(CommandError::WrongFormat)?;
    let word = scanner.word().ok_or(CommandError::WrongFormat)?;

    let led = i32::try_from(number)
        .ok()
        .and_then(Led::from_command_number)
        .ok_or(CommandError::LedNumber)?;

    let action = std::str::from_utf8(word)
        .ok()
        .and_then(LedAction::from_word)
        .ok_or(CommandError::LedCommand)?;

    Ok(LedCommand::new(led, action))
}

// =============================================================================
// Query
// =============================================================================

/// Parse `read gpio<c> <N>`
pub fn parse_gpio_query(buffer: &[u8]) -> Result<GpioQuery, CommandError> {
    let mut scanner = Scanner::new(command_bytes(buffer)?);

    if !scanner.literal(b"read") {
        return Err(CommandError::WrongFormat);
    }
    scanner.skip_whitespace();
    if !scanner.literal(b"gpio") {
        return Err(CommandError::WrongFormat);
    }

    // The bank is any single byte, whitespace included
    let bank = scanner.byte().ok_or(CommandError::WrongFormat)?;
    scanner.skip_whitespace();
    let number = scanner.decimal().ok_or(CommandError::WrongFormat)?;

    if char::from(bank) != GPIO_BANK {
        return Err(CommandError::GpioName);
    }

    u8::try_from(number)
        .ok()
        .and_then(GpioQuery::new)
        .ok_or(CommandError::GpioPin)
}

// =============================================================================
// Scanner
// =============================================================================

/// Check the buffer size and cut the command at its first NUL
///
/// C clients often send the string terminator along with the text.
fn command_bytes(buffer: &[u8]) -> Result<&[u8], CommandError> {
    if buffer.is_empty() || buffer.len() > MAX_COMMAND_LEN {
        return Err(CommandError::Argument);
    }

    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    Ok(&buffer[..end])
}

/// Whitespace as C `isspace` defines it (adds vertical tab to ASCII's set)
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Cursor over the command bytes
struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Match `expected` exactly at the cursor
    fn literal(&mut self, expected: &[u8]) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let skipped = self.rest().iter().take_while(|&&b| is_space(b)).count();
        self.pos += skipped;
    }

    /// Next byte, whatever it is
    fn byte(&mut self) -> Option<u8> {
        let b = *self.rest().first()?;
        self.pos += 1;
        Some(b)
    }

    /// Optionally signed decimal after optional whitespace
    ///
    /// Reads the longest digit prefix. Values that do not fit in `i64`
    /// saturate, which keeps them outside every accepted range instead of
    /// turning them into format errors.
    fn decimal(&mut self) -> Option<i64> {
        self.skip_whitespace();

        let rest = self.rest();
        let sign = usize::from(matches!(rest.first(), Some(b'+') | Some(b'-')));
        let digits = rest[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }

        let negative = rest[0] == b'-';
        let value = rest[sign..sign + digits]
            .iter()
            .try_fold(0i64, |acc, &d| {
                let d = i64::from(d - b'0');
                acc.checked_mul(10).and_then(|acc| {
                    if negative {
                        acc.checked_sub(d)
                    } else {
                        acc.checked_add(d)
                    }
                })
            })
            .unwrap_or(if negative { i64::MIN } else { i64::MAX });

        self.pos += sign + digits;
        Some(value)
    }

    /// Non-empty run of non-whitespace bytes after optional whitespace
    fn word(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();

        let rest = self.rest();
        let len = rest.iter().take_while(|&&b| !is_space(b)).count();
        if len == 0 {
            return None;
        }

        self.pos += len;
        Some(&rest[..len])
    }
}
