//! Response Tests
//!
//! Tests for reply formatting, reply parsing and canonical request text.

use ledwire::hardware::Led;
use ledwire::protocol::{parse_response, GpioQuery, GpioReading, LedAction, LedCommand, Response};

// =============================================================================
// Wire Text
// =============================================================================

#[test]
fn test_ok_bytes() {
    assert_eq!(Response::Ok.to_bytes(), b"OK\n");
}

#[test]
fn test_error_bytes() {
    assert_eq!(Response::Error.to_bytes(), b"error\n");
    assert!(Response::Error.is_error());
    assert!(!Response::Ok.is_error());
}

#[test]
fn test_gpio_bytes() {
    let on = Response::Gpio(GpioReading { pin: 13, state: true });
    assert_eq!(on.to_bytes(), b"GPIO.13=1\n");

    let off = Response::Gpio(GpioReading { pin: 15, state: false });
    assert_eq!(off.to_bytes(), b"GPIO.15=0\n");
}

// =============================================================================
// Reply Parsing
// =============================================================================

#[test]
fn test_parse_replies() {
    assert_eq!(parse_response(b"OK\n").unwrap(), Response::Ok);
    assert_eq!(parse_response(b"error\n").unwrap(), Response::Error);
    assert_eq!(
        parse_response(b"GPIO.12=1\n").unwrap(),
        Response::Gpio(GpioReading { pin: 12, state: true })
    );
}

#[test]
fn test_parse_nul_padded_replies() {
    assert_eq!(parse_response(b"OK\n\0").unwrap(), Response::Ok);
    assert_eq!(
        parse_response(b"GPIO.14=0\n\0").unwrap(),
        Response::Gpio(GpioReading { pin: 14, state: false })
    );
}

#[test]
fn test_parse_garbage_rejected() {
    assert!(parse_response(b"").is_err());
    assert!(parse_response(b"ok\n").is_err());
    assert!(parse_response(b"GPIO.13=2\n").is_err());
    assert!(parse_response(b"GPIO.x=1\n").is_err());
    assert!(parse_response(b"GPIO.13=1").is_err());
    assert!(parse_response(&[0xff, 0xfe]).is_err());
}

// =============================================================================
// Request Text
// =============================================================================

#[test]
fn test_led_command_display() {
    let command = LedCommand::new(Led::Led5, LedAction::Toggle);
    assert_eq!(command.to_string(), "led5 toggle");
}

#[test]
fn test_gpio_query_display() {
    assert_eq!(GpioQuery::new(13).unwrap().to_string(), "read gpiod 13");
    assert_eq!(GpioQuery::for_led(Led::Led4).to_string(), "read gpiod 12");
    assert!(GpioQuery::new(11).is_none());
}

#[test]
fn test_led_mapping_table() {
    for led in Led::ALL {
        assert_eq!(Led::from_command_number(led.command_number()), Some(led));
        assert_eq!(Led::from_gpio_pin(led.gpio_pin()), Some(led));
    }
    assert_eq!(Led::Led3.gpio_pin(), 13);
    assert_eq!(Led::Led4.gpio_pin(), 12);
    assert_eq!(Led::Led5.gpio_pin(), 14);
    assert_eq!(Led::Led6.gpio_pin(), 15);
    assert_eq!(Led::Led3.to_string(), "LED3");
}
