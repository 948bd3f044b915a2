//! Tests for Engine
//!
//! These tests verify:
//! - Valid actuation commands reach the board exactly once
//! - Rejected commands never touch the board
//! - Queries re-read the board on every call
//! - Repeated toggles alternate, repeated on/off are harmless

use std::net::SocketAddr;

use ledwire::hardware::{Led, LedBoard, SimulatedBoard};
use ledwire::network::Channel;
use ledwire::protocol::{GpioReading, Response};
use ledwire::{CommandError, Engine};

// =============================================================================
// Helper Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    On(Led),
    Off(Led),
    Toggle(Led),
}

/// Board that records every write and holds plain levels
#[derive(Default)]
struct RecordingBoard {
    calls: Vec<Call>,
    levels: [bool; 4],
}

impl LedBoard for RecordingBoard {
    fn turn_on(&mut self, led: Led) {
        self.calls.push(Call::On(led));
        self.levels[led.index()] = true;
    }

    fn turn_off(&mut self, led: Led) {
        self.calls.push(Call::Off(led));
        self.levels[led.index()] = false;
    }

    fn toggle(&mut self, led: Led) {
        self.calls.push(Call::Toggle(led));
        self.levels[led.index()] = !self.levels[led.index()];
    }

    fn state(&self, led: Led) -> bool {
        self.levels[led.index()]
    }
}

fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

fn recording_engine() -> Engine<RecordingBoard> {
    Engine::new(RecordingBoard::default())
}

// =============================================================================
// Actuation Tests
// =============================================================================

#[test]
fn test_valid_command_invokes_board_once() {
    let mut engine = recording_engine();

    let response = engine.handle(Channel::Actuation, b"led3 on", peer());

    assert_eq!(response, Response::Ok);
    assert_eq!(engine.board().calls, vec![Call::On(Led::Led3)]);
}

#[test]
fn test_each_action_maps_to_its_call() {
    let mut engine = recording_engine();

    engine.execute_led(b"led4 on").unwrap();
    engine.execute_led(b"led5 off").unwrap();
    engine.execute_led(b"led6 toggle").unwrap();

    assert_eq!(
        engine.board().calls,
        vec![Call::On(Led::Led4), Call::Off(Led::Led5), Call::Toggle(Led::Led6)]
    );
}

#[test]
fn test_out_of_range_led_has_no_effect() {
    let mut engine = recording_engine();

    for text in ["led0 on", "led2 on", "led7 on", "led-1 toggle", "led100 off"] {
        let response = engine.handle(Channel::Actuation, text.as_bytes(), peer());
        assert_eq!(response, Response::Error, "input {:?}", text);
    }

    assert!(engine.board().calls.is_empty());
}

#[test]
fn test_rejected_command_reports_kind() {
    let mut engine = recording_engine();

    assert_eq!(engine.execute_led(b""), Err(CommandError::Argument));
    assert_eq!(engine.execute_led(b"hello"), Err(CommandError::WrongFormat));
    assert_eq!(engine.execute_led(b"led9 on"), Err(CommandError::LedNumber));
    assert_eq!(engine.execute_led(b"led3 flash"), Err(CommandError::LedCommand));
    assert!(engine.board().calls.is_empty());
}

#[test]
fn test_toggle_alternates() {
    let mut engine = recording_engine();

    let mut seen = Vec::new();
    for _ in 0..4 {
        engine.execute_led(b"led5 toggle").unwrap();
        seen.push(engine.board().state(Led::Led5));
    }

    assert_eq!(seen, vec![true, false, true, false]);
}

#[test]
fn test_repeated_on_is_accepted() {
    let mut engine = recording_engine();

    assert_eq!(engine.handle(Channel::Actuation, b"led6 on", peer()), Response::Ok);
    assert_eq!(engine.handle(Channel::Actuation, b"led6 on", peer()), Response::Ok);

    assert!(engine.board().state(Led::Led6));
    assert_eq!(engine.board().calls.len(), 2);
}

#[test]
fn test_actuation_text_on_query_channel_is_rejected() {
    let mut engine = recording_engine();

    let response = engine.handle(Channel::Query, b"led3 on", peer());

    assert_eq!(response, Response::Error);
    assert!(engine.board().calls.is_empty());
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_query_reads_current_state() {
    let mut engine = recording_engine();

    let reading = engine.execute_query(b"read gpiod 13").unwrap();
    assert_eq!(reading, GpioReading { pin: 13, state: false });

    engine.board_mut().turn_on(Led::Led3);

    let reading = engine.execute_query(b"read gpiod 13").unwrap();
    assert_eq!(reading, GpioReading { pin: 13, state: true });
}

#[test]
fn test_query_pin_mapping() {
    let mut engine = recording_engine();
    engine.board_mut().turn_on(Led::Led4);

    let response = engine.handle(Channel::Query, b"read gpiod 12", peer());
    assert_eq!(response.to_bytes(), b"GPIO.12=1\n");

    for pin in [13, 14, 15] {
        let text = format!("read gpiod {}", pin);
        let response = engine.handle(Channel::Query, text.as_bytes(), peer());
        assert_eq!(response.to_string(), format!("GPIO.{}=0\n", pin));
    }
}

#[test]
fn test_query_does_not_write() {
    let mut engine = recording_engine();

    engine.handle(Channel::Query, b"read gpiod 14", peer());
    engine.handle(Channel::Query, b"read gpiox 14", peer());

    assert!(engine.board().calls.is_empty());
}

#[test]
fn test_query_unknown_bank() {
    let mut engine = recording_engine();

    for pin in [12, 13, 14, 15, 99] {
        let text = format!("read gpiox {}", pin);
        assert_eq!(
            engine.handle(Channel::Query, text.as_bytes(), peer()),
            Response::Error
        );
    }
}

// =============================================================================
// Simulated Board Tests
// =============================================================================

#[test]
fn test_simulated_board_clones_share_state() {
    let observer = SimulatedBoard::new();
    let mut engine = Engine::new(observer.clone());

    engine.execute_led(b"led3 on").unwrap();
    engine.execute_led(b"led6 toggle").unwrap();

    assert_eq!(observer.snapshot(), [true, false, false, true]);
    assert!(observer.state(Led::Led3));

    engine.execute_led(b"led3 off").unwrap();
    assert!(!observer.state(Led::Led3));
}
