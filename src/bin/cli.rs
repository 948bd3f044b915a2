//! ledwire CLI Client
//!
//! Sends one command to a ledwire server and prints the reply.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use ledwire::config::{DEFAULT_ACTUATION_PORT, DEFAULT_QUERY_PORT};
use ledwire::hardware::Led;
use ledwire::protocol::{parse_response, GpioQuery, LedAction, LedCommand, Response};
use ledwire::{LedwireError, Result};

/// ledwire CLI
#[derive(Parser, Debug)]
#[command(name = "ledwire-cli")]
#[command(about = "CLI for a ledwire LED endpoint")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1")]
    server: IpAddr,

    /// Actuation channel port
    #[arg(long, default_value_t = DEFAULT_ACTUATION_PORT)]
    actuation_port: u16,

    /// Query channel port
    #[arg(long, default_value_t = DEFAULT_QUERY_PORT)]
    query_port: u16,

    /// Reply timeout in milliseconds
    #[arg(short, long, default_value = "2000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Switch an LED
    Led {
        /// LED number (3-6)
        number: i32,

        /// Action to apply
        #[arg(value_enum)]
        action: ActionArg,
    },

    /// Read the state of a port D pin
    Read {
        /// Pin number (12-15)
        pin: u8,
    },

    /// Send arbitrary text on a channel
    Raw {
        /// Channel to send on
        #[arg(short, long, value_enum, default_value = "actuation")]
        channel: ChannelArg,

        /// Command text
        text: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ActionArg {
    On,
    Off,
    Toggle,
}

impl From<ActionArg> for LedAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::On => LedAction::On,
            ActionArg::Off => LedAction::Off,
            ActionArg::Toggle => LedAction::Toggle,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChannelArg {
    Actuation,
    Query,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(Response::Error) => {
            println!("error");
            std::process::exit(2);
        }
        Ok(Response::Ok) => println!("OK"),
        Ok(Response::Gpio(reading)) => {
            println!("GPIO.{}={}", reading.pin, u8::from(reading.state))
        }
        Err(e) => {
            eprintln!("ledwire-cli: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Response> {
    let (port, text) = match &args.command {
        Commands::Led { number, action } => {
            let led = Led::from_command_number(*number).ok_or_else(|| {
                LedwireError::Config(format!("no LED numbered {} (expected 3-6)", number))
            })?;
            let command = LedCommand::new(led, (*action).into());
            (args.actuation_port, command.to_string())
        }
        Commands::Read { pin } => {
            let query = GpioQuery::new(*pin).ok_or_else(|| {
                LedwireError::Config(format!("pin {} is not wired to an LED (expected 12-15)", pin))
            })?;
            (args.query_port, query.to_string())
        }
        Commands::Raw { channel, text } => {
            let port = match channel {
                ChannelArg::Actuation => args.actuation_port,
                ChannelArg::Query => args.query_port,
            };
            (port, text.clone())
        }
    };

    send_command(
        SocketAddr::new(args.server, port),
        text.as_bytes(),
        Duration::from_millis(args.timeout_ms),
    )
}

fn send_command(server: SocketAddr, payload: &[u8], timeout: Duration) -> Result<Response> {
    let local = match server {
        SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    };

    let socket = UdpSocket::bind((local, 0))?;
    socket.set_read_timeout(Some(timeout))?;
    socket.send_to(payload, server)?;

    let mut reply = [0u8; 64];
    let (n, _) = socket.recv_from(&mut reply)?;
    parse_response(&reply[..n])
}
