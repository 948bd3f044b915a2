//! ledwire Server Binary
//!
//! Serves both UDP channels against a simulated LED board.

use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;
use ledwire::hardware::SimulatedBoard;
use ledwire::network::Server;
use ledwire::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// ledwire Server
#[derive(Parser, Debug)]
#[command(name = "ledwire-server")]
#[command(about = "UDP command endpoint for GPIO-backed LEDs")]
#[command(version)]
struct Args {
    /// Local address to bind both channels to
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Actuation channel port (led<N> on|off|toggle)
    #[arg(short, long, default_value = "5678")]
    actuation_port: u16,

    /// Query channel port (read gpiod <N>)
    #[arg(short, long, default_value = "1234")]
    query_port: u16,

    /// Readiness wait timeout in seconds
    #[arg(short = 't', long, default_value = "5")]
    poll_timeout_secs: u64,

    /// Delay before binding, in milliseconds
    #[arg(short = 'd', long, default_value = "5000")]
    startup_delay_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ledwire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("ledwire Server v{}", ledwire::VERSION);
    tracing::info!("Bind address: {}", args.bind);

    // Build config from args
    let config = Config::builder()
        .bind_addr(args.bind)
        .actuation_port(args.actuation_port)
        .query_port(args.query_port)
        .poll_timeout(Duration::from_secs(args.poll_timeout_secs))
        .startup_delay(Duration::from_millis(args.startup_delay_ms))
        .build();

    let mut server = match Server::bind(config, SimulatedBoard::new()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
