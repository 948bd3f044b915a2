//! # ledwire
//!
//! A network command endpoint for a small bank of GPIO-backed LEDs:
//! - Two UDP channels (actuation and query), one datagram per command
//! - A strict text grammar with typed validation errors
//! - A single-threaded readiness loop, one command processed at a time
//! - A thin hardware boundary behind the `LedBoard` trait
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Actuation socket (5678)  │   │   Query socket (1234)    │
//! └────────────┬─────────────┘   └─────────────┬────────────┘
//!              │                               │
//! ┌────────────▼───────────────────────────────▼────────────┐
//! │                    Dispatch Loop                        │
//! │           (wait with timeout, one datagram each)        │
//! └────────────┬───────────────────────────────┬────────────┘
//!              │                               │
//!              ▼                               ▼
//!      ┌──────────────┐                ┌──────────────┐
//!      │  led parser  │                │ gpio parser  │
//!      └──────┬───────┘                └──────┬───────┘
//!             │                               │
//!             └───────────────┬───────────────┘
//!                             ▼
//!                     ┌──────────────┐
//!                     │   LedBoard   │
//!                     │  (hardware)  │
//!                     └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod hardware;
pub mod network;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CommandError, LedwireError, Result};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ledwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
