//! # ig-alert-bridge
//!
//! Bridges alert signals from a charting/signal source to the IG Markets
//! trading API. A webhook layer hands over a loosely-typed instruction
//! (action, direction, sizing, order type, protective levels); the bridge
//! normalizes it into a well-formed OTC order, submits it through a
//! long-lived authenticated session with TTL-based renewal, and reconciles
//! the broker's asynchronous accept/reject confirmation into a single
//! structured result.
//!
//! ## Layers
//!
//! - [`presentation`]: the inbound [`Instruction`](presentation::instruction::Instruction)
//!   shape and the order vocabulary enums.
//! - [`application`]: normalization, the adapter table for the broker's
//!   drifting order-entry conventions, and the services, topped by
//!   [`AlertBridge`](application::services::bridge::AlertBridge).
//! - [`session`]: login and the TTL-managed
//!   [`SessionManager`](session::manager::SessionManager).
//! - [`transport`]: the authenticated HTTP client.
//!
//! ## Example
//!
//! ```no_run
//! use ig_alert_bridge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let bridge = AlertBridge::from_config(Config::new())?;
//!
//!     let instruction: Instruction = serde_json::from_str(
//!         r#"{"action":"OPEN","epic":"CS.D.GBPCHF.CFD.IP","direction":"BUY"}"#,
//!     )?;
//!     let outcome = bridge.place_order(&instruction).await;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```

/// Application layer: normalization, adapters and services
pub mod application;
/// Configuration loaded from the environment
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Broker-shaped request and response models
pub mod model;
/// Inbound alert instruction and order vocabulary
pub mod presentation;
/// Commonly used types and traits
pub mod prelude;
/// Session authentication and lifecycle
pub mod session;
/// Authenticated HTTP transport
pub mod transport;
/// Environment, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
