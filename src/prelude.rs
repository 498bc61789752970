//! # Bridge Prelude
//!
//! Imports the most commonly used types and traits in one line:
//!
//! ```rust
//! use ig_alert_bridge::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the bridge
pub use crate::config::{AccountType, Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler for the IG Markets API
pub use crate::session::auth::IgAuth;

/// Authentication trait and session tokens
pub use crate::session::interface::{IgAuthenticator, IgSession};

/// TTL-based session lifecycle management
pub use crate::session::manager::SessionManager;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait and reqwest-backed implementation
pub use crate::transport::http_client::{IgHttpClient, IgHttpClientImpl};

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{AccountService, MarketService, OrderService};

/// Service implementations
pub use crate::application::services::{
    AccountServiceImpl, AlertBridge, MarketServiceImpl, OrderServiceImpl,
};

/// Instruction-to-order normalization
pub use crate::application::normalizer::normalize;

/// Order payload adapters
pub use crate::application::adapters::{OrderCallAdapter, OtcV1, OtcV2, default_adapters};

// ============================================================================
// MODELS
// ============================================================================

/// Inbound alert instruction and tolerant scalar types
pub use crate::presentation::instruction::{Instruction, Scalar, Toggle};

/// Order vocabulary
pub use crate::presentation::order::{Action, DealStatus, Direction, OrderType, TimeInForce};

/// Broker-shaped request models
pub use crate::model::requests::{ClosePositionRequest, OrderRequest};

/// Response models and caller-facing reports
pub use crate::model::responses::{
    Account, AccountsResponse, ConfirmReport, ConnectivityReport, DealConfirmation,
    MarketData, MarketSearchReport, MarketSearchResponse, OpenPosition, OrderOutcome,
    OutcomeStatus, PositionsResponse, SubmissionResult,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Environment, id and logging helpers
pub use crate::utils::{deal_reference, get_env_or_default, setup_logger};
