/// Module containing the account service for account and position queries
pub mod account_service;
/// Module containing the webhook-facing bridge orchestrator
pub mod bridge;
/// Module containing the market service for instrument search
pub mod market_service;
/// Module containing the order service for submission and confirmation
pub mod order_service;

pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::market::MarketService;
pub use crate::application::interfaces::order::OrderService;
pub use account_service::AccountServiceImpl;
pub use bridge::AlertBridge;
pub use market_service::MarketServiceImpl;
pub use order_service::OrderServiceImpl;
