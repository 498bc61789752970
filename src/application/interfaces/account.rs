use crate::error::AppError;
use crate::model::responses::{AccountsResponse, PositionsResponse};
use crate::session::interface::IgSession;
use async_trait::async_trait;

/// Interface for account-level queries
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets information about all user accounts. Doubles as the low-cost
    /// session liveness probe.
    async fn get_accounts(&self, session: &IgSession) -> Result<AccountsResponse, AppError>;

    /// Gets open positions
    async fn get_positions(&self, session: &IgSession) -> Result<PositionsResponse, AppError>;
}
