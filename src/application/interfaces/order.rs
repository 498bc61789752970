use crate::error::AppError;
use crate::model::requests::{ClosePositionRequest, OrderRequest};
use crate::model::responses::{DealConfirmation, SubmissionResult};
use crate::session::interface::IgSession;
use async_trait::async_trait;

/// Interface for creating and reconciling trading orders
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Submits an order, adapting across the broker's payload conventions
    async fn create_order(
        &self,
        session: &IgSession,
        order: &OrderRequest,
    ) -> Result<SubmissionResult, AppError>;

    /// Fetches the accept/reject confirmation for a submitted deal
    async fn get_order_confirmation(
        &self,
        session: &IgSession,
        deal_reference: &str,
    ) -> Result<DealConfirmation, AppError>;

    /// Closes an existing position directly by deal id
    async fn close_position(
        &self,
        session: &IgSession,
        close_request: &ClosePositionRequest,
    ) -> Result<SubmissionResult, AppError>;
}
