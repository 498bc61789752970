use crate::error::AppError;
use crate::model::responses::MarketSearchResponse;
use crate::session::interface::IgSession;
use async_trait::async_trait;

/// Interface for the market service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Searches tradable instruments by term, e.g. to discover an epic
    async fn search_markets(
        &self,
        session: &IgSession,
        search_term: &str,
    ) -> Result<MarketSearchResponse, AppError>;
}
