use crate::application::interfaces::market::MarketService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::responses::MarketSearchResponse;
use crate::session::interface::IgSession;
use crate::transport::http_client::IgHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the market service
pub struct MarketServiceImpl<T: IgHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: IgHttpClient> MarketServiceImpl<T> {
    /// Creates a new instance of the market service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

#[async_trait]
impl<T: IgHttpClient + 'static> MarketService for MarketServiceImpl<T> {
    async fn search_markets(
        &self,
        session: &IgSession,
        search_term: &str,
    ) -> Result<MarketSearchResponse, AppError> {
        let path = format!("markets?searchTerm={search_term}");
        info!("Searching markets for {:?}", search_term);

        let result = self
            .client
            .request::<(), MarketSearchResponse>(Method::GET, &path, session, None, "1")
            .await?;

        debug!("Market search returned {} results", result.len());
        Ok(result)
    }
}
