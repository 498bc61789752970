use crate::application::interfaces::account::AccountService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::responses::{AccountsResponse, PositionsResponse};
use crate::session::interface::IgSession;
use crate::transport::http_client::IgHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the account service
pub struct AccountServiceImpl<T: IgHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: IgHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Sets a new configuration
    pub fn set_config(&mut self, config: Arc<Config>) {
        self.config = config;
    }
}

#[async_trait]
impl<T: IgHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn get_accounts(&self, session: &IgSession) -> Result<AccountsResponse, AppError> {
        debug!("Getting account information");

        let result = self
            .client
            .request::<(), AccountsResponse>(Method::GET, "accounts", session, None, "1")
            .await?;

        debug!(
            "Account information obtained: {} accounts",
            result.accounts.len()
        );
        Ok(result)
    }

    async fn get_positions(&self, session: &IgSession) -> Result<PositionsResponse, AppError> {
        debug!("Getting open positions");

        let result = self
            .client
            .request::<(), PositionsResponse>(Method::GET, "positions", session, None, "2")
            .await?;

        debug!("Positions obtained: {} positions", result.positions.len());
        Ok(result)
    }
}
