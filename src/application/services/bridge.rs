use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::application::normalizer::normalize;
use crate::application::services::account_service::AccountServiceImpl;
use crate::application::services::market_service::MarketServiceImpl;
use crate::application::services::order_service::OrderServiceImpl;
use crate::config::Config;
use crate::error::AppError;
use crate::model::responses::{
    ConfirmReport, ConnectivityReport, MarketSearchReport, OrderOutcome,
};
use crate::presentation::instruction::Instruction;
use crate::session::auth::IgAuth;
use crate::session::interface::{IgAuthenticator, IgSession};
use crate::session::manager::SessionManager;
use crate::transport::http_client::{IgHttpClient, IgHttpClientImpl};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Webhook-facing façade carrying one instruction through the full order
/// lifecycle: normalize, submit through the live session, reconcile the
/// confirmation.
///
/// Every entry point returns a structured report instead of raising, so the
/// HTTP layer can serialize outcomes directly. The session manager is owned
/// here and injected into each call, which keeps broker state out of
/// process globals and lets tests substitute fakes at the authenticator and
/// transport seams.
pub struct AlertBridge<A: IgAuthenticator, T: IgHttpClient + 'static> {
    config: Arc<Config>,
    sessions: SessionManager<A, AccountServiceImpl<T>>,
    accounts: AccountServiceImpl<T>,
    markets: MarketServiceImpl<T>,
    orders: OrderServiceImpl<T>,
}

impl<A: IgAuthenticator, T: IgHttpClient + 'static> std::fmt::Debug for AlertBridge<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertBridge").finish_non_exhaustive()
    }
}

impl AlertBridge<IgAuth, IgHttpClientImpl> {
    /// Builds the production bridge from configuration
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let auth = IgAuth::new(config.clone());
        let client = Arc::new(IgHttpClientImpl::new(config.clone()));
        Self::with_parts(config, auth, client)
    }
}

impl<A: IgAuthenticator, T: IgHttpClient + 'static> AlertBridge<A, T> {
    /// Assembles a bridge from explicit parts; fails fast when credentials
    /// are absent
    pub fn with_parts(config: Arc<Config>, auth: A, client: Arc<T>) -> Result<Self, AppError> {
        let sessions = SessionManager::new(
            &config,
            auth,
            AccountServiceImpl::new(config.clone(), client.clone()),
        )?;
        Ok(Self {
            sessions,
            accounts: AccountServiceImpl::new(config.clone(), client.clone()),
            markets: MarketServiceImpl::new(config.clone(), client.clone()),
            orders: OrderServiceImpl::new(config.clone(), client),
            config,
        })
    }

    /// Carries an instruction through normalize, submit and confirm,
    /// returning the unified outcome
    pub async fn place_order(&self, instruction: &Instruction) -> OrderOutcome {
        let order = match normalize(instruction, &self.config) {
            Ok(order) => order,
            Err(e) => {
                warn!("Instruction rejected: {e}");
                return OrderOutcome::error(&e);
            }
        };

        let session = match self.sessions.ensure().await {
            Ok(session) => session,
            Err(e) => {
                error!("No broker session available: {e}");
                return OrderOutcome::error(&e);
            }
        };

        let submission = match self.orders.create_order(&session, &order).await {
            Ok(submission) => submission,
            Err(e) => {
                error!("Order submission failed: {e}");
                return OrderOutcome::error(&e);
            }
        };

        let confirm = self
            .resolve_confirmation(&session, submission.deal_reference.as_deref())
            .await;
        OrderOutcome::success(submission, confirm)
    }

    /// Best-effort confirmation fetch. The order is already transmitted by
    /// this point, so failures degrade to an annotation instead of an
    /// error; a missing reference is itself reported to the caller.
    async fn resolve_confirmation(
        &self,
        session: &IgSession,
        deal_reference: Option<&str>,
    ) -> ConfirmReport {
        let Some(deal_reference) = deal_reference else {
            warn!("Submission returned no dealReference, confirmation unknown");
            return ConfirmReport::no_deal_ref();
        };

        match self
            .orders
            .get_order_confirmation(session, deal_reference)
            .await
        {
            Ok(confirmation) => {
                info!(
                    "Deal {}: {} ({})",
                    deal_reference,
                    confirmation.deal_status,
                    confirmation.reason.as_deref().unwrap_or("-")
                );
                ConfirmReport::Confirmed(confirmation)
            }
            Err(e) => {
                warn!("Confirmation fetch failed for {}: {}", deal_reference, e);
                ConfirmReport::Unavailable {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Verifies credentials and session health via the accounts endpoint
    pub async fn test_connection(&self) -> ConnectivityReport {
        let session = match self.sessions.ensure().await {
            Ok(session) => session,
            Err(e) => return ConnectivityReport::error(e.to_string()),
        };
        match self.accounts.get_accounts(&session).await {
            Ok(accounts) => ConnectivityReport::ok(accounts),
            Err(e) => ConnectivityReport::error(e.to_string()),
        }
    }

    /// Searches instruments by term, e.g. to discover an epic
    pub async fn search_markets(&self, query: &str) -> MarketSearchReport {
        let session = match self.sessions.ensure().await {
            Ok(session) => session,
            Err(e) => return MarketSearchReport::error(e.to_string()),
        };
        match self.markets.search_markets(&session, query).await {
            Ok(results) => MarketSearchReport::ok(results),
            Err(e) => MarketSearchReport::error(e.to_string()),
        }
    }
}
