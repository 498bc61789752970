use crate::application::adapters::{OrderCallAdapter, default_adapters, is_shape_mismatch};
use crate::application::interfaces::order::OrderService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::{ClosePositionRequest, OrderRequest};
use crate::model::responses::{DealConfirmation, SubmissionResult};
use crate::session::interface::IgSession;
use crate::transport::http_client::IgHttpClient;
use crate::utils::id::deal_reference;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Implementation of the order service.
///
/// Submission is signature-tolerant: the adapter table is walked in order
/// and a payload shape the live endpoint rejects advances to the next
/// convention. Business-level rejections are returned as-is and never
/// retried, since resubmitting a MARKET order is unsafe.
pub struct OrderServiceImpl<T: IgHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
    adapters: Vec<Box<dyn OrderCallAdapter>>,
}

impl<T: IgHttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service with the default
    /// adapter table
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self {
            config,
            client,
            adapters: default_adapters(),
        }
    }

    /// Replaces the adapter table
    pub fn with_adapters(mut self, adapters: Vec<Box<dyn OrderCallAdapter>>) -> Self {
        self.adapters = adapters;
        self
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

#[async_trait]
impl<T: IgHttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn create_order(
        &self,
        session: &IgSession,
        order: &OrderRequest,
    ) -> Result<SubmissionResult, AppError> {
        // stamp a client-side reference so the deal stays correlatable even
        // if the response body is lost
        let mut order = order.clone();
        if order.deal_reference.is_none() {
            order.deal_reference = Some(deal_reference());
        }

        let mut last_code: Option<String> = None;
        let mut last_payload = Value::Null;

        for adapter in &self.adapters {
            let payload = adapter.payload(&order);
            info!(
                "Submitting {} order for {} via {} (Version {})",
                order.order_type, order.epic, adapter.name(), adapter.version()
            );

            match self
                .client
                .request_with_status::<Value, Value>(
                    Method::POST,
                    "positions/otc",
                    session,
                    Some(&payload),
                    adapter.version(),
                )
                .await
            {
                Ok((status, body)) => {
                    debug!("Submission accepted with status {}", status);
                    return Ok(SubmissionResult::from_body(body).with_status(status));
                }
                Err(AppError::BadRequest(code)) if is_shape_mismatch(&code) => {
                    warn!(
                        "{} payload rejected as malformed ({}), trying next convention",
                        adapter.name(),
                        code
                    );
                    last_code = Some(code);
                    last_payload = payload;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::SubmissionFailed {
            reason: last_code
                .unwrap_or_else(|| String::from("no calling convention accepted the order")),
            payload: last_payload,
        })
    }

    async fn get_order_confirmation(
        &self,
        session: &IgSession,
        deal_reference: &str,
    ) -> Result<DealConfirmation, AppError> {
        let path = format!("confirms/{deal_reference}");
        debug!("Fetching deal confirmation for {}", deal_reference);

        self.client
            .request::<(), DealConfirmation>(Method::GET, &path, session, None, "1")
            .await
    }

    async fn close_position(
        &self,
        session: &IgSession,
        close_request: &ClosePositionRequest,
    ) -> Result<SubmissionResult, AppError> {
        info!("Closing position {:?}", close_request.deal_id);

        let body = self
            .client
            .post_with_delete_method::<ClosePositionRequest, Value>(
                "positions/otc",
                session,
                close_request,
                "1",
            )
            .await?;

        Ok(SubmissionResult::from_body(body))
    }
}
