use crate::application::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::IgErrorResponse;
use crate::session::interface::IgSession;
use crate::transport::retry::RetryConfig;
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// HTTP transport for authenticated IG Markets API calls.
///
/// Responses are deserialized into one canonical type at this boundary;
/// nothing downstream branches on response shape. Services are generic over
/// this trait so tests can substitute a fake transport.
#[async_trait]
pub trait IgHttpClient: Send + Sync {
    /// Makes a request with the given `Version` header, returning the HTTP
    /// status code alongside the decoded body
    async fn request_with_status<B, T>(
        &self,
        method: Method,
        path: &str,
        session: &IgSession,
        body: Option<&B>,
        version: &str,
    ) -> Result<(u16, T), AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send;

    /// Makes a request with the given `Version` header
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        session: &IgSession,
        body: Option<&B>,
        version: &str,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let (_, value) = self
            .request_with_status(method, path, session, body, version)
            .await?;
        Ok(value)
    }

    /// Makes a POST with the `_method: DELETE` header the IG API requires
    /// for closing positions (upstream does not support DELETE with a body)
    async fn post_with_delete_method<B, T>(
        &self,
        path: &str,
        session: &IgSession,
        body: &B,
        version: &str,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send;
}

/// reqwest-backed transport with rate limiting and allowance retries
pub struct IgHttpClientImpl {
    config: Arc<Config>,
    http: Client,
    rate_limiter: RateLimiter,
}

impl IgHttpClientImpl {
    /// Creates a new transport from the configuration
    pub fn new(config: Arc<Config>) -> Self {
        // a request-level deadline so a hung broker call cannot block a
        // webhook caller indefinitely
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("reqwest client");
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        Self {
            config,
            http,
            rate_limiter,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        session: &IgSession,
        body: Option<&B>,
        version: &str,
        delete_method: bool,
    ) -> Result<Response, AppError> {
        let retry = RetryConfig::default();
        let max_retries = retry.max_retries();
        let delay_secs = retry.delay_secs();
        let mut retry_count = 0;
        let url = self.url(path);

        loop {
            self.rate_limiter.wait().await;
            debug!("{} {}", method, url);

            let mut request = self
                .http
                .request(method.clone(), &url)
                .header("X-IG-API-KEY", self.config.credentials.api_key.as_str())
                .header("Content-Type", "application/json; charset=UTF-8")
                .header("Accept", "application/json; charset=UTF-8")
                .header("Version", version)
                .header("CST", session.cst.as_str())
                .header("X-SECURITY-TOKEN", session.token.as_str());
            if delete_method {
                request = request.header("_method", "DELETE");
            }
            if let Some(b) = body {
                request = request.json(b);
            }

            let response = request.send().await?;
            let status = response.status();
            debug!("Response status: {}", status);

            if status.is_success() {
                return Ok(response);
            }

            match status {
                StatusCode::BAD_REQUEST => {
                    let text = response.text().await.unwrap_or_default();
                    let code = serde_json::from_str::<IgErrorResponse>(&text)
                        .map(|e| e.error_code)
                        .unwrap_or(text);
                    warn!("Bad request: {}", code);
                    return Err(AppError::BadRequest(code));
                }
                StatusCode::UNAUTHORIZED => {
                    let text = response.text().await.unwrap_or_default();
                    error!("Unauthorized: {}", text);
                    return Err(AppError::Unauthorized);
                }
                StatusCode::NOT_FOUND => {
                    return Err(AppError::NotFound);
                }
                StatusCode::FORBIDDEN => {
                    let text = response.text().await.unwrap_or_default();
                    if text.contains("exceeded-api-key-allowance")
                        || text.contains("exceeded-account-allowance")
                        || text.contains("exceeded-account-trading-allowance")
                    {
                        retry_count += 1;
                        if retry_count > max_retries {
                            error!(
                                "Rate limit exceeded after {} attempts. Max retries ({}) reached.",
                                retry_count - 1,
                                max_retries
                            );
                            return Err(AppError::RateLimitExceeded);
                        }
                        warn!(
                            "Rate limit exceeded (attempt {}): {}. Waiting {} seconds before retry",
                            retry_count, text, delay_secs
                        );
                        tokio::time::sleep(tokio::time::Duration::from_secs(delay_secs)).await;
                        continue;
                    }
                    error!("Forbidden: {}", text);
                    return Err(AppError::Unexpected(status));
                }
                _ => {
                    let text = response.text().await.unwrap_or_default();
                    error!("Request failed with status {}: {}", status, text);
                    return Err(AppError::Unexpected(status));
                }
            }
        }
    }
}

#[async_trait]
impl IgHttpClient for IgHttpClientImpl {
    async fn request_with_status<B, T>(
        &self,
        method: Method,
        path: &str,
        session: &IgSession,
        body: Option<&B>,
        version: &str,
    ) -> Result<(u16, T), AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self
            .send(method, path, session, body, version, false)
            .await?;
        let status = response.status().as_u16();
        let value = response.json::<T>().await?;
        Ok((status, value))
    }

    async fn post_with_delete_method<B, T>(
        &self,
        path: &str,
        session: &IgSession,
        body: &B,
        version: &str,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self
            .send(Method::POST, path, session, Some(body), version, true)
            .await?;
        Ok(response.json().await?)
    }
}
