use crate::application::rate_limiter::login_limiter;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AuthError;
use crate::session::interface::{IgAuthenticator, IgSession};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Response body of `POST session` (API v2); the interesting tokens arrive
/// as response headers, not in the body.
#[derive(serde::Deserialize)]
struct SessionResp {
    /// Account ID associated with the session
    #[serde(alias = "accountId")]
    #[serde(alias = "currentAccountId")]
    account_id: String,
    /// Client ID provided by the API
    #[serde(alias = "clientId")]
    client_id: Option<String>,
}

/// Authentication handler for the IG Markets API
pub struct IgAuth {
    cfg: Arc<Config>,
    http: Client,
}

impl IgAuth {
    /// Creates a new authentication handler
    pub fn new(cfg: Arc<Config>) -> Self {
        Self {
            http: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(cfg.rest_api.timeout))
                .build()
                .expect("reqwest client"),
            cfg,
        }
    }

    /// Joins a path onto the configured REST base URL
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.cfg.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn header_string(resp: &Response, name: &str) -> Result<String, AuthError> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or(AuthError::Unexpected(StatusCode::OK))
}

#[async_trait]
impl IgAuthenticator for IgAuth {
    async fn login(&self) -> Result<IgSession, AuthError> {
        if !self.cfg.credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        // Unauthenticated calls share a process-wide limiter
        login_limiter().wait().await;

        let url = self.rest_url("session");
        let api_key = self.cfg.credentials.api_key.trim();
        let username = self.cfg.credentials.username.trim();
        let password = self.cfg.credentials.password.trim();

        debug!("Login request to URL: {}", url);
        debug!("Using API key (length): {}", api_key.len());

        let body = serde_json::json!({
            "identifier": username,
            "password": password,
            "encryptedPassword": false
        });

        let resp = self
            .http
            .post(&url)
            .header("X-IG-API-KEY", api_key)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8")
            .header("Version", "2")
            .json(&body)
            .send()
            .await?;

        debug!("Login response status: {}", resp.status());
        trace!("Response headers: {:#?}", resp.headers());

        match resp.status() {
            StatusCode::OK => {
                let cst = header_string(&resp, "CST")?;
                let token = header_string(&resp, "X-SECURITY-TOKEN")?;
                let json: SessionResp = resp.json().await?;
                debug!("Session created for account {}", json.account_id);
                Ok(IgSession {
                    cst,
                    token,
                    account_id: json.account_id,
                    client_id: json.client_id,
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body_text = resp.text().await.unwrap_or_default();
                error!("Login rejected: {}", body_text);
                Err(AuthError::Unauthorized)
            }
            status => {
                let body_text = resp.text().await.unwrap_or_default();
                error!("Login failed with status {}: {}", status, body_text);
                Err(AuthError::Unexpected(status))
            }
        }
    }
}
