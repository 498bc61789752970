use crate::error::AuthError;
use async_trait::async_trait;

/// Authenticated session tokens for the IG Markets API.
///
/// Carries the CST and X-SECURITY-TOKEN headers returned by the login call;
/// both must accompany every subsequent request.
#[derive(Debug, Clone, Default)]
pub struct IgSession {
    /// Client session token returned by the login call
    pub cst: String,
    /// Security token (X-SECURITY-TOKEN header value)
    pub token: String,
    /// Account the session is bound to
    pub account_id: String,
    /// Client id reported by the login response
    pub client_id: Option<String>,
}

impl IgSession {
    /// Creates a session from its tokens
    pub fn new(cst: String, token: String, account_id: String) -> Self {
        Self {
            cst,
            token,
            account_id,
            client_id: None,
        }
    }
}

/// Trait for authenticating with the IG Markets API
#[async_trait]
pub trait IgAuthenticator: Send + Sync {
    /// Logs in and returns a fresh session
    async fn login(&self) -> Result<IgSession, AuthError>;
}
