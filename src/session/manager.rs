use crate::application::interfaces::account::AccountService;
use crate::config::Config;
use crate::error::AppError;
use crate::session::interface::{IgAuthenticator, IgSession};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

struct SessionState {
    session: IgSession,
    last_validated: DateTime<Utc>,
}

/// Owns the process-wide broker session.
///
/// The session is created lazily on first use and trusted for the
/// configured TTL. Once older, it is revalidated with a list-accounts
/// probe; a failed probe discards it and re-authenticates from scratch.
/// Renewal is serialized behind a write lock so concurrent requests do not
/// race through redundant logins, while requests observing a fresh session
/// share it through the read lock.
pub struct SessionManager<A: IgAuthenticator, S: AccountService> {
    auth: A,
    accounts: S,
    ttl: Duration,
    state: RwLock<Option<SessionState>>,
}

impl<A: IgAuthenticator, S: AccountService> std::fmt::Debug for SessionManager<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<A: IgAuthenticator, S: AccountService> SessionManager<A, S> {
    /// Creates a manager, failing fast when credentials are absent
    pub fn new(config: &Config, auth: A, accounts: S) -> Result<Self, AppError> {
        if !config.credentials.is_complete() {
            return Err(AppError::MissingCredentials);
        }
        Ok(Self {
            auth,
            accounts,
            ttl: config.session_ttl(),
            state: RwLock::new(None),
        })
    }

    /// Overrides the TTL below which a session is reused untouched
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns a live session, authenticating or revalidating as needed
    pub async fn ensure(&self) -> Result<IgSession, AppError> {
        {
            let guard = self.state.read().await;
            if let Some(state) = guard.as_ref() {
                if Utc::now() - state.last_validated <= self.ttl {
                    return Ok(state.session.clone());
                }
            }
        }

        let mut guard = self.state.write().await;

        // another request may have renewed while we waited for the lock
        if let Some(state) = guard.as_mut() {
            if Utc::now() - state.last_validated <= self.ttl {
                return Ok(state.session.clone());
            }
            debug!("Session older than TTL, probing with list-accounts");
            match self.accounts.get_accounts(&state.session).await {
                Ok(_) => {
                    state.last_validated = Utc::now();
                    return Ok(state.session.clone());
                }
                Err(e) => warn!("Session probe failed, re-authenticating: {e}"),
            }
        }

        // no session, or the probe failed: replace it wholesale
        *guard = None;
        info!("Creating new broker session");
        let session = self.auth.login().await?;
        *guard = Some(SessionState {
            session: session.clone(),
            last_validated: Utc::now(),
        });
        Ok(session)
    }

    /// True when a session currently exists, validated or not
    pub async fn has_session(&self) -> bool {
        self.state.read().await.is_some()
    }
}
