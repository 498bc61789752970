use crate::constants::{
    DEFAULT_CURRENCY_CODE, DEFAULT_SESSION_TTL_SECS, DEMO_REST_BASE_URL, LIVE_REST_BASE_URL,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the IG Markets API
pub struct Credentials {
    /// Username for the IG Markets account
    pub username: String,
    /// Password for the IG Markets account
    pub password: String,
    /// API key for the IG Markets API
    pub api_key: String,
}

impl Credentials {
    /// True when username, password and API key are all present
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.password.trim().is_empty()
            && !self.api_key.trim().is_empty()
    }
}

/// Account environment selecting the demo or live API endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Demo account against the demo API
    #[default]
    Demo,
    /// Live account against the production API
    Live,
}

impl AccountType {
    /// Parses the `IG_ACC_TYPE` token; unknown values fall back to DEMO
    pub fn parse(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "LIVE" => AccountType::Live,
            "DEMO" => AccountType::Demo,
            other => {
                error!("Unknown IG_ACC_TYPE {other:?}, falling back to DEMO");
                AccountType::Demo
            }
        }
    }

    /// REST base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            AccountType::Demo => DEMO_REST_BASE_URL,
            AccountType::Live => LIVE_REST_BASE_URL,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the IG Markets REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the broker session lifecycle
pub struct SessionConfig {
    /// Seconds a session is trusted before a liveness probe is required
    pub ttl_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Defaults applied while normalizing inbound instructions
pub struct OrderConfig {
    /// Currency code used when an instruction does not name one
    pub default_currency: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the bridge
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Demo or live environment
    pub account_type: AccountType,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Session lifecycle configuration
    pub session: SessionConfig,
    /// Order normalization defaults
    pub order: OrderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env` when present)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("IG_USERNAME", String::new());
        let password = get_env_or_default("IG_PASSWORD", String::new());
        let api_key = get_env_or_default("IG_API_KEY", String::new());

        if username.is_empty() {
            error!("IG_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("IG_PASSWORD not found in environment variables or .env file");
        }
        if api_key.is_empty() {
            error!("IG_API_KEY not found in environment variables or .env file");
        }

        let account_type =
            AccountType::parse(&get_env_or_default("IG_ACC_TYPE", String::from("DEMO")));

        Config {
            credentials: Credentials {
                username,
                password,
                api_key,
            },
            account_type,
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "IG_REST_BASE_URL",
                    String::from(account_type.base_url()),
                ),
                timeout: get_env_or_default("IG_REST_TIMEOUT", 30),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("IG_RATE_LIMIT_MAX_REQUESTS", 29),
                period_seconds: get_env_or_default("IG_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("IG_RATE_LIMIT_BURST_SIZE", 20),
            },
            session: SessionConfig {
                ttl_secs: get_env_or_default("IG_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS),
            },
            order: OrderConfig {
                default_currency: get_env_or_default(
                    "IG_DEFAULT_CURRENCY",
                    String::from(DEFAULT_CURRENCY_CODE),
                ),
            },
        }
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session.ttl_secs as i64)
    }
}
