use crate::error::AppError;
use crate::presentation::order::{DealStatus, Direction};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the IG API on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgErrorResponse {
    /// API error code, e.g. `error.security.client-token-invalid`
    #[serde(rename = "errorCode", default)]
    pub error_code: String,
}

/// Raw result of an order submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResult {
    /// Broker-assigned correlation id for the submitted deal
    #[serde(rename = "dealReference")]
    pub deal_reference: Option<String>,
    /// Raw response body as returned by the broker
    pub raw: Value,
    /// HTTP status code of the submission call, when available
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
}

impl SubmissionResult {
    /// Builds a result from the broker response body, lifting the deal
    /// reference out of the raw JSON.
    pub fn from_body(raw: Value) -> Self {
        let deal_reference = raw
            .get("dealReference")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            deal_reference,
            raw,
            status_code: None,
        }
    }

    /// Attaches the HTTP status code of the submission call
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

/// Deal confirmation fetched from `confirms/{dealReference}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DealConfirmation {
    /// Broker-assigned deal identifier
    #[serde(rename = "dealId", default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    /// Echoed deal reference
    #[serde(
        rename = "dealReference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deal_reference: Option<String>,
    /// Accept/reject verdict
    #[serde(rename = "dealStatus")]
    pub deal_status: DealStatus,
    /// Broker-defined reason code (e.g. SUCCESS, INSUFFICIENT_FUNDS)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Position status reported alongside the verdict (e.g. OPEN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Echoed instrument epic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic: Option<String>,
    /// Echoed direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Echoed size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Execution level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    /// Confirmation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Confirmation outcome attached to an order result.
///
/// Serializes either as the confirmation body itself or as an
/// `{"error": ..}` annotation. Confirmation is enrichment: a fetch failure
/// never fails an order that was already transmitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConfirmReport {
    /// The broker's verdict was retrieved
    Confirmed(DealConfirmation),
    /// The verdict could not be retrieved
    Unavailable {
        /// What prevented the fetch
        error: String,
    },
}

impl ConfirmReport {
    /// Marker for a submission that produced no deal reference
    pub fn no_deal_ref() -> Self {
        ConfirmReport::Unavailable {
            error: String::from("NoDealRef"),
        }
    }

    /// True when the broker's verdict was retrieved
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmReport::Confirmed(_))
    }
}

/// Overall status of a bridged order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The order was transmitted to the broker
    Success,
    /// The order could not be transmitted
    Error,
}

/// Unified result returned to the webhook layer for one instruction.
///
/// Always carries `status`; on success also the deal reference, the raw
/// submission body and the confirmation report; on failure the error class,
/// a reason and, for exhausted submissions, the attempted payload.
#[derive(Debug, Clone, Serialize)]
pub struct OrderOutcome {
    /// success or error
    pub status: OutcomeStatus,
    /// Broker-assigned correlation id
    #[serde(rename = "dealReference", skip_serializing_if = "Option::is_none")]
    pub deal_reference: Option<String>,
    /// HTTP status of the submission call
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Raw submission response body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    /// Confirmation report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmReport>,
    /// Error class when status is error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Payload attempted against the broker, attached for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl OrderOutcome {
    /// Successful transmission, with whatever confirmation could be fetched
    pub fn success(submission: SubmissionResult, confirm: ConfirmReport) -> Self {
        Self {
            status: OutcomeStatus::Success,
            deal_reference: submission.deal_reference,
            status_code: submission.status_code,
            raw: Some(submission.raw),
            confirm: Some(confirm),
            error: None,
            reason: None,
            payload: None,
        }
    }

    /// Structured failure report for any error raised before or during
    /// transmission
    pub fn error(err: &AppError) -> Self {
        let payload = match err {
            AppError::SubmissionFailed { payload, .. } => Some(payload.clone()),
            _ => None,
        };
        Self {
            status: OutcomeStatus::Error,
            deal_reference: None,
            status_code: None,
            raw: None,
            confirm: None,
            error: Some(err.kind().to_string()),
            reason: Some(err.to_string()),
            payload,
        }
    }
}

/// Single account entry from `GET accounts`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier
    #[serde(rename = "accountId")]
    pub account_id: String,
    /// Human-readable account name
    #[serde(rename = "accountName", default)]
    pub account_name: Option<String>,
    /// Account type (e.g. CFD, SPREADBET)
    #[serde(rename = "accountType", default)]
    pub account_type: Option<String>,
    /// Whether this is the preferred account
    #[serde(default)]
    pub preferred: Option<bool>,
    /// Account currency
    #[serde(default)]
    pub currency: Option<String>,
}

/// Response of `GET accounts`, also used as the session liveness probe
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct AccountsResponse {
    /// All accounts visible to the session
    pub accounts: Vec<Account>,
}

/// Market half of an open position entry
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct PositionMarket {
    /// Instrument epic
    pub epic: String,
    /// Human-readable instrument name
    #[serde(rename = "instrumentName", default)]
    pub instrument_name: Option<String>,
    /// Instrument expiry
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Deal half of an open position entry
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct PositionDetail {
    /// Deal identifier, used to close the position directly
    #[serde(rename = "dealId")]
    pub deal_id: String,
    /// Direction the position was opened in
    pub direction: Direction,
    /// Position size
    #[serde(default)]
    pub size: Option<f64>,
    /// Opening level
    #[serde(default)]
    pub level: Option<f64>,
    /// Position currency
    #[serde(default)]
    pub currency: Option<String>,
}

/// One open position as returned by `GET positions`
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct OpenPosition {
    /// Instrument the position is held on
    pub market: PositionMarket,
    /// Deal details
    pub position: PositionDetail,
}

/// Response of `GET positions`
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct PositionsResponse {
    /// All open positions on the account
    pub positions: Vec<OpenPosition>,
}

impl PositionsResponse {
    /// First open position on the given epic, if any
    pub fn find_by_epic(&self, epic: &str) -> Option<&OpenPosition> {
        self.positions.iter().find(|p| p.market.epic == epic)
    }
}

/// Single market entry from an instrument search
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct MarketData {
    /// Unique identifier for the market
    pub epic: String,
    /// Human-readable name of the instrument
    #[serde(rename = "instrumentName")]
    pub instrument_name: String,
    /// Type of the instrument
    #[serde(rename = "instrumentType", default)]
    pub instrument_type: Option<String>,
    /// Expiry date of the instrument
    #[serde(default)]
    pub expiry: Option<String>,
    /// Current status of the market
    #[serde(rename = "marketStatus", default)]
    pub market_status: Option<String>,
    /// Current bid price
    #[serde(default)]
    pub bid: Option<f64>,
    /// Current offer price
    #[serde(default)]
    pub offer: Option<f64>,
}

/// Response of `GET markets?searchTerm=..`
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct MarketSearchResponse {
    /// Matching markets
    pub markets: Vec<MarketData>,
}

impl MarketSearchResponse {
    /// Returns the number of markets in the response
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Returns true if the response contains no markets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    /// Returns an iterator over the markets
    pub fn iter(&self) -> impl Iterator<Item = &MarketData> {
        self.markets.iter()
    }
}

impl std::fmt::Display for MarketSearchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("INSTRUMENT NAME"),
            Cell::new("EPIC"),
            Cell::new("TYPE"),
            Cell::new("BID"),
            Cell::new("OFFER"),
            Cell::new("EXPIRY"),
            Cell::new("STATUS"),
        ]));

        let mut sorted = self.markets.clone();
        sorted.sort_by(|a, b| {
            a.instrument_name
                .to_lowercase()
                .cmp(&b.instrument_name.to_lowercase())
        });

        for market in &sorted {
            let bid = market
                .bid
                .map(|b| format!("{b:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let offer = market
                .offer
                .map(|o| format!("{o:.2}"))
                .unwrap_or_else(|| "-".to_string());

            // Truncate long names to keep the EPIC column readable
            let name = if market.instrument_name.len() > 30 {
                format!("{}...", &market.instrument_name[0..27])
            } else {
                market.instrument_name.clone()
            };

            table.add_row(Row::new(vec![
                Cell::new(&name),
                Cell::new(&market.epic),
                Cell::new(market.instrument_type.as_deref().unwrap_or("-")),
                Cell::new(&bid),
                Cell::new(&offer),
                Cell::new(market.expiry.as_deref().unwrap_or("-")),
                Cell::new(market.market_status.as_deref().unwrap_or("-")),
            ]));
        }

        write!(f, "{table}")
    }
}

/// Uniform connectivity report for the webhook layer
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityReport {
    /// Whether the session and credentials are usable
    pub ok: bool,
    /// Accounts visible to the session, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<AccountsResponse>,
    /// Failure message, on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectivityReport {
    /// Successful connectivity check
    pub fn ok(accounts: AccountsResponse) -> Self {
        Self {
            ok: true,
            accounts: Some(accounts),
            error: None,
        }
    }

    /// Failed connectivity check
    pub fn error(message: String) -> Self {
        Self {
            ok: false,
            accounts: None,
            error: Some(message),
        }
    }
}

/// Uniform instrument search report for the webhook layer
#[derive(Debug, Clone, Serialize)]
pub struct MarketSearchReport {
    /// Whether the search ran
    pub ok: bool,
    /// Matching markets, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<MarketSearchResponse>,
    /// Failure message, on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MarketSearchReport {
    /// Successful search
    pub fn ok(results: MarketSearchResponse) -> Self {
        Self {
            ok: true,
            results: Some(results),
            error: None,
        }
    }

    /// Failed search
    pub fn error(message: String) -> Self {
        Self {
            ok: false,
            results: None,
            error: Some(message),
        }
    }
}
