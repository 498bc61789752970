use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order direction (buy or sell)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Buy direction (long position)
    #[default]
    Buy,
    /// Sell direction (short position)
    Sell,
}

impl Direction {
    /// Parses a BUY/SELL token, case-insensitively
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "BUY" => Some(Direction::Buy),
            "SELL" => Some(Direction::Sell),
            _ => None,
        }
    }

    /// Direction that nets against this one
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Market order - executed immediately at current market price
    #[default]
    Market,
    /// Limit order - executed when price reaches the specified level
    Limit,
}

impl OrderType {
    /// Parses a MARKET/LIMIT token, case-insensitively
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "MARKET" => Some(OrderType::Market),
            "LIMIT" => Some(OrderType::Limit),
            _ => None,
        }
    }
}

/// Order duration (time in force)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeInForce {
    /// Order remains valid until cancelled by the client
    #[serde(rename = "GOOD_TILL_CANCELLED")]
    #[default]
    GoodTillCancelled,
    /// Order remains valid until a specified date
    #[serde(rename = "GOOD_TILL_DATE")]
    GoodTillDate,
    /// Order is executed immediately (partially or completely) or cancelled
    #[serde(rename = "IMMEDIATE_OR_CANCEL")]
    ImmediateOrCancel,
    /// Order must be filled completely immediately or cancelled
    #[serde(rename = "FILL_OR_KILL")]
    FillOrKill,
}

impl TimeInForce {
    /// Parses a time-in-force token; unknown tokens are treated as unset
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "GOOD_TILL_CANCELLED" => Some(TimeInForce::GoodTillCancelled),
            "GOOD_TILL_DATE" => Some(TimeInForce::GoodTillDate),
            "IMMEDIATE_OR_CANCEL" => Some(TimeInForce::ImmediateOrCancel),
            "FILL_OR_KILL" => Some(TimeInForce::FillOrKill),
            _ => None,
        }
    }
}

/// Accept/reject verdict attached to a deal confirmation
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealStatus {
    /// The deal was accepted by the broker
    Accepted,
    /// The deal was rejected; the confirmation carries a reason code
    Rejected,
}

/// Alert action describing what an instruction wants to do
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Open a new position (or add to one, subject to force_open)
    #[default]
    Open,
    /// Close a long position by selling against it
    CloseLong,
    /// Close a short position by buying against it
    CloseShort,
}

impl Action {
    /// Resolves the action token from an alert. Anything that is not a
    /// recognised CLOSE token opens a position, matching the webhook
    /// contract.
    pub fn parse(token: Option<&str>) -> Self {
        match token.map(|t| t.trim().to_uppercase()).as_deref() {
            Some("CLOSE_LONG") => Action::CloseLong,
            Some("CLOSE_SHORT") => Action::CloseShort,
            _ => Action::Open,
        }
    }
}
