use crate::constants::DEFAULT_EXPIRY;
use crate::presentation::order::{Direction, OrderType, TimeInForce};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Canonical broker-shaped order request.
///
/// Every field is fully resolved by the normalizer: direction and
/// `force_open` are final, defaults are applied and unset optional fields
/// stay `None`. Serializes to the camelCase body the position-creation
/// endpoint expects.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Instrument EPIC identifier
    pub epic: String,
    /// Instrument expiry ("-" for none)
    pub expiry: String,
    /// Order direction (buy or sell)
    pub direction: Direction,
    /// Order size/quantity
    pub size: f64,
    /// Type of order (market or limit)
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Price level for limit orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    /// Take profit distance
    #[serde(rename = "limitDistance", skip_serializing_if = "Option::is_none")]
    pub limit_distance: Option<f64>,
    /// Price level for take profit
    #[serde(rename = "limitLevel", skip_serializing_if = "Option::is_none")]
    pub limit_level: Option<f64>,
    /// Stop loss distance
    #[serde(rename = "stopDistance", skip_serializing_if = "Option::is_none")]
    pub stop_distance: Option<f64>,
    /// Price level for stop loss
    #[serde(rename = "stopLevel", skip_serializing_if = "Option::is_none")]
    pub stop_level: Option<f64>,
    /// Whether to use a guaranteed stop
    #[serde(rename = "guaranteedStop")]
    pub guaranteed_stop: bool,
    /// Whether the stop trails favourable price movement
    #[serde(rename = "trailingStop")]
    pub trailing_stop: bool,
    /// Trailing stop increment (only meaningful when trailingStop is true)
    #[serde(
        rename = "trailingStopIncrement",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_stop_increment: Option<f64>,
    /// Whether to open an additional position rather than net against an
    /// existing opposite one
    #[serde(rename = "forceOpen")]
    pub force_open: bool,
    /// Currency code for the order (e.g., "USD", "EUR")
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
    /// Order duration
    #[serde(rename = "timeInForce", skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Expiry date for GTD orders
    #[serde(rename = "goodTillDate", skip_serializing_if = "Option::is_none")]
    pub good_till_date: Option<String>,
    /// Quote identifier for quoted orders
    #[serde(rename = "quoteId", skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    /// Client-generated reference for the deal
    #[serde(rename = "dealReference", skip_serializing_if = "Option::is_none")]
    pub deal_reference: Option<String>,
}

impl OrderRequest {
    /// Creates a market order with the bridge defaults applied
    pub fn market(epic: String, direction: Direction, size: f64, currency_code: String) -> Self {
        Self {
            epic,
            expiry: DEFAULT_EXPIRY.to_string(),
            direction,
            size,
            order_type: OrderType::Market,
            level: None,
            limit_distance: None,
            limit_level: None,
            stop_distance: None,
            stop_level: None,
            guaranteed_stop: false,
            trailing_stop: false,
            trailing_stop_increment: None,
            force_open: true,
            currency_code,
            time_in_force: None,
            good_till_date: None,
            quote_id: None,
            deal_reference: None,
        }
    }

    /// Creates a limit order at the given level
    pub fn limit(
        epic: String,
        direction: Direction,
        size: f64,
        level: f64,
        currency_code: String,
    ) -> Self {
        Self {
            level: Some(level),
            order_type: OrderType::Limit,
            ..Self::market(epic, direction, size, currency_code)
        }
    }

    /// Adds a client-side deal reference
    pub fn with_reference(mut self, reference: String) -> Self {
        self.deal_reference = Some(reference);
        self
    }

    /// Marks the order as netting against an existing opposite position
    pub fn netting(mut self) -> Self {
        self.force_open = false;
        self
    }
}

/// Model for closing an existing position directly by deal id
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ClosePositionRequest {
    /// Unique identifier for the position to close
    #[serde(rename = "dealId", skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<String>,
    /// Direction of the closing order (opposite to the position)
    pub direction: Direction,
    /// Instrument EPIC identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic: Option<String>,
    /// Expiry date for the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    /// Price level for limit close orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    /// Type of order to use for closing
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Quote identifier, for order types that require a specific quote
    #[serde(rename = "quoteId", skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    /// Size/quantity to close
    pub size: f64,
    /// Order duration for the closing order
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
}

impl ClosePositionRequest {
    /// Creates a request to close a position at market price
    pub fn market(deal_id: String, direction: Direction, size: f64) -> Self {
        Self {
            deal_id: Some(deal_id),
            direction,
            epic: None,
            expiry: None,
            level: None,
            order_type: OrderType::Market,
            quote_id: None,
            size,
            time_in_force: TimeInForce::FillOrKill,
        }
    }

    /// Creates a request to close a position at a specific price level,
    /// for instruments that reject market orders
    pub fn limit(deal_id: String, direction: Direction, size: f64, level: f64) -> Self {
        Self {
            level: Some(level),
            order_type: OrderType::Limit,
            ..Self::market(deal_id, direction, size)
        }
    }
}
