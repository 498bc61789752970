use crate::model::requests::OrderRequest;
use serde_json::{Value, json};

/// One calling convention for the broker's position-creation endpoint.
///
/// The accepted body shape has drifted across API versions. Each adapter
/// renders the canonical order into the payload one version expects;
/// candidates are tried in table order and a shape mismatch advances to the
/// next one, while business-level rejections stop the sequence.
pub trait OrderCallAdapter: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;
    /// Value for the `Version` request header
    fn version(&self) -> &'static str;
    /// Renders the order into this convention's payload
    fn payload(&self, order: &OrderRequest) -> Value;
}

/// Current convention: API v2 camelCase body, unset optionals omitted
pub struct OtcV2;

impl OrderCallAdapter for OtcV2 {
    fn name(&self) -> &'static str {
        "otc-v2"
    }

    fn version(&self) -> &'static str {
        "2"
    }

    fn payload(&self, order: &OrderRequest) -> Value {
        serde_json::to_value(order).unwrap_or(Value::Null)
    }
}

/// Legacy convention: API v1 predates trailing stops and good-till-date,
/// and binds parameters positionally, so unset ones are sent as explicit
/// nulls in the order the old endpoint expects.
pub struct OtcV1;

impl OrderCallAdapter for OtcV1 {
    fn name(&self) -> &'static str {
        "otc-v1"
    }

    fn version(&self) -> &'static str {
        "1"
    }

    fn payload(&self, order: &OrderRequest) -> Value {
        json!({
            "epic": order.epic,
            "expiry": order.expiry,
            "direction": order.direction,
            "size": order.size,
            "orderType": order.order_type,
            "level": order.level,
            "limitDistance": order.limit_distance,
            "limitLevel": order.limit_level,
            "stopDistance": order.stop_distance,
            "stopLevel": order.stop_level,
            "guaranteedStop": order.guaranteed_stop,
            "forceOpen": order.force_open,
            "currencyCode": order.currency_code,
            "quoteId": order.quote_id,
            "dealReference": order.deal_reference,
        })
    }
}

/// Adapter table in preference order
pub fn default_adapters() -> Vec<Box<dyn OrderCallAdapter>> {
    vec![Box::new(OtcV2), Box::new(OtcV1)]
}

/// True when an API error code means the request body did not bind to the
/// endpoint's expected shape, as opposed to a business-level rejection such
/// as a closed market or insufficient funds.
pub fn is_shape_mismatch(error_code: &str) -> bool {
    let code = error_code.to_ascii_lowercase();
    code.contains("invalid.input")
        || code.contains("invalid.request")
        || code.contains("malformed")
        || code.contains("unsupported")
        || code.contains("null-not-allowed")
}
