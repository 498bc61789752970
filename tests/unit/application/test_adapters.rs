use assert_json_diff::assert_json_include;
use ig_alert_bridge::application::adapters::{
    OrderCallAdapter, OtcV1, OtcV2, default_adapters, is_shape_mismatch,
};
use ig_alert_bridge::model::requests::OrderRequest;
use ig_alert_bridge::presentation::order::Direction;
use serde_json::json;

fn sample_order() -> OrderRequest {
    OrderRequest::market(
        String::from("CS.D.EURUSD.TODAY.IP"),
        Direction::Buy,
        1.0,
        String::from("EUR"),
    )
    .with_reference(String::from("REF123"))
}

#[test]
fn v2_payload_omits_unset_optionals() {
    let payload = OtcV2.payload(&sample_order());

    assert_json_include!(
        actual: payload.clone(),
        expected: json!({
            "epic": "CS.D.EURUSD.TODAY.IP",
            "expiry": "-",
            "direction": "BUY",
            "size": 1.0,
            "orderType": "MARKET",
            "forceOpen": true,
            "guaranteedStop": false,
            "trailingStop": false,
            "currencyCode": "EUR",
            "dealReference": "REF123"
        })
    );
    // MARKET orders carry no level at all in the v2 shape
    assert!(payload.get("level").is_none());
    assert!(payload.get("stopLevel").is_none());
}

#[test]
fn v1_payload_sends_explicit_nulls() {
    let payload = OtcV1.payload(&sample_order());

    assert_eq!(payload["epic"], "CS.D.EURUSD.TODAY.IP");
    assert!(payload["level"].is_null());
    assert!(payload["quoteId"].is_null());
    assert!(payload["stopDistance"].is_null());
    // the legacy endpoint predates trailing stops
    assert!(payload.get("trailingStop").is_none());
    assert!(payload.get("trailingStopIncrement").is_none());
    assert!(payload.get("timeInForce").is_none());
}

#[test]
fn adapter_table_prefers_current_convention() {
    let adapters = default_adapters();
    assert_eq!(adapters.len(), 2);
    assert_eq!(adapters[0].version(), "2");
    assert_eq!(adapters[1].version(), "1");
}

#[test]
fn shape_mismatch_codes_are_distinguished_from_rejections() {
    assert!(is_shape_mismatch("error.invalid.input"));
    assert!(is_shape_mismatch("invalid.request.format"));
    assert!(is_shape_mismatch("error.malformed.request.body"));
    assert!(is_shape_mismatch("unsupported.version"));
    assert!(is_shape_mismatch("validation.null-not-allowed.request.size"));

    assert!(!is_shape_mismatch("error.public-api.failure.market-closed"));
    assert!(!is_shape_mismatch("error.public-api.epic-not-found"));
    assert!(!is_shape_mismatch("INSUFFICIENT_FUNDS"));
}
