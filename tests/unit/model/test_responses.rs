use ig_alert_bridge::error::AppError;
use ig_alert_bridge::model::responses::{
    AccountsResponse, ConfirmReport, ConnectivityReport, DealConfirmation, MarketSearchReport,
    MarketSearchResponse, OrderOutcome, OutcomeStatus, PositionsResponse, SubmissionResult,
};
use ig_alert_bridge::presentation::order::{DealStatus, Direction};
use serde_json::json;

#[test]
fn submission_result_lifts_the_deal_reference() {
    let result =
        SubmissionResult::from_body(json!({"dealReference": "R1", "extra": 1})).with_status(200);
    assert_eq!(result.deal_reference.as_deref(), Some("R1"));
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.raw["extra"], 1);

    let empty = SubmissionResult::from_body(json!({}));
    assert_eq!(empty.deal_reference, None);
    assert_eq!(empty.status_code, None);
}

#[test]
fn deal_confirmation_parses_a_rejection() {
    let confirmation: DealConfirmation = serde_json::from_value(json!({
        "date": "2025-08-08T10:00:00",
        "dealId": "DIAAAABBBCCC",
        "dealReference": "R1",
        "dealStatus": "REJECTED",
        "reason": "INSUFFICIENT_FUNDS",
        "epic": "CS.D.GBPCHF.CFD.IP",
        "direction": "BUY",
        "size": 1.0,
        "status": null
    }))
    .unwrap();

    assert_eq!(confirmation.deal_status, DealStatus::Rejected);
    assert_eq!(confirmation.reason.as_deref(), Some("INSUFFICIENT_FUNDS"));
    assert_eq!(confirmation.direction, Some(Direction::Buy));
    assert_eq!(confirmation.level, None);
}

#[test]
fn confirm_report_serializes_untagged() {
    let confirmed: ConfirmReport = serde_json::from_value(json!({
        "dealStatus": "ACCEPTED",
        "reason": "SUCCESS"
    }))
    .unwrap();
    assert!(confirmed.is_confirmed());

    let unavailable: ConfirmReport =
        serde_json::from_value(json!({"error": "timed out"})).unwrap();
    assert!(!unavailable.is_confirmed());

    let json = serde_json::to_value(ConfirmReport::no_deal_ref()).unwrap();
    assert_eq!(json, json!({"error": "NoDealRef"}));
}

#[test]
fn order_outcome_success_shape() {
    let submission =
        SubmissionResult::from_body(json!({"dealReference": "R1"})).with_status(200);
    let outcome = OrderOutcome::success(submission, ConfirmReport::no_deal_ref());

    assert_eq!(outcome.status, OutcomeStatus::Success);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["dealReference"], "R1");
    assert_eq!(json["statusCode"], 200);
    assert!(json.get("error").is_none());
}

#[test]
fn order_outcome_error_distinguishes_classes() {
    let outcome = OrderOutcome::error(&AppError::Validation(String::from("missing 'epic'")));
    assert_eq!(outcome.status, OutcomeStatus::Error);
    assert_eq!(outcome.error.as_deref(), Some("ValidationError"));
    assert!(outcome.reason.unwrap().contains("epic"));
    assert!(outcome.payload.is_none());

    let outcome = OrderOutcome::error(&AppError::SubmissionFailed {
        reason: String::from("unsupported.version"),
        payload: json!({"epic": "X"}),
    });
    assert_eq!(outcome.error.as_deref(), Some("SubmissionFailed"));
    assert_eq!(outcome.payload.unwrap()["epic"], "X");
}

#[test]
fn accounts_and_positions_parse() {
    let accounts: AccountsResponse = serde_json::from_value(json!({
        "accounts": [
            {"accountId": "ABC123", "accountName": "CFD", "accountType": "CFD", "preferred": true, "currency": "EUR"}
        ]
    }))
    .unwrap();
    assert_eq!(accounts.accounts[0].account_id, "ABC123");

    let positions: PositionsResponse = serde_json::from_value(json!({
        "positions": [
            {
                "market": {"epic": "CS.D.GBPCHF.CFD.IP", "instrumentName": "GBP/CHF"},
                "position": {"dealId": "D1", "direction": "BUY", "size": 2.0, "level": 1.1}
            }
        ]
    }))
    .unwrap();

    let open = positions.find_by_epic("CS.D.GBPCHF.CFD.IP").unwrap();
    assert_eq!(open.position.deal_id, "D1");
    assert_eq!(open.position.direction, Direction::Buy);
    assert!(positions.find_by_epic("IX.D.DAX.IFD.IP").is_none());
}

#[test]
fn market_search_renders_a_table() {
    let response: MarketSearchResponse = serde_json::from_value(json!({
        "markets": [
            {
                "epic": "CS.D.CFDGOLD.CFDGC.IP",
                "instrumentName": "Gold",
                "instrumentType": "COMMODITIES",
                "expiry": "-",
                "marketStatus": "TRADEABLE",
                "bid": 2400.5,
                "offer": 2401.0
            }
        ]
    }))
    .unwrap();

    assert_eq!(response.len(), 1);
    assert!(!response.is_empty());
    let rendered = response.to_string();
    assert!(rendered.contains("CS.D.CFDGOLD.CFDGC.IP"));
    assert!(rendered.contains("Gold"));
}

#[test]
fn reports_keep_a_uniform_shape() {
    let ok = ConnectivityReport::ok(AccountsResponse::default());
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["ok"], true);
    assert!(json.get("error").is_none());

    let err = MarketSearchReport::error(String::from("unauthorized"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "unauthorized");
    assert!(json.get("results").is_none());
}
