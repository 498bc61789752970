use crate::common::{
    Canned, FakeAuthenticator, FakeHttpClient, test_config, test_config_without_credentials,
};
use ig_alert_bridge::application::services::bridge::AlertBridge;
use ig_alert_bridge::error::AppError;
use ig_alert_bridge::model::responses::{ConfirmReport, OutcomeStatus};
use ig_alert_bridge::presentation::instruction::Instruction;
use ig_alert_bridge::presentation::order::DealStatus;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn instruction(value: serde_json::Value) -> Instruction {
    serde_json::from_value(value).unwrap()
}

fn bridge(
    client: Arc<FakeHttpClient>,
) -> (AlertBridge<FakeAuthenticator, FakeHttpClient>, FakeAuthenticator) {
    let auth = FakeAuthenticator::new();
    let bridge = AlertBridge::with_parts(Arc::new(test_config()), auth.clone(), client).unwrap();
    (bridge, auth)
}

fn open_instruction() -> Instruction {
    instruction(json!({
        "action": "OPEN",
        "epic": "CS.D.GBPCHF.CFD.IP",
        "direction": "BUY",
        "size": 1,
        "order_type": "MARKET",
        "currency_code": "EUR"
    }))
}

#[tokio::test]
async fn place_order_carries_an_instruction_to_confirmation() {
    let client = Arc::new(FakeHttpClient::new());
    client.push("positions/otc", Canned::Ok(200, json!({"dealReference": "R1"})));
    client.push(
        "confirms/R1",
        Canned::Ok(
            200,
            json!({"dealId": "D1", "dealReference": "R1", "dealStatus": "ACCEPTED", "reason": "SUCCESS"}),
        ),
    );

    let (bridge, auth) = bridge(client);
    let outcome = bridge.place_order(&open_instruction()).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.deal_reference.as_deref(), Some("R1"));
    assert!(outcome.confirm.as_ref().unwrap().is_confirmed());
    assert_eq!(auth.logins.load(Ordering::SeqCst), 1);

    let serialized = serde_json::to_value(&outcome).unwrap();
    assert_eq!(serialized["status"], "success");
    assert_eq!(serialized["dealReference"], "R1");
    assert_eq!(serialized["confirm"]["dealStatus"], "ACCEPTED");
}

#[tokio::test]
async fn rejected_deal_is_a_confirmed_outcome_not_an_error() {
    let client = Arc::new(FakeHttpClient::new());
    client.push("positions/otc", Canned::Ok(200, json!({"dealReference": "R1"})));
    client.push(
        "confirms/R1",
        Canned::Ok(
            200,
            json!({"dealReference": "R1", "dealStatus": "REJECTED", "reason": "INSUFFICIENT_FUNDS"}),
        ),
    );

    let (bridge, _) = bridge(client);
    let outcome = bridge.place_order(&open_instruction()).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    match outcome.confirm.unwrap() {
        ConfirmReport::Confirmed(confirmation) => {
            assert_eq!(confirmation.deal_status, DealStatus::Rejected);
            assert_eq!(confirmation.reason.as_deref(), Some("INSUFFICIENT_FUNDS"));
        }
        other => panic!("expected confirmed report, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_failure_never_reaches_the_broker() {
    let client = Arc::new(FakeHttpClient::new());
    let (bridge, auth) = bridge(client.clone());

    let outcome = bridge
        .place_order(&instruction(json!({"direction": "BUY"})))
        .await;

    assert_eq!(outcome.status, OutcomeStatus::Error);
    assert_eq!(outcome.error.as_deref(), Some("ValidationError"));
    assert_eq!(client.total_calls(), 0);
    assert_eq!(auth.logins.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_deal_reference_reports_confirmation_unknown() {
    let client = Arc::new(FakeHttpClient::new());
    client.push("positions/otc", Canned::Ok(200, json!({})));

    let (bridge, _) = bridge(client);
    let outcome = bridge.place_order(&open_instruction()).await;

    // success with uncertainty: the order went out, the verdict is unknown
    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.deal_reference, None);
    let serialized = serde_json::to_value(&outcome).unwrap();
    assert_eq!(serialized["confirm"], json!({"error": "NoDealRef"}));
}

#[tokio::test]
async fn confirmation_fetch_failure_degrades_gracefully() {
    let client = Arc::new(FakeHttpClient::new());
    client.push("positions/otc", Canned::Ok(200, json!({"dealReference": "R9"})));
    client.push("confirms/R9", Canned::Err(AppError::NotFound));

    let (bridge, _) = bridge(client);
    let outcome = bridge.place_order(&open_instruction()).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    match outcome.confirm.unwrap() {
        ConfirmReport::Unavailable { error } => assert!(error.contains("not found")),
        other => panic!("expected unavailable report, got {other:?}"),
    }
}

#[tokio::test]
async fn convention_adaptation_is_transparent_to_the_caller() {
    let client = Arc::new(FakeHttpClient::new());
    // first convention rejected as malformed, positionally-adapted retry lands
    client.push(
        "positions/otc",
        Canned::Err(AppError::BadRequest(String::from("error.invalid.input"))),
    );
    client.push("positions/otc", Canned::Ok(200, json!({"dealReference": "R7"})));
    client.push(
        "confirms/R7",
        Canned::Ok(200, json!({"dealReference": "R7", "dealStatus": "ACCEPTED"})),
    );

    let (bridge, _) = bridge(client.clone());
    let outcome = bridge.place_order(&open_instruction()).await;

    assert_eq!(outcome.status, OutcomeStatus::Success);
    assert_eq!(outcome.deal_reference.as_deref(), Some("R7"));
    assert_eq!(client.call_count("positions/otc"), 2);
}

#[tokio::test]
async fn exhausted_submission_reports_payload_for_diagnostics() {
    let client = Arc::new(FakeHttpClient::new());
    client.push(
        "positions/otc",
        Canned::Err(AppError::BadRequest(String::from("error.invalid.input"))),
    );
    client.push(
        "positions/otc",
        Canned::Err(AppError::BadRequest(String::from("error.malformed.request"))),
    );

    let (bridge, _) = bridge(client);
    let outcome = bridge.place_order(&open_instruction()).await;

    assert_eq!(outcome.status, OutcomeStatus::Error);
    assert_eq!(outcome.error.as_deref(), Some("SubmissionFailed"));
    assert!(outcome.payload.is_some());
}

#[tokio::test]
async fn missing_credentials_fail_at_construction() {
    let err = AlertBridge::with_parts(
        Arc::new(test_config_without_credentials()),
        FakeAuthenticator::new(),
        Arc::new(FakeHttpClient::new()),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::MissingCredentials));
}

#[tokio::test]
async fn connectivity_and_search_reuse_one_session() {
    let client = Arc::new(FakeHttpClient::new());
    client.push(
        "accounts",
        Canned::Ok(200, json!({"accounts": [{"accountId": "ABC123"}]})),
    );
    client.push(
        "markets?searchTerm=gold",
        Canned::Ok(
            200,
            json!({"markets": [{"epic": "CS.D.CFDGOLD.CFDGC.IP", "instrumentName": "Gold"}]}),
        ),
    );

    let (bridge, auth) = bridge(client);

    let connectivity = bridge.test_connection().await;
    assert!(connectivity.ok);
    assert_eq!(connectivity.accounts.unwrap().accounts.len(), 1);

    let search = bridge.search_markets("gold").await;
    assert!(search.ok);
    assert_eq!(search.results.unwrap().len(), 1);

    assert_eq!(auth.logins.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn broker_errors_become_uniform_reports() {
    let client = Arc::new(FakeHttpClient::new());
    client.push("accounts", Canned::Err(AppError::Unauthorized));
    client.push("markets?searchTerm=oil", Canned::Err(AppError::NotFound));

    let (bridge, _) = bridge(client);

    let connectivity = bridge.test_connection().await;
    assert!(!connectivity.ok);
    assert!(connectivity.error.unwrap().contains("unauthorized"));

    let search = bridge.search_markets("oil").await;
    assert!(!search.ok);
    assert!(search.error.unwrap().contains("not found"));
}
