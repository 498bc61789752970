use crate::common::{test_config, test_session};
use ig_alert_bridge::error::AppError;
use ig_alert_bridge::model::responses::AccountsResponse;
use ig_alert_bridge::transport::http_client::{IgHttpClient, IgHttpClientImpl};
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;

fn client_for(base_url: String) -> IgHttpClientImpl {
    let mut config = test_config();
    config.rest_api.base_url = base_url;
    IgHttpClientImpl::new(Arc::new(config))
}

#[tokio::test]
async fn request_attaches_session_and_api_key_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts")
        .match_header("X-IG-API-KEY", "key")
        .match_header("CST", "cst")
        .match_header("X-SECURITY-TOKEN", "token")
        .match_header("Version", "1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"accounts": [{"accountId": "ABC123"}]}"#)
        .create_async()
        .await;

    let client = client_for(server.url());
    let result: AccountsResponse = client
        .request::<(), AccountsResponse>(Method::GET, "accounts", &test_session(), None, "1")
        .await
        .unwrap();

    assert_eq!(result.accounts.len(), 1);
    assert_eq!(result.accounts[0].account_id, "ABC123");
    mock.assert_async().await;
}

#[tokio::test]
async fn request_with_status_returns_the_http_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/positions/otc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"dealReference": "R1"}"#)
        .create_async()
        .await;

    let client = client_for(server.url());
    let (status, body): (u16, Value) = client
        .request_with_status(
            Method::POST,
            "positions/otc",
            &test_session(),
            Some(&json!({"epic": "X"})),
            "2",
        )
        .await
        .unwrap();

    assert_eq!(status, 200);
    assert_eq!(body["dealReference"], "R1");
}

#[tokio::test]
async fn bad_request_surfaces_the_api_error_code() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/positions/otc")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errorCode": "error.invalid.input"}"#)
        .create_async()
        .await;

    let client = client_for(server.url());
    let err = client
        .request::<Value, Value>(
            Method::POST,
            "positions/otc",
            &test_session(),
            Some(&json!({})),
            "2",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(code) if code == "error.invalid.input"));
}

#[tokio::test]
async fn unauthorized_and_not_found_are_mapped() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/accounts")
        .with_status(401)
        .with_body(r#"{"errorCode": "error.security.client-token-invalid"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/confirms/MISSING")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(server.url());

    let err = client
        .request::<(), Value>(Method::GET, "accounts", &test_session(), None, "1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    let err = client
        .request::<(), Value>(Method::GET, "confirms/MISSING", &test_session(), None, "1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn close_uses_post_with_delete_method_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/positions/otc")
        .match_header("_method", "DELETE")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"dealReference": "C1"}"#)
        .create_async()
        .await;

    let client = client_for(server.url());
    let body: Value = client
        .post_with_delete_method(
            "positions/otc",
            &test_session(),
            &json!({"dealId": "D1", "direction": "SELL", "orderType": "MARKET", "size": 1.0}),
            "1",
        )
        .await
        .unwrap();

    assert_eq!(body["dealReference"], "C1");
    mock.assert_async().await;
}
