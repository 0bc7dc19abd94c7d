//! Verify request building and response parsing against the JSON vectors in
//! `test-vectors/`.
//!
//! Each case runs the real client over a `Replay` transport: the recorded
//! request is compared with `expected_request`, and the canned
//! `simulated_response` must parse into `expected_result` (or fail with
//! `expected_error`).

mod common;

use std::sync::Arc;

use common::{Replay, API_KEY};
use petstore::{
    ApiError, ClientConfig, CreateOrder, GetOrderResponse, HttpMethod, HttpRequest, Order,
    PetstoreClient,
};

const BASE_URL: &str = "http://localhost:3000";

fn client(transport: Arc<Replay>) -> PetstoreClient {
    let config = ClientConfig::builder(BASE_URL).api_key(API_KEY).build();
    PetstoreClient::with_transport(config, transport)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn replay_for(case: &serde_json::Value) -> Arc<Replay> {
    let sim = &case["simulated_response"];
    Arc::new(Replay::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["content_type"].as_str().unwrap(),
        sim["body"].as_str().unwrap(),
    ))
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");
    assert_eq!(req.header("api_key"), Some(API_KEY), "{name}: api_key header");

    if let Some(headers) = expected["headers"].as_array() {
        let expected_headers: Vec<(String, String)> = headers
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        let actual: Vec<(String, String)> = req
            .headers
            .iter()
            .filter(|(k, _)| k != "user-agent")
            .cloned()
            .collect();
        assert_eq!(actual, expected_headers, "{name}: headers");
    }

    match expected["body"].as_str() {
        Some(body) => assert_eq!(req.body.as_deref(), Some(body), "{name}: body"),
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn check_error(name: &str, err: ApiError, expected: &serde_json::Value) {
    assert_eq!(err.status(), expected["status"].as_u64().map(|s| s as u16), "{name}: status");
    assert_eq!(err.body_text().as_deref(), expected["body"].as_str(), "{name}: body");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateOrder = serde_json::from_value(case["input"].clone()).unwrap();
        let transport = replay_for(case);
        let result = client(transport.clone()).store().order().create(&input, None);

        check_request(name, &transport.last(), &case["expected_request"]);

        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: Order = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let transport = replay_for(case);
        let result = client(transport.clone()).store().order().get(id, None);

        check_request(name, &transport.last(), &case["expected_request"]);

        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else if let Some(binary) = case.get("expected_binary") {
            match result.unwrap() {
                GetOrderResponse::Binary(payload) => {
                    assert_eq!(payload.content, binary.as_str().unwrap().as_bytes(), "{name}: payload")
                }
                other => panic!("{name}: expected binary payload, got {other:?}"),
            }
        } else {
            let expected: Order = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), GetOrderResponse::Order(expected), "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let transport = replay_for(case);
        let result = client(transport.clone()).store().order().delete(id, None);

        check_request(name, &transport.last(), &case["expected_request"]);

        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let response = result.unwrap();
            assert_eq!(response.status, case["simulated_response"]["status"].as_u64().unwrap() as u16);
        }
    }
}
