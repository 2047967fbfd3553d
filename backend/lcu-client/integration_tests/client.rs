use crate::helpers::{TEST_AUTHORIZATION, client_for, closed_port, http_credentials};

use common::HttpStatusCode;
use lcu_client::LcuClient;
use lcu_client::error::lcu_client::LcuClientError;
use models::{HttpMethod, RequestResult};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a successful request end to end, including Basic auth.
///
/// **WHY THIS MATTERS**: This is the `request` command's main path. The auth header is
/// the part most likely to silently break (every call would then return 401).
#[tokio::test]
async fn given_authorized_get_when_request_then_returns_success_with_json_body() {
    // GIVEN: An LCU stub that requires the test credentials
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol-summoner/v1/current-summoner"))
        .and(header("authorization", TEST_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summonerLevel": 412 })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Requesting
    let result = client
        .request(HttpMethod::Get, "/lol-summoner/v1/current-summoner", None, None)
        .await;

    // THEN: A success carrying the parsed body
    match result {
        RequestResult::Success(success) => {
            assert_eq!(success.status_code, HttpStatusCode(200));
            assert_eq!(success.body, json!({ "summonerLevel": 412 }));
        }
        other => panic!("Expected success, got {other:?}"),
    }
}

/// **VALUE**: Non-2xx responses with an LCU error body become protocol errors.
///
/// **BUG THIS CATCHES**: Would catch `request()` treating 404 as a transport failure and
/// losing the LCU's error code.
#[tokio::test]
async fn given_lcu_error_response_when_request_then_returns_protocol_error() {
    // GIVEN: A 404 with the LCU error shape
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol-nope/v1/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errorCode": "RPC_ERROR",
            "httpStatus": 404,
            "implementationDetails": {},
            "message": "Not Found"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Requesting
    let result = client
        .request(HttpMethod::Get, "/lol-nope/v1/missing", None, None)
        .await;

    // THEN: A protocol error with status, code and message
    match result {
        RequestResult::ProtocolError(error) => {
            assert_eq!(error.status_code, HttpStatusCode(404));
            assert_eq!(error.error_code, "RPC_ERROR");
            assert_eq!(error.message, "Not Found");
            assert_eq!(error.details, Some(json!({})));
        }
        other => panic!("Expected protocol error, got {other:?}"),
    }
}

/// **VALUE**: Query objects become query parameters and bodies are sent as JSON.
#[tokio::test]
async fn given_query_and_body_when_request_then_both_reach_server() {
    // GIVEN: A stub matching both query and JSON body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lol-lobby/v2/lobby"))
        .and(query_param("force", "true"))
        .and(body_json(json!({ "queueId": 420 })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Posting
    let result = client
        .request(
            HttpMethod::Post,
            "/lol-lobby/v2/lobby",
            Some(&json!({ "force": true })),
            Some(&json!({ "queueId": 420 })),
        )
        .await;

    // THEN: Success with an empty (null) body
    match result {
        RequestResult::Success(success) => {
            assert_eq!(success.status_code, HttpStatusCode(201));
            assert_eq!(success.body, json!(null));
        }
        other => panic!("Expected success, got {other:?}"),
    }
}

/// **VALUE**: Request paths keep their case.
///
/// **BUG THIS CATCHES**: Would catch a reintroduced lower-casing of request paths,
/// which breaks endpoints with case-sensitive path parameters (e.g. PUUIDs, names).
#[tokio::test]
async fn given_mixed_case_path_when_request_then_path_case_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol-summoner/v1/summoners/by-name/Faker"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client
        .request(HttpMethod::Get, "/lol-summoner/v1/summoners/by-name/Faker", None, None)
        .await;

    assert!(matches!(result, RequestResult::Success(_)), "Got {result:?}");
}

/// **VALUE**: Connection failures become transport errors instead of panics or `Err`.
///
/// **WHY THIS MATTERS**: The client can exit between readiness and the request. The user
/// must see a code and message, not a crash.
#[tokio::test]
async fn given_nothing_listening_when_request_then_returns_transport_error() {
    // GIVEN: A client pointing at a closed port
    let client = LcuClient::new(http_credentials(closed_port()), Duration::from_secs(2)).unwrap();

    // WHEN: Requesting
    let result = client
        .request(HttpMethod::Get, "/lol-summoner/v1/current-summoner", None, None)
        .await;

    // THEN: A transport error with a code and a message
    match result {
        RequestResult::TransportError(error) => {
            assert!(error.error_code.is_some());
            assert!(error.message.is_some());
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_success_when_get_json_then_returns_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/help"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.get_json("/help", None).await;

    match result {
        Err(LcuClientError::Server { status, .. }) => assert_eq!(status, HttpStatusCode(503)),
        other => panic!("Expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_query_when_get_json_then_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/help"))
        .and(query_param("format", "Full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "types": [] })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let value = client
        .get_json("/help", Some(&json!({ "format": "Full" })))
        .await
        .unwrap();

    assert_eq!(value, json!({ "types": [] }));
}

/// **VALUE**: The readiness probe accepts any HTTP status.
///
/// **BUG THIS CATCHES**: Would catch the probe requiring 2xx, which would make the CLI
/// wait forever while a plugin is still loading and answering 404.
#[tokio::test]
async fn given_probe_endpoint_returns_404_when_probe_then_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let status = client.probe().await.unwrap();

    assert_eq!(status, HttpStatusCode(404));
}

/// **VALUE**: A scheme-relative path never reaches a second server.
///
/// **WHY THIS MATTERS**: Requests carry `Authorization: Basic riot:<token>`. If
/// `//other-host/...` were resolved as a URL, the token would go to that host.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` being applied to raw user paths.
#[tokio::test]
async fn given_scheme_relative_path_when_request_then_other_server_never_contacted() {
    // GIVEN: The LCU stub and a second server that must stay untouched
    let lcu = MockServer::start().await;
    let other = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&other)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/localhost:{}/steal", other.address().port())))
        .and(header("authorization", TEST_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&lcu)
        .await;
    let client = client_for(&lcu);

    // WHEN: Requesting a path that looks like another host
    let target = format!("//localhost:{}/steal", other.address().port());
    let result = client.request(HttpMethod::Get, &target, None, None).await;

    // THEN: The LCU answered; the other server saw nothing
    assert!(matches!(result, RequestResult::ProtocolError(_)), "Got {result:?}");
    let leaked = other.received_requests().await.unwrap_or_default();
    assert!(leaked.is_empty(), "Other server received {leaked:?}");
}
