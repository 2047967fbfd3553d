use crate::helpers::{TestEnv, lcu_server, stdout};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const SUMMONER_PATH: &str = "/lol-summoner/v1/current-summoner";

/// **VALUE**: Verifies `request -o <dir>` end to end: stdout, file name and file content.
///
/// **WHY THIS MATTERS**: This is the main scripting use of the CLI. The file name shape
/// and the `{statusCode, body}` content are what downstream scripts depend on.
///
/// **BUG THIS CATCHES**: Would catch slashes leaking into file names, timestamps missing,
/// or the file holding the rendered text instead of the result object.
#[tokio::test(flavor = "multi_thread")]
async fn given_directory_out_when_request_succeeds_then_result_file_written() {
    // GIVEN: An LCU stand-in and a lockfile for it
    let server = lcu_server().await;
    Mock::given(method("GET"))
        .and(path(SUMMONER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summonerLevel": 412 })))
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::for_port(server.address().port());
    let out_dir = env.root().join("results");
    std::fs::create_dir_all(&out_dir).unwrap();

    // WHEN: Requesting with a directory target
    let assert = env
        .run(&["request", "get", SUMMONER_PATH, "-o", out_dir.to_str().unwrap()])
        .await;

    // THEN: Status on stdout, one file named after method, path and time
    let assert = assert.success();
    assert!(stdout(&assert).contains("Status: 200"));

    let files: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    let name = &files[0];
    let timestamp = name
        .strip_prefix("GET-_lol-summoner_v1_current-summoner-")
        .and_then(|rest| rest.strip_suffix(".json"))
        .expect("file name shape");
    assert!(timestamp.chars().all(|c| c.is_ascii_digit()));

    let contents = std::fs::read_to_string(out_dir.join(name)).unwrap();
    let written: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(written, json!({ "statusCode": 200, "body": { "summonerLevel": 412 } }));
    assert!(contents.contains("\n    \"statusCode\""));
}

/// **VALUE**: A missing `--out` path is written verbatim.
#[tokio::test(flavor = "multi_thread")]
async fn given_missing_file_out_when_request_then_exact_path_written() {
    let server = lcu_server().await;
    let env = TestEnv::for_port(server.address().port());
    let target = env.root().join("summoner.json");

    env.run(&["request", "GET", SUMMONER_PATH, "-o", target.to_str().unwrap()])
        .await
        .success();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["statusCode"], 200);
}

/// **VALUE**: A 404 is reported with status and message and still exits 0.
#[tokio::test(flavor = "multi_thread")]
async fn given_not_found_when_request_then_protocol_error_printed() {
    // GIVEN: An endpoint answering 404 with an LCU error body
    let server = lcu_server().await;
    Mock::given(method("GET"))
        .and(path("/lol-nope/v1/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errorCode": "RPC_ERROR",
            "httpStatus": 404,
            "message": "Not Found"
        })))
        .mount(&server)
        .await;
    let env = TestEnv::for_port(server.address().port());

    // WHEN: Requesting it
    let assert = env.run(&["request", "GET", "/lol-nope/v1/missing"]).await;

    // THEN: Status, code and message instead of a body
    let output = stdout(&assert.success());
    assert!(output.starts_with("Status: 404\nError: RPC_ERROR\nMessage: Not Found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn given_body_and_query_when_request_then_forwarded() {
    let server = lcu_server().await;
    Mock::given(method("POST"))
        .and(path("/lol-lobby/v2/lobby"))
        .and(wiremock::matchers::query_param("force", "true"))
        .and(wiremock::matchers::body_json(json!({ "queueId": 420 })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::for_port(server.address().port());

    let assert = env
        .run(&[
            "request",
            "POST",
            "/lol-lobby/v2/lobby",
            "-b",
            r#"{"queueId":420}"#,
            "-q",
            r#"{"force":true}"#,
        ])
        .await;

    assert!(stdout(&assert.success()).contains("Status: 201"));
}
