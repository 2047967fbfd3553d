use crate::helpers::{TestEnv, lcu_server};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_help(server: &MockServer) {
    for (format, body) in [
        ("Console", json!({ "functions": {}, "events": {}, "types": {} })),
        (
            "Full",
            json!({
                "functions": [{
                    "name": "GetLolGameflowV1Session",
                    "http_method": "GET",
                    "url": "/lol-gameflow/v1/session",
                    "returns": { "type": "LolGameflowSession", "elementType": "" }
                }],
                "events": [],
                "types": [{ "name": "LolGameflowSession", "fields": [] }]
            }),
        ),
    ] {
        Mock::given(method("GET"))
            .and(path("/help"))
            .and(query_param("format", format))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }
}

/// **VALUE**: `schema --swagger` fetches each help format once and writes only Swagger.
///
/// **BUG THIS CATCHES**: Would catch raw files being written without `--raw`, or the
/// schema being fetched once per output (the mocks expect exactly one call each).
#[tokio::test(flavor = "multi_thread")]
async fn given_swagger_flag_when_schema_then_only_swagger_written() {
    // GIVEN: An LCU stand-in serving /help
    let server = lcu_server().await;
    mount_help(&server).await;
    let env = TestEnv::for_port(server.address().port());
    let out_dir = env.root().join("swagger");

    // WHEN: Exporting Swagger into a new directory
    env.run(&["schema", "--swagger", out_dir.to_str().unwrap()])
        .await
        .success();

    // THEN: swagger.json only
    let files: Vec<String> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, vec![String::from("swagger.json")]);
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn given_typescript_flag_without_value_when_schema_then_written_to_working_directory() {
    let server = lcu_server().await;
    mount_help(&server).await;
    let env = TestEnv::for_port(server.address().port());

    env.run(&["schema", "-t", "--tsnamespace", "LCU"])
        .await
        .success();

    let types = std::fs::read_to_string(env.work_dir.join("lcu-types.d.ts")).unwrap();
    assert!(types.starts_with("declare namespace LCU {"));
    assert!(env.work_dir.join("lcu-endpoints.d.ts").exists());
    assert!(env.work_dir.join("lcu-events.d.ts").exists());
}
