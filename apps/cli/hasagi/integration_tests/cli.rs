use crate::helpers::TestEnv;

use predicates::str::contains;

/// **VALUE**: Running without a command exits non-zero and prints usage.
#[test]
fn given_no_command_when_run_then_fails_with_usage() {
    let env = TestEnv::new();

    env.cmd().assert().failure().stderr(contains("Usage"));
}

#[test]
fn given_help_flag_when_run_then_lists_commands() {
    let env = TestEnv::new();

    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("request"))
        .stdout(contains("listen"))
        .stdout(contains("schema"))
        .stdout(contains("credentials"));
}

/// **VALUE**: `schema` without output flags does nothing at all.
///
/// **WHY THIS MATTERS**: No client is running in this test. If the command connected
/// before checking its flags it would wait forever and hit the timeout.
///
/// **BUG THIS CATCHES**: Would catch the no-op check moving after the readiness wait, or
/// files being written with no target requested.
#[test]
fn given_schema_without_flags_when_run_then_succeeds_without_connecting() {
    // GIVEN: A config whose lockfile does not exist
    let env = TestEnv::new();

    // WHEN: Running `schema`
    env.cmd().arg("schema").assert().success();

    // THEN: Nothing was written
    let entries = std::fs::read_dir(&env.work_dir).unwrap().count();
    assert_eq!(entries, 0);
}

/// **VALUE**: Invalid `--body` JSON fails fast, before waiting for a client.
#[test]
fn given_invalid_body_json_when_run_then_usage_error_without_waiting() {
    // GIVEN: No client running
    let env = TestEnv::new();

    // WHEN/THEN: Fails with a message about --body instead of waiting
    env.cmd()
        .args(["request", "POST", "/lol-lobby/v2/lobby", "--body", "{\"queueId\": "])
        .assert()
        .failure()
        .stderr(contains("--body is not valid JSON"));
}

#[test]
fn given_broken_config_when_run_then_fails_with_parse_error() {
    let env = TestEnv::new();
    std::fs::write(&env.config, "[client\n").unwrap();

    env.cmd()
        .arg("credentials")
        .assert()
        .failure()
        .stderr(contains("Config Parse Error"));
}

#[test]
fn given_conflicting_listen_filters_when_run_then_usage_error() {
    let env = TestEnv::new();

    env.cmd()
        .args(["listen", "--path", "/a", "--name", "OnJsonApiEvent_a"])
        .assert()
        .code(2)
        .stderr(contains("cannot be used with"));
}
