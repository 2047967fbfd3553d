use crate::error::HasagiError;
use crate::output::{
    EventSink, OutputTarget, request_file_name, target_path, write_line, write_pretty_json,
};

use models::HttpMethod;

use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

use serde_json::json;
use tempfile::tempdir;

#[test]
fn given_no_option_when_resolving_then_no_output() {
    assert_eq!(OutputTarget::resolve(None), None);
    assert_eq!(target_path(None), None);
}

/// **VALUE**: An empty `--out` means the current directory.
#[test]
fn given_empty_option_when_resolving_then_current_directory() {
    assert_eq!(
        OutputTarget::resolve(Some("")),
        Some(OutputTarget::Directory(PathBuf::from(".")))
    );
    assert_eq!(target_path(Some("")), Some(PathBuf::from(".")));
}

#[test]
fn given_existing_directory_when_resolving_then_directory_target() {
    let dir = tempdir().unwrap();
    let option = dir.path().to_string_lossy().into_owned();

    let target = OutputTarget::resolve(Some(&option)).unwrap();

    assert_eq!(target, OutputTarget::Directory(dir.path().to_path_buf()));
    assert_eq!(target.file_path("x.json"), dir.path().join("x.json"));
}

/// **VALUE**: A path that does not exist is used verbatim as a file.
///
/// **BUG THIS CATCHES**: Would catch directory-derivation logic being applied to missing
/// paths, which would write to an unexpected file name.
#[test]
fn given_missing_path_when_resolving_then_literal_file_target() {
    // GIVEN: A path that does not exist
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("result.json");
    let option = path.to_string_lossy().into_owned();

    // WHEN: Resolving
    let target = OutputTarget::resolve(Some(&option)).unwrap();

    // THEN: The exact path, whatever file name is offered
    assert_eq!(target, OutputTarget::File(path.clone()));
    assert_eq!(target.file_path("ignored.json"), path);
}

#[test]
fn given_method_and_path_when_naming_request_file_then_slashes_become_underscores() {
    let name = request_file_name(
        HttpMethod::Get,
        "/lol-summoner/v1/current-summoner",
        1_700_000_000_123,
    );

    assert_eq!(name, "GET-_lol-summoner_v1_current-summoner-1700000000123.json");
}

#[tokio::test]
async fn given_value_when_written_then_four_space_pretty_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.json");

    write_pretty_json(&path, &json!({ "statusCode": 200 })).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{\n    \"statusCode\": 200\n}");
}

/// **VALUE**: Verifies the event file format: each blob followed by exactly one newline,
/// appended after whatever the file already holds.
///
/// **WHY THIS MATTERS**: `listen -o` files are consumed by scripts splitting on blobs.
/// Overwriting on start or missing newlines corrupts them.
#[tokio::test]
async fn given_existing_file_when_appending_events_then_blobs_follow_existing_content() {
    // GIVEN: A file with earlier output
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, "{}\n").unwrap();

    // WHEN: Appending two blobs
    let mut sink = EventSink::open(path.clone()).await.unwrap();
    sink.append("{\n    \"a\": 1\n}").await.unwrap();
    sink.append("{\n    \"b\": 2\n}").await.unwrap();

    // THEN: Existing content kept, blobs in order, one newline each
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{}\n{\n    \"a\": 1\n}\n{\n    \"b\": 2\n}\n");
}

#[tokio::test]
async fn given_unwritable_path_when_opening_sink_then_output_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("events.json");

    let result = EventSink::open(path).await;

    assert!(matches!(
        result,
        Err(crate::error::HasagiError::Output { .. })
    ));
}

/// Stdout whose reader has gone away, like `hasagi listen | head` after `head` exits.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// **VALUE**: A closed stdout pipe is reported as an error instead of panicking.
///
/// **WHY THIS MATTERS**: `listen` output is routinely piped into `head` or `jq`. A panic
/// there prints a backtrace hint instead of a clean error and exit code.
///
/// **BUG THIS CATCHES**: Would catch output going back through `println!`.
#[test]
fn given_closed_pipe_when_writing_line_then_stdout_error() {
    // GIVEN: A writer failing like a closed pipe
    let mut pipe = ClosedPipe;

    // WHEN: Writing a line
    let result = write_line(&mut pipe, "{}");

    // THEN: A Stdout error carrying the io error
    match result {
        Err(HasagiError::Stdout { source, .. }) => {
            assert_eq!(source.kind(), ErrorKind::BrokenPipe);
        }
        other => panic!("Expected Stdout error, got {other:?}"),
    }
}

#[test]
fn given_open_writer_when_writing_line_then_text_and_newline() {
    let mut buffer = Vec::new();

    write_line(&mut buffer, "Status: 200").unwrap();

    assert_eq!(buffer, b"Status: 200\n");
}
