//! `hasagi request <method> <path>`

use crate::cli::RequestArgs;
use crate::error::HasagiError;
use crate::output::{OutputTarget, now_millis, print_line, request_file_name, write_pretty_json};
use crate::readiness::wait_for_client;

use common::to_pretty_json;
use lcu_client::HasagiConfig;
use models::RequestResult;

use log::info;
use serde_json::Value;

/// Parse a JSON option, naming the flag on failure.
pub fn parse_json_option(flag: &str, raw: Option<&str>) -> Result<Option<Value>, HasagiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    serde_json::from_str(raw)
        .map(Some)
        .map_err(|e| HasagiError::usage(format!("{flag} is not valid JSON: {e}")))
}

/// Like [`parse_json_option`], additionally requiring an object.
pub fn parse_query_option(raw: Option<&str>) -> Result<Option<Value>, HasagiError> {
    match parse_json_option("--query", raw)? {
        Some(query) if !query.is_object() => Err(HasagiError::usage(
            "--query must be a JSON object, e.g. '{\"key\": \"value\"}'",
        )),
        query => Ok(query),
    }
}

/// Human-readable result for stdout.
pub fn render(result: &RequestResult) -> Result<String, HasagiError> {
    let text = match result {
        RequestResult::Success(success) => format!(
            "Status: {}\n{}",
            success.status_code,
            to_pretty_json(&success.body)?
        ),
        RequestResult::ProtocolError(error) => {
            let mut text = format!(
                "Status: {}\nError: {}\nMessage: {}",
                error.status_code, error.error_code, error.message
            );
            if let Some(ref details) = error.details {
                text.push_str(&format!("\nDetails: {}", to_pretty_json(details)?));
            }
            text
        }
        RequestResult::TransportError(error) => format!(
            "Error: {}\nMessage: {}",
            error.error_code_or_default(),
            error.message_or_default()
        ),
    };

    Ok(text)
}

pub async fn run(args: RequestArgs, config: &HasagiConfig) -> Result<(), HasagiError> {
    // Bad JSON is reported before waiting for a client that may never come.
    let body = parse_json_option("--body", args.body.as_deref())?;
    let query = parse_query_option(args.query.as_deref())?;
    let target = OutputTarget::resolve(args.out.as_deref());

    let client = wait_for_client(&config.client).await?;
    let result = client
        .request(args.method, &args.path, query.as_ref(), body.as_ref())
        .await;

    print_line(&render(&result)?)?;

    if let Some(target) = target {
        let file_name = request_file_name(args.method, &args.path, now_millis());
        let path = target.file_path(&file_name);
        write_pretty_json(&path, &result).await?;
        info!("Result written to {}", path.display());
    }

    Ok(())
}
