//! `hasagi credentials`

use crate::error::HasagiError;
use crate::output::print_line;
use crate::readiness::wait_for_client;

use common::to_pretty_json;
use lcu_client::HasagiConfig;
use models::LcuCredentials;

use serde::Serialize;

/// What `credentials` prints. Contains the secret on purpose: this is the
/// command that hands it to other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsOutput {
    pub base_url: String,
    pub authorization: String,
}

impl From<&LcuCredentials> for CredentialsOutput {
    fn from(credentials: &LcuCredentials) -> Self {
        Self {
            base_url: credentials.base_url(),
            authorization: credentials.basic_auth(),
        }
    }
}

pub async fn run(config: &HasagiConfig) -> Result<(), HasagiError> {
    let client = wait_for_client(&config.client).await?;
    let output = CredentialsOutput::from(client.credentials());

    print_line(&to_pretty_json(&output)?)
}
