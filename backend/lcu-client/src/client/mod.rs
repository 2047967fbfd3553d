//! HTTP access to the LCU REST API.

pub mod query;

use crate::error::lcu_client::LcuClientError;
use crate::error::ws::WsError;
use crate::ws::{self, EventStream};

use common::{ErrorLocation, HttpStatusCode};
use models::{
    EventSubscription, HttpMethod, LcuCredentials, ProtocolError, RequestResult, Success,
};

use std::panic::Location;
use std::time::Duration;

use log::{debug, trace};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const READINESS_PROBE_ENDPOINT: &str = "/riotclient/region-locale";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Handle to one running LCU instance.
#[derive(Clone)]
pub struct LcuClient {
    credentials: LcuCredentials,
    base_url: Url,
    client: Client,
}

impl LcuClient {
    /// Build a client for `credentials`.
    ///
    /// The LCU serves a certificate signed by Riot's own root, so certificate
    /// verification is disabled. Only loopback addresses are ever contacted.
    pub fn new(credentials: LcuCredentials, timeout: Duration) -> Result<Self, LcuClientError> {
        let base_url = Url::parse(&credentials.base_url())?;

        let mut authorization = HeaderValue::from_str(&credentials.basic_auth())?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            credentials,
            base_url,
            client,
        })
    }

    pub fn credentials(&self) -> &LcuCredentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the LCU root.
    ///
    /// Leading slashes and backslashes are collapsed first, so `//host/x` and
    /// `http://host/x` stay paths on the LCU instead of naming another server.
    #[track_caller]
    pub(crate) fn endpoint(&self, path: &str, query: Option<&Value>) -> Result<Url, LcuClientError> {
        let relative = format!("/{}", path.trim_start_matches(['/', '\\']));
        let mut url = self.base_url.join(&relative)?;

        if url.origin() != self.base_url.origin() {
            return Err(LcuClientError::Url {
                message: format!("{path} does not resolve to the League client"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(query) = query {
            let pairs = query::query_pairs(query)?;
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        Ok(url)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<(HttpStatusCode, String), LcuClientError> {
        let url = self.endpoint(path, query)?;
        trace!("{method} {url}");

        let mut request = self.client.request(to_reqwest_method(method), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let text = response.text().await?;

        debug!("{method} {path} -> {status}");
        Ok((status, text))
    }

    /// Issue one request and classify the outcome.
    ///
    /// Never fails: transport problems become [`RequestResult::TransportError`],
    /// non-2xx responses become [`RequestResult::ProtocolError`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> RequestResult {
        match self.send(method, path, query, body).await {
            Ok((status, text)) if status.is_success() => {
                RequestResult::Success(Success::new(status, &text))
            }
            Ok((status, text)) => {
                RequestResult::ProtocolError(ProtocolError::from_response(status, &text))
            }
            Err(e) => {
                debug!("{method} {path} failed: {e}");
                RequestResult::TransportError(e.into_transport_error())
            }
        }
    }

    /// GET `path` and parse the body as JSON, treating non-2xx as an error.
    pub async fn get_json(&self, path: &str, query: Option<&Value>) -> Result<Value, LcuClientError> {
        let (status, text) = self.send(HttpMethod::Get, path, query, None).await?;

        if !status.is_success() {
            let error = ProtocolError::from_response(status, &text);
            return Err(LcuClientError::Server {
                status,
                message: format!("{}: {}", error.error_code, error.message),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Check that the LCU answers HTTP at all. Any status counts: plugins
    /// return 404 while they are still loading, but the server is up.
    pub async fn probe(&self) -> Result<HttpStatusCode, LcuClientError> {
        let (status, _) = self
            .send(HttpMethod::Get, READINESS_PROBE_ENDPOINT, None, None)
            .await?;
        Ok(status)
    }

    /// Open a websocket subscription. See [`crate::ws::subscribe`].
    pub async fn subscribe(&self, subscription: EventSubscription) -> Result<EventStream, WsError> {
        ws::subscribe(&self.credentials, subscription).await
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}
