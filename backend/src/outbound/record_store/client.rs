//! Reqwest-backed PostgREST client.
//!
//! This adapter owns transport details only: URL and header construction,
//! timeout and HTTP error mapping, and JSON decoding of rows.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use super::query::QueryPairs;
use crate::domain::ports::RecordStoreError;

const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Errors raised while constructing a [`RecordStoreClient`].
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreClientError {
    #[error("record store URL is invalid: {0}")]
    Url(#[from] url::ParseError),
    #[error("record store URL must use http or https, got `{0}`")]
    Scheme(String),
    #[error("record store key is not a valid header value")]
    Key(#[from] InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP client bound to one PostgREST endpoint and credential.
#[derive(Clone)]
pub struct RecordStoreClient {
    client: Client,
    rest_base: Url,
}

impl fmt::Debug for RecordStoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStoreClient")
            .field("rest_base", &self.rest_base.as_str())
            .field("key", &"<redacted>")
            .finish()
    }
}

impl RecordStoreClient {
    /// Build a client for `base_url` authenticating with `key`.
    ///
    /// The key is sent both as `apikey` and as a bearer token; it is only
    /// held inside the client's default headers, marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is unusable, the key cannot be encoded
    /// as a header, or the reqwest client cannot be constructed.
    pub fn new(
        base_url: &str,
        key: Zeroizing<String>,
        timeout: Duration,
    ) -> Result<Self, RecordStoreClientError> {
        let mut base = Url::parse(base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(RecordStoreClientError::Scheme(base.scheme().to_owned()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rest_base = base.join("rest/v1/")?;

        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(key.as_str())?;
        api_key.set_sensitive(true);
        let bearer = Zeroizing::new(format!("Bearer {}", key.as_str()));
        let mut authorization = HeaderValue::from_str(bearer.as_str())?;
        authorization.set_sensitive(true);
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, rest_base })
    }

    pub(super) fn table_url(&self, table: &str) -> Result<Url, RecordStoreError> {
        self.rest_base
            .join(table)
            .map_err(|error| RecordStoreError::connection(format!("invalid table URL: {error}")))
    }

    /// `GET /rest/v1/{table}?{query}` returning every matching row.
    pub(super) async fn select<T>(
        &self,
        table: &str,
        query: &QueryPairs,
    ) -> Result<Vec<T>, RecordStoreError>
    where
        T: DeserializeOwned,
    {
        let request = self.client.get(self.table_url(table)?).query(query);
        debug!(table, "selecting rows");
        let body = send(request).await?;
        decode(&body)
    }

    /// `POST /rest/v1/{table}` inserting one row and returning it.
    pub(super) async fn insert_one<B, T>(&self, table: &str, row: &B) -> Result<T, RecordStoreError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .client
            .post(self.table_url(table)?)
            .query(&[("select", "*")])
            .header("Prefer", RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT_MEDIA_TYPE)
            .json(row);
        debug!(table, "inserting row");
        let body = send(request).await?;
        decode(&body)
    }
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, RecordStoreError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, RecordStoreError> {
    serde_json::from_slice(body)
        .map_err(|error| RecordStoreError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> RecordStoreError {
    if error.is_timeout() {
        RecordStoreError::timeout(error.to_string())
    } else if error.is_decode() {
        RecordStoreError::decode(error.to_string())
    } else {
        RecordStoreError::connection(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecordStoreError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RecordStoreError::timeout(message)
        }
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
            RecordStoreError::connection(message)
        }
        _ => RecordStoreError::rejected(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
