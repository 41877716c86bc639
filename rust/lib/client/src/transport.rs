//! Shared HTTP transport.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::path::to_kebab_case;

/// Per-call options sent alongside the params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    /// Set for actions that accept file payloads.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub file_upload: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestOptions {
    pub fn file_upload() -> Self {
        Self { file_upload: true, ..Default::default() }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Serialize)]
struct RequestBody<'a, P: ?Sized> {
    params: &'a P,
    options: &'a RequestOptions,
}

/// The single transport all resource clients delegate to.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, default headers, ...).
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{resource}/{action}`, both kebab-cased.
    pub fn endpoint(&self, resource: &str, action: &str) -> String {
        format!("{}/{}/{}", self.base_url, to_kebab_case(resource), to_kebab_case(action))
    }

    /// Invoke `action` on `resource`.
    pub async fn call<P, R>(
        &self,
        resource: &str,
        action: &str,
        params: &P,
        options: &RequestOptions,
    ) -> Result<R, ApiError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(resource, action);
        debug!(%url, file_upload = options.file_upload, "api call");

        let resp = self
            .http
            .post(&url)
            .json(&RequestBody { params, options })
            .send()
            .await?;
        Self::parse(resp).await
    }

    /// Parse an API response, mapping HTTP errors to `ApiError`.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server { status: code, message: error_message(&body) });
        }
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
