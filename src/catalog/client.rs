use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{debug, errors::FetchError, warning};

/// Thin GET-only wrapper around a shared `reqwest` client.
///
/// Every request carries the configured timeout. Transport failures, non-2xx
/// statuses, undecodable bodies and in-band API errors all come back as a
/// [`FetchError`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for `base_url`; a trailing slash is ignored.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root of the catalog API, e.g. `https://api.deezer.com`
    /// * `timeout` - Applied to every single request
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ConnectionFailed`] if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Builds an absolute URL for a path relative to the API base.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issues a GET to an absolute URL and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] matching the failure: timeout, transport,
    /// non-2xx status, undecodable body or in-band API error.
    pub async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let result = self.send(url, params).await;
        match &result {
            Ok(_) => debug!("GET {} {:?} ok", url, params),
            Err(e) => warning!("GET {} failed: {}", url, e),
        }
        result
    }

    /// Issues a GET to a path relative to the API base.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::get`].
    pub async fn get_path(&self, path: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        self.get(&self.url(path), params).await
    }

    async fn send(&self, url: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let json: Value = serde_json::from_slice(&body)?;

        // Deezer answers some failures (unknown ids, quota) with 200 and an error object.
        if let Some(err) = json.get("error").filter(|e| e.is_object()) {
            return Err(FetchError::Api {
                code: err.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        Ok(json)
    }
}
