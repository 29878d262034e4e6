//! HTTP client for the CollegeFootballData API

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::{CfbdError, Config, Result};

#[cfg(test)]
mod tests;

/// Base URL of the CollegeFootballData API.
pub const CFBD_BASE_URL: &str = "https://api.collegefootballdata.com";

/// Headers sent with every request: `Accept: application/json`, plus a bearer
/// token when one is configured.
pub fn build_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key))?;
        value.set_sensitive(true);
        h.insert(AUTHORIZATION, value);
    }
    Ok(h)
}

/// Authenticated GET access to the API. One request per call; no caching and
/// no retry.
#[derive(Debug, Clone)]
pub struct CfbdClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl CfbdClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("cfb-data/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers: build_headers(config.api_key.as_deref())?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `base_url + path` with the given query parameters and decode the
    /// JSON body.
    ///
    /// Any non-2xx status becomes [`CfbdError::Status`] carrying the status
    /// code and the response body.
    pub async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "GET");

        let res = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = error_body(res.text().await);
            return Err(CfbdError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<Value>().await?)
    }
}

/// Body text of an error response; a failed read is marked rather than dropped.
fn error_body(text: reqwest::Result<String>) -> String {
    text.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
