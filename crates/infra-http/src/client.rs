// Workbooks HTTP Client (CrmClient adapter)

use crate::config::WorkbooksConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;
use workbooks_core::port::{ClientError, CrmClient, Params};

/// reqwest-backed implementation of the CRM client port.
///
/// Authentication is an `api_key` query parameter on every request;
/// timeouts are enforced here so the core never has to.
pub struct WorkbooksHttpClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl WorkbooksHttpClient {
    pub fn new(config: WorkbooksConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Connection(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl CrmClient for WorkbooksHttpClient {
    async fn get(&self, path: &str, params: &Params) -> Result<Value, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::Connection(format!("invalid request path `{path}`: {e}")))?;

        tracing::debug!(url = %url, "GET");

        let mut request = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.as_str())]);
        for (key, value) in params {
            request = request.query(&[(key.as_str(), query_value(value))]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Auth(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Body(e.to_string()))
    }
}

/// Render a JSON parameter value as a query string value.
/// Strings go through bare; everything else keeps its JSON form.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
