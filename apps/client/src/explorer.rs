//! GET-only API explorer: the documentation catalog plus raw endpoint
//! probes, rendered as pretty-printed JSON by the UI.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ClientError;

/// One documented endpoint, as served by `/api/docs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDoc {
    pub method: String,
    pub path: String,
    pub description: String,
}

pub struct Explorer {
    http: reqwest::Client,
    base_url: String,
}

impl Explorer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches the endpoint catalog the documentation pane renders.
    pub async fn docs(&self) -> Result<Vec<ApiDoc>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/docs", self.base_url))
            .send()
            .await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Performs a GET probe of an arbitrary endpoint and returns the raw
    /// JSON payload. Non-JSON or failed responses surface as errors the
    /// UI shows in place of the payload.
    pub async fn probe(&self, endpoint: &str) -> Result<Value, ClientError> {
        let response = self.http.get(endpoint).send().await?;
        Ok(response.json().await?)
    }
}
