//! HTTP client for the backend service.
//!
//! Each call is a single round trip with no retry. Backend JSON bodies are
//! relayed untouched as [`serde_json::Value`].

use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{ToolError, ToolResult};

/// Client for the backend's template and case endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// The URL must be absolute and able to carry path segments
    /// (`http://` or `https://`).
    pub fn new(base_url: &str) -> Result<Self, String> {
        let base_url =
            Url::parse(base_url).map_err(|e| format!("invalid backend URL '{}': {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(format!("backend URL '{}' cannot be a base", base_url));
        }
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    /// Backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of `segments` under the base URL, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch a template by id from `GET /templates/{id}`.
    #[instrument(skip(self))]
    pub async fn get_template(&self, template_id: &str) -> ToolResult<Value> {
        let url = self.endpoint(&["templates", template_id]);
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        Self::relay(response).await
    }

    /// Forward a case payload to `POST /cases`.
    #[instrument(skip_all)]
    pub async fn save_case(&self, payload: &Value) -> ToolResult<Value> {
        let url = self.endpoint(&["cases"]);
        debug!("POST {}", url);
        let response = self.http.post(url).json(payload).send().await?;
        Self::relay(response).await
    }

    async fn relay(response: Response) -> ToolResult<Value> {
        let status = response.status();
        if !status.is_success() {
            warn!("Backend responded with {}", status);
            return Err(ToolError::upstream(status));
        }
        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        assert!(BackendClient::new("not a url").is_err());
        assert!(BackendClient::new("mailto:ops@example.com").is_err());
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = BackendClient::new("https://backend.test").unwrap();
        assert_eq!(
            client.endpoint(&["templates", "TIMELY_FILING"]).as_str(),
            "https://backend.test/templates/TIMELY_FILING"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = BackendClient::new("https://backend.test/api/").unwrap();
        assert_eq!(
            client.endpoint(&["cases"]).as_str(),
            "https://backend.test/api/cases"
        );
    }

    #[test]
    fn test_endpoint_encodes_template_id() {
        let client = BackendClient::new("http://localhost:8080").unwrap();
        let url = client.endpoint(&["templates", "a/b c?d"]);
        assert_eq!(url.as_str(), "http://localhost:8080/templates/a%2Fb%20c%3Fd");
    }
}
