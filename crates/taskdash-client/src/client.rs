use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use taskdash_core::{AppConfig, TaskdashError, TaskdashResult};

/// JSON client for the task backend.
///
/// One instance serves every resource; it is cheap to clone and holds no
/// cached data, so every call reflects the server's current state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> TaskdashResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TaskdashError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_config(config: &AppConfig) -> TaskdashResult<Self> {
        Self::new(
            config.effective_api_url(),
            Duration::from_secs(config.effective_request_timeout_secs()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TaskdashResult<T> {
        let response = send(self.request(Method::GET, path), path).await?;
        read_json(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> TaskdashResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = send(self.request(method, path).json(body), path).await?;
        read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> TaskdashResult<()> {
        send(self.request(Method::DELETE, path), path).await?;
        Ok(())
    }
}

/// Sends a request and turns transport failures and non-2xx answers into
/// errors. The response body of a failed call is kept for the message.
pub(crate) async fn send(request: RequestBuilder, path: &str) -> TaskdashResult<Response> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("Request to {} failed: {}", path, e);
        TaskdashError::Connection(e.to_string())
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!("{} returned {}: {}", path, status, body);
    if status == StatusCode::NOT_FOUND {
        return Err(TaskdashError::NotFound(path.to_string()));
    }
    Err(TaskdashError::Http {
        status: status.as_u16(),
        body,
    })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> TaskdashResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| TaskdashError::Connection(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!("Unexpected response body: {}", e);
        TaskdashError::Serialization(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::with_client(reqwest::Client::new(), "http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/tasks"), "http://localhost:8080/api/tasks");
    }

    #[test]
    fn test_from_config_uses_effective_url() {
        let config = AppConfig {
            api_url: Some("http://example.test/api".to_string()),
            ..Default::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://example.test/api");
    }
}
