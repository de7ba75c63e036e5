use crate::domain::ports::StatusSource;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;

/// Plain GET with the default client: no extra headers, no explicit timeout.
pub struct HttpStatusSource {
    endpoint: String,
    client: Client,
}

impl HttpStatusSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        tracing::debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Request(Box::new(e)))?;

        // 狀態碼只記錄，不檢查
        tracing::debug!("Status response: {}", response.status());

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Read(Box::new(e)))?;

        Ok(body.to_vec())
    }
}
