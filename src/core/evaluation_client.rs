use crate::core::{ConfigProvider, EvaluationRequest, EvaluationService};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed client for the `evaluate-with-articles` endpoint.
pub struct HttpEvaluationService {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpEvaluationService {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let timeout = config.timeout();
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl EvaluationService for HttpEvaluationService {
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<serde_json::Value> {
        tracing::debug!(
            "Posting evaluation request to {} for {}",
            self.endpoint,
            request.date
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        tracing::debug!("Evaluation service response status: {}", response.status());

        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        let data: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(data)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
