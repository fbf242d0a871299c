use crate::domain::model::EvaluationRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
}

#[async_trait]
pub trait EvaluationService: Send + Sync {
    /// Sends one request and returns the parsed JSON reply. Non-2xx statuses
    /// and undecodable bodies are errors.
    async fn evaluate(&self, request: &EvaluationRequest) -> Result<serde_json::Value>;

    /// How long `evaluate` waits before giving up.
    fn timeout(&self) -> Duration;
}
