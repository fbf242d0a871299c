use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const REQUEST_DATE_FORMAT: &str = "%Y-%m-%d";

pub const SUCCESS_MESSAGE: &str = "Received a response from the evaluation service";
pub const REQUEST_ERROR_MESSAGE: &str = "A request error occurred";

/// Body posted to the evaluation service. The flags are fixed: the scheduled
/// run never uses debug mode and always publishes to WordPress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub date: String,
    pub debug_mode: bool,
    pub post_to_word_press: bool,
}

impl EvaluationRequest {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: format_request_date(date),
            debug_mode: false,
            post_to_word_press: true,
        }
    }
}

pub fn format_request_date(date: NaiveDate) -> String {
    date.format(REQUEST_DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What the invoker gets back. `body` is a JSON-encoded [`ResponseBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn success(data: serde_json::Value) -> Self {
        Self::with_body(
            200,
            ResponseBody {
                message: SUCCESS_MESSAGE.to_string(),
                data: Some(data),
                error: None,
            },
        )
    }

    /// A timeout is reported as 200: a slow evaluation run is not a failure.
    pub fn timeout(window: Duration) -> Self {
        Self::with_body(
            200,
            ResponseBody {
                message: timeout_message(window),
                data: None,
                error: None,
            },
        )
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::with_body(
            500,
            ResponseBody {
                message: REQUEST_ERROR_MESSAGE.to_string(),
                data: None,
                error: Some(error.into()),
            },
        )
    }

    fn with_body(status_code: u16, body: ResponseBody) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("message".to_string(), serde_json::Value::String(body.message));
        if let Some(data) = body.data {
            fields.insert("data".to_string(), data);
        }
        if let Some(error) = body.error {
            fields.insert("error".to_string(), serde_json::Value::String(error));
        }

        Self {
            status_code,
            body: serde_json::Value::Object(fields).to_string(),
        }
    }

    pub fn parsed_body(&self) -> serde_json::Result<ResponseBody> {
        serde_json::from_str(&self.body)
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

pub fn timeout_message(window: Duration) -> String {
    format!(
        "No response within {} seconds; finished without waiting (treated as OK)",
        window.as_secs()
    )
}

/// Logging view over the evaluation service's reply. The reply itself is
/// handed back to the caller untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    pub success: Option<bool>,
    pub date: Option<String>,
    pub total_papers: Option<u64>,
    pub word_press_posted: Option<bool>,
    pub error: Option<String>,
}

impl EvaluationSummary {
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}
