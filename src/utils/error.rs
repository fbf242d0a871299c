use std::error::Error as _;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date calculation error: {message}")]
    DateError { message: String },
}

impl TriggerError {
    /// Connect and read timeouts both count; the caller treats them as benign.
    pub fn is_timeout(&self) -> bool {
        match self {
            TriggerError::ApiError(e) => e.is_timeout(),
            _ => false,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, TriggerError::InvalidConfigValueError { .. })
    }

    /// Renders the error together with its `source()` chain, so a refused
    /// connection shows the OS-level cause and not only reqwest's summary.
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, TriggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_classified() {
        let err = TriggerError::InvalidConfigValueError {
            field: "api_endpoint".to_string(),
            value: String::new(),
            reason: "URL cannot be empty".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_timeout());

        let err = TriggerError::DateError {
            message: "out of range".to_string(),
        };
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_detailed_message_includes_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = TriggerError::from(json_err);
        let message = err.detailed_message();
        assert!(message.starts_with("Serialization error:"));
    }
}
