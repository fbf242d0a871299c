use super::{DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TriggerError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_endpoint: String,
    pub timeout_seconds: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| TriggerError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "must be a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_endpoint: lookup("API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            timeout_seconds,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LambdaConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            ("API_ENDPOINT", "http://10.0.1.20:3000/api/evaluate-with-articles"),
            ("REQUEST_TIMEOUT_SECONDS", "25"),
        ]))
        .unwrap();
        assert_eq!(
            config.api_endpoint(),
            "http://10.0.1.20:3000/api/evaluate-with-articles"
        );
        assert_eq!(config.timeout_seconds, 25);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let err = LambdaConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECONDS", "ten")]))
            .unwrap_err();
        assert!(err.is_config_error());

        let config = LambdaConfig::from_lookup(lookup_from(&[("API_ENDPOINT", "not a url")])).unwrap();
        assert!(config.validate().is_err());
    }
}
