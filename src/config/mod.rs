pub mod lambda;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3000/api/evaluate-with-articles";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 900;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::{DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_range, validate_url, Validate};
    use chrono::NaiveDate;
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "daily-eval-trigger")]
    #[command(about = "Trigger the daily paper evaluation run for yesterday (UTC)")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
        pub api_endpoint: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long, help = "Evaluate this day (YYYY-MM-DD) instead of yesterday")]
        pub date: Option<NaiveDate>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_seconds)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("api_endpoint", &self.api_endpoint)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["daily-eval-trigger"]);
            assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
            assert_eq!(config.timeout(), Duration::from_secs(10));
            assert!(config.date.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_date_override_and_validation() {
            let config = CliConfig::parse_from([
                "daily-eval-trigger",
                "--date",
                "2024-03-08",
                "--timeout-seconds",
                "0",
            ]);
            assert_eq!(config.date, NaiveDate::from_ymd_opt(2024, 3, 8));
            assert!(config.validate().is_err());

            assert!(CliConfig::try_parse_from(["daily-eval-trigger", "--date", "08/03/2024"]).is_err());
        }
    }
}
