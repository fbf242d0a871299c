pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::lambda::LambdaConfig;
pub use config::DEFAULT_API_ENDPOINT;

pub use core::{evaluation_client::HttpEvaluationService, trigger::TriggerHandler};
pub use domain::model::{EvaluationRequest, ResponseBody, ResponseEnvelope};
pub use utils::error::{Result, TriggerError};
