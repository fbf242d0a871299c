pub mod evaluation_client;
pub mod trigger;

pub use crate::domain::model::{
    EvaluationRequest, EvaluationSummary, ResponseBody, ResponseEnvelope,
};
pub use crate::domain::ports::{ConfigProvider, EvaluationService};
pub use crate::utils::error::Result;
