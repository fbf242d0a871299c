use crate::core::{EvaluationRequest, EvaluationService, EvaluationSummary, ResponseEnvelope};
use crate::utils::error::{Result, TriggerError};
use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date (UTC) of the day before `now`.
pub fn previous_utc_date(now: DateTime<Utc>) -> Result<NaiveDate> {
    now.date_naive()
        .pred_opt()
        .ok_or_else(|| TriggerError::DateError {
            message: format!("no calendar day precedes {}", now.date_naive()),
        })
}

pub struct TriggerHandler<S: EvaluationService> {
    service: S,
}

impl<S: EvaluationService> TriggerHandler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn run(&self) -> ResponseEnvelope {
        self.run_at(Utc::now()).await
    }

    pub async fn run_at(&self, now: DateTime<Utc>) -> ResponseEnvelope {
        match previous_utc_date(now) {
            Ok(date) => self.run_for_date(date).await,
            Err(e) => {
                tracing::error!("❌ Could not compute the evaluation date: {}", e);
                ResponseEnvelope::failure(e.detailed_message())
            }
        }
    }

    /// One attempt, no retry. Every outcome is folded into the envelope.
    pub async fn run_for_date(&self, date: NaiveDate) -> ResponseEnvelope {
        let request = EvaluationRequest::for_date(date);
        tracing::info!("Triggering paper evaluation for {}", request.date);

        match self.service.evaluate(&request).await {
            Ok(data) => {
                let summary = EvaluationSummary::from_value(&data);
                if summary.success == Some(false) {
                    tracing::warn!(
                        "Evaluation service reported failure for {}: {}",
                        request.date,
                        summary.error.as_deref().unwrap_or("no detail")
                    );
                } else {
                    tracing::info!(
                        "✅ Evaluation service responded (papers: {:?}, posted to WordPress: {:?})",
                        summary.total_papers,
                        summary.word_press_posted
                    );
                }
                ResponseEnvelope::success(data)
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!(
                    "No response within {:?}; treating the trigger as delivered",
                    self.service.timeout()
                );
                ResponseEnvelope::timeout(self.service.timeout())
            }
            Err(e) => {
                let detail = e.detailed_message();
                tracing::error!("❌ Evaluation request failed: {}", detail);
                ResponseEnvelope::failure(detail)
            }
        }
    }
}
