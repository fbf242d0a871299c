use daily_eval_trigger::utils::{logger, validation::Validate};
use daily_eval_trigger::{HttpEvaluationService, LambdaConfig, ResponseEnvelope, TriggerHandler};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    handler: &TriggerHandler<HttpEvaluationService>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ResponseEnvelope, Error> {
    // neither the scheduled event nor the context influences the request
    tracing::info!(request_id = %event.context.request_id, "Trigger invoked");

    let envelope = handler.run().await;

    tracing::info!(status_code = envelope.status_code, "Trigger finished");
    Ok(envelope)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let service = HttpEvaluationService::new(&config)?;
    tracing::info!("Evaluation endpoint: {}", service.endpoint());
    let handler = TriggerHandler::new(service);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
