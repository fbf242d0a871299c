use clap::Parser;
use daily_eval_trigger::utils::{logger, validation::Validate};
use daily_eval_trigger::{CliConfig, HttpEvaluationService, TriggerHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // logs go to stderr, the envelope to stdout
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting daily-eval-trigger");
    tracing::debug!("CLI config: {:?}", config);

    // reject bad settings before any request is sent
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        let exit_code = if e.is_config_error() { 2 } else { 1 };
        std::process::exit(exit_code);
    }

    let service = HttpEvaluationService::new(&config)?;
    let handler = TriggerHandler::new(service);

    // --date backfills a specific day; otherwise yesterday (UTC)
    let envelope = match config.date {
        Some(date) => handler.run_for_date(date).await,
        None => handler.run().await,
    };

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    // a benign timeout is still 200
    if !envelope.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
