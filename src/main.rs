use clap::Parser;
use fetch_lab::utils::{logger, validation::Validate};
use fetch_lab::{CliConfig, JsonFetcher, JsonWidget};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fetch-lab demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = match config.latency() {
        Some(delay) => {
            tracing::info!("Adding artificial latency of {:?}", delay);
            JsonFetcher::new_with_latency(delay)
        }
        None => JsonFetcher::new(),
    };

    let mut widget = JsonWidget::new(fetcher, config.endpoint.clone());
    println!("before mount: {}", widget.text());

    widget.mount().await;
    widget.update();
    println!("after mount:  {}", widget.text());

    Ok(())
}
