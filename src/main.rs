use add_compress_methods::utils::{logger, validation::Validate};
use add_compress_methods::{CliConfig, HeaderPipeline, LocalStorage, RewriteEngine};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("add-compress-methods: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::from_config(&config);
    let engine = RewriteEngine::new(HeaderPipeline::new(storage));

    if let Err(e) = engine.run().await {
        tracing::error!("Header rewrite failed: {}", e);
        eprintln!("add-compress-methods: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
