use clap::Parser;
use portfolio_api::adapters::server;
use portfolio_api::utils::{logger, validation::Validate};
use portfolio_api::{Catalog, PortfolioApi, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    logger::init_server_logger(config.verbose);

    tracing::info!("Starting portfolio-api server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = Catalog::new();
    if let Err(e) = catalog.validate() {
        tracing::error!("❌ Catalog validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let api = PortfolioApi::new(catalog);

    if let Err(e) = server::serve(api, config).await {
        tracing::error!("❌ Server terminated with error: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
