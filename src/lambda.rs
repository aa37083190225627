#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use portfolio_api::adapters::function::{handle_event, FunctionEvent, FunctionResponse};
#[cfg(feature = "lambda")]
use portfolio_api::utils::logger;
#[cfg(feature = "lambda")]
use portfolio_api::{Catalog, FunctionConfig, PortfolioApi};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<FunctionEvent>) -> Result<FunctionResponse, Error> {
    let config = FunctionConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::debug!(
        endpoint = ?config.endpoint,
        method = %event.payload.http_method,
        "Handling function invocation"
    );

    let api = PortfolioApi::new(Catalog::new());
    Ok(handle_event(&api, config.endpoint, &event.payload))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
