use config::Config;
use event_handler::function_handler;
use lambda_runtime::{run, service_fn, tracing, Error};

mod config;
mod event_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = Config::load()?;
    tracing::info!(
        function_name = %config.function_name,
        function_version = %config.function_version,
        "Starting SQS message handler"
    );

    run(service_fn(function_handler)).await
}
