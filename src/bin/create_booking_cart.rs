use parkhooks::core::config::AppConfig;
use parkhooks::handlers::create_booking_cart::function_handler;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    parkhooks::setup_logging();
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    let http = reqwest::Client::new();

    let (http, config) = (&http, &config);
    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        function_handler(http, config, event).await
    }))
    .await
}
