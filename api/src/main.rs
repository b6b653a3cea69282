use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use kyc_api::{bootstrap, config::init_tracing, create_app};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env before anything else looks at the environment
    let config = kyc_infra::load_config();

    init_tracing(&config.logging).context("Failed to initialize logging")?;

    info!(
        environment = ?config.environment,
        storage = %config.storage,
        redis = config.cache.is_enabled(),
        "Starting KYC onboarding API"
    );

    let backends = bootstrap::build(&config)
        .await
        .context("Failed to initialize storage backends")?;
    let sweeper = backends.start_sweeper(config.otp.sweep_interval_seconds);

    let state = web::Data::new(backends.state.clone());
    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, max_payload_size))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    info!("Shutting down");
    if let Some(handle) = sweeper {
        handle.abort();
    }
    backends.shutdown().await;

    result.context("HTTP server terminated with an error")
}
