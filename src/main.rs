use std::net::TcpListener;

use actix_web::web;
use once_cell::sync::Lazy;
use portfolio_api::{
    constants::START_TIME,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    settings::AppConfig,
    startup::run,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    Lazy::force(&START_TIME);
    let config = AppConfig::new();
    init_tracing(config.as_ref().map(|c| c.is_production()).unwrap_or(false));

    let config = match config {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("❌ Database connection error: {}", e);
            std::io::Error::other(e)
        })?;

    run_migrations(&pool)
        .await
        .map_err(std::io::Error::other)?;

    let app_state = web::Data::new(AppState::new(&config, pool));

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;

    tracing::info!(
        "🚀 Starting Portfolio API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    let server = run(listener, app_state, &config)?;
    let handle = server.handle();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        },
    }
}
