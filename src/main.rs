use eloquent_responder::{
    create_app, shutdown::shutdown_signal, AppState, Config, EnvSource, ServerError,
};
use std::panic;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Configuration is read before tracing so LOG_LEVEL can shape the filter
    let loaded = Config::load();
    let default_filter = loaded
        .as_ref()
        .map(Config::log_filter)
        .unwrap_or_else(|_| Config::default().log_filter());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();

    info!("Starting server...");

    let config = loaded.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    let app = create_app(AppState::new(EnvSource::Process), &config);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("🚀 Server running on http://{}", addr);
    if config.swagger_enabled {
        info!("📚 Swagger UI available at http://{}/swagger", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
