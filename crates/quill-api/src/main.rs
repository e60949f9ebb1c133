//! Quill blog API server entry point.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use quill_core::id::{IdGenerator, RandomIdGenerator};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use quill_api::config::Config;
use quill_api::history::initial_store;
use quill_api::routes;
use quill_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Quill blog server");

    // Read configuration from environment.
    let config = Config::from_env()?;

    // Replay history before accepting traffic.
    let id_generator: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator);
    let store = initial_store(&config, id_generator.as_ref())?;
    let app_state = AppState::new(store, id_generator, config.index_limit);

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::posts::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr = config.bind_address()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
