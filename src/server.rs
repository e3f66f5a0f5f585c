use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::routes;

/// State shared across handlers. Read-only after startup.
pub struct AppState {
    pub config: Config,
}

/// Assembles the application router. Separate from `run` so tests can
/// drive it directly.
pub fn app(config: Config) -> Router {
    let max_content_length = config.max_content_length;
    let state = Arc::new(AppState { config });

    // Cross-origin callers need to read the attachment filename.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION]);

    Router::new()
        .merge(routes::health_routes())
        .merge(routes::generate_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_content_length))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.bind_addr.clone();
    let app = app(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
