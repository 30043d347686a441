//! HTTP server: the public tracking endpoint and the operator API.
//!
//! Routes:
//! - `POST /track`: ingestion entry, open to every visitor
//! - `GET  /api/stats`: aggregate stats snapshot
//! - `POST /api/refresh`: immediate recompute
//! - `GET  /api/visitors`: filtered, sorted table rows
//! - `GET  /api/visitors/geo`: map points + viewport bounds
//! - `POST /api/visitors/{id}/block` and `.../unblock`
//! - `PUT  /api/credentials`: update the operator credential pair
//!
//! Everything under `/api` sits behind the credential check.

mod handlers;
mod types;

pub use types::AppState;

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;

use handlers::{
    block_handler, credentials_handler, geo_handler, refresh_handler, require_admin,
    stats_handler, track_handler, unblock_handler, visitors_handler,
};

/// Builds the application router. Exposed separately from [`start_server`]
/// so tests can drive the routes without binding a socket.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/stats", get(stats_handler))
        .route("/refresh", post(refresh_handler))
        .route("/visitors", get(visitors_handler))
        .route("/visitors/geo", get(geo_handler))
        .route("/visitors/{id}/block", post(block_handler))
        .route("/visitors/{id}/unblock", post(unblock_handler))
        .route("/credentials", put(credentials_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .route("/track", post(track_handler))
        .nest("/api", api)
        .with_state(state)
}

/// Creates and starts the server.
pub async fn start_server(bind: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", bind, port, e))?;

    log::info!("Server listening on http://{}:{}/", bind, port);
    log::info!("  - Tracking: POST http://{}:{}/track", bind, port);
    log::info!("  - Operator API: http://{}:{}/api/", bind, port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
