//! HTTP transport for the simulator.
//!
//! # Endpoints
//! - `GET  /`          - Browser front-end
//! - `POST /simulate`  - One policy, full trace (`{result, page_faults}`)
//! - `POST /compare`   - Fault counts for every policy
//! - `GET  /health`    - Health check
//!
//! The server holds no state between requests besides its configuration.

pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};

use crate::common::{Result, ServerConfig};

pub use types::{
    CompareRequest, CompareResponse, ErrorResponse, PolicySummary, SimulationRequest,
    SimulationResponse,
};

/// Build the router with all endpoints.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/simulate", post(handlers::simulate))
        .route("/compare", post(handlers::compare))
        .with_state(Arc::new(config))
}

/// Bind to `config.bind_addr()` and serve until Ctrl+C.
///
/// # Errors
/// `Error::Io` if the address cannot be bound or the server fails.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let bind_addr = config.bind_addr();
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to install Ctrl+C handler: {}", err);
        std::future::pending::<()>().await;
    }
}
