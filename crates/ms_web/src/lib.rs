use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub const DEFAULT_PORT: u16 = 5000;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::health))
        .route("/search", post(handlers::search_post).get(handlers::search_get))
        .route("/articles", get(handlers::count))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds and serves until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> ms_core::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🔎 query service listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::state::AppState;
    pub use crate::{create_app, serve};
    pub use ms_core::{Article, Error, Result};
}
