pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod validator;
pub mod views;

use std::path::Path;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. Requests matching no route are served from
/// `public_dir`.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>) -> axum::Router {
    routes::routes()
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
