//! Router

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{google_demo, health_check, login, me, recommend, register};
use crate::state::AppState;

/// Build the application router. When `client_build` exists it is served
/// for every unmatched path, falling back to its `index.html`.
pub fn router(state: AppState, client_build: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        // Health
        .route("/api/health", get(health_check))
        // Accounts
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/google-demo", post(google_demo))
        // Advice
        .route("/api/recommend", post(recommend));

    if let Some(dir) = client_build.filter(|dir| dir.is_dir()) {
        tracing::info!(dir = %dir.display(), "Serving client build");
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        app = app.fallback_service(spa);
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
