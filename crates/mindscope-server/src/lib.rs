//! HTTP surface for screenings, mood logging, chat and the dashboard.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/screenings", get(routes::screenings::list_screenings))
        .route("/screenings/{id}", post(routes::screenings::submit_screening))
        .route(
            "/moods",
            get(routes::moods::list_moods).post(routes::moods::log_mood),
        )
        .route(
            "/chat",
            get(routes::chat::chat_history).post(routes::chat::send_message),
        )
        .route("/tips", get(routes::tips::list_tips))
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route_layer(axum_mw::from_fn(middleware::auth::require_auth));

    Router::new()
        // Public
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
