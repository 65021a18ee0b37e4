use std::path::Path;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::server::routes;
use crate::server::state::AppState;

/// Echoes the caller's origin and allows credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// API routes plus the static client from `web_dir` when it exists, or a
/// plain-text banner at `/` when it does not.
pub fn create_app(state: AppState, web_dir: &Path) -> Router {
    let api = Router::new()
        .route(
            "/api/game/start",
            get(routes::start_round).post(routes::start_round),
        )
        .route("/api/game/submit", post(routes::submit_score))
        .route("/api/leaderboard", get(routes::leaderboard));

    let app = if web_dir.is_dir() {
        tracing::info!(path = %web_dir.display(), "Serving static files");
        api.fallback_service(ServeDir::new(web_dir))
    } else {
        tracing::warn!(
            path = %web_dir.display(),
            "Web directory not found, serving basic response"
        );
        api.route("/", get(routes::banner))
    };

    app.layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
