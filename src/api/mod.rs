mod handlers;

pub use handlers::{LogQuery, SubmissionErrorResponse, SubmissionResponse};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::services::RecentLog;

/// State shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub log: RecentLog,
}

impl AppState {
    pub fn new(log: RecentLog) -> Self {
        Self { log }
    }
}

/// Router with permissive CORS.
pub fn create_router(state: AppState) -> Router {
    build_router(state, CorsLayer::permissive())
}

/// Router with CORS restricted to the configured origins, if any.
pub fn create_router_with_config(state: AppState, config: &ServerConfig) -> Router {
    build_router(state, cors_layer(config.cors_origins.as_deref()))
}

fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/submissions", post(handlers::api_submit))
        .route("/form", get(handlers::form_definition))
        .route("/log", get(handlers::recent_log))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::show_form))
        .route(
            "/assignment",
            get(handlers::show_form).post(handlers::submit_form),
        )
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
