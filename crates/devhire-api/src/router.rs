use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{health, menu, notifications};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Authenticated routes (CurrentUser extractor)
    let api_routes = Router::new()
        .route("/api/v1/menu", get(menu::user_menu))
        .route("/api/v1/notifications", get(notifications::list_unread))
        .route("/api/v1/notifications/read", get(notifications::list_read))
        .route("/api/v1/notifications/{id}/read", post(notifications::mark_read));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
