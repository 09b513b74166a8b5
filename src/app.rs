use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method},
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        dogs_handler::{create_dog, list_dogs, ping},
        rate_limit::{self, FixedWindowLimiter},
    },
    state::AppState,
};

pub fn build_router(state: AppState, rate_limiter: Arc<FixedWindowLimiter>) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/ping", get(ping))
        .route("/dogs", get(list_dogs))
        .route("/dog", post(create_dog))
        .layer(middleware::from_fn_with_state(
            rate_limiter,
            rate_limit::enforce,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        )
        .with_state(state)
}
