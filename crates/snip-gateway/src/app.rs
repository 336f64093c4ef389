use std::any::Any;

use axum::body::Body;
use axum::http::header::USER_AGENT;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{error, info_span, Level};

use snip_core::ShortCode;

use crate::error::AppError;
use crate::handlers::{
    create_link_handler, health_handler, link_stats_handler, resolve_link_handler,
};
use crate::model::RESERVED_CODES;
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorturls", post(create_link_handler))
            .route("/shorturls/{short_code}", get(link_stats_handler))
            .route("/{short_code}", get(resolve_link_handler))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let user_agent = request
                            .headers()
                            .get(USER_AGENT)
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or("-");
                        info_span!(
                            "http_request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            user_agent = %user_agent,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    )
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Codes a registry behind this router must never hand out.
    pub fn reserved_codes() -> Vec<ShortCode> {
        RESERVED_CODES
            .iter()
            .map(|code| ShortCode::new_unchecked(*code))
            .collect()
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "request handler panicked");
    AppError::Internal.into_response()
}
