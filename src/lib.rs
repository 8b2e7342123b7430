//! HTTP service that bundles exactly three uploaded PDF/JPEG files into a
//! single ZIP archive and hands it straight back to the client.

pub mod archive;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{any, post},
    Router,
};
use log::info;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

pub use config::Config;
pub use error::UploadError;

/// Build the application router around `config`.
pub fn app(config: Config) -> Router {
    let max_upload_size = config.max_upload_size;
    let state = Arc::new(config);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", any(handlers::index_handler))
        .route(
            "/upload",
            post(handlers::upload_handler).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::index_handler)
        .with_state(state)
        .layer(cors)
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(TraceLayer::new_for_http().on_response(
            |response: &http::Response<axum::body::BoxBody>, latency: Duration, _span: &Span| {
                let status = response.status();

                // Log the response status and latency
                info!(
                    "Time: {:?}ms, Response Status: {}",
                    latency.as_millis(),
                    status.as_u16()
                );
            },
        ))
}
