use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use log::error;

use crate::config::Config;

// The template is re-read on every request so edits show up without a restart.
pub async fn index_handler(
    State(config): State<Arc<Config>>,
) -> Result<impl IntoResponse, (StatusCode, &'static str)> {
    let path = config.index_template();

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(err) => {
            error!("Error loading template {:?}: {}", path, err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"))
        }
    }
}
