use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

/// Everything that can stop an upload from turning into an archive.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Total files size too large (max {max})")]
    TooLarge { max: String },

    #[error("Please upload exactly {expected} files")]
    WrongCount { expected: usize, actual: usize },

    #[error("Only PDF and JPEG files are allowed")]
    DisallowedType(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::TooLarge { .. } | Self::WrongCount { .. } | Self::DisallowedType(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            error!("Upload failed: {:#}", err);
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
