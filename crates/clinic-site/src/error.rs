use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use clinic_cms::CmsError;
use tracing::{error, warn};

use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Cms(#[from] CmsError),

    #[error("page not found")]
    NotFound,

    #[error("admin page is disabled")]
    AdminDisabled,

    #[error("missing or invalid admin token")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Cms(e) if e.is_not_found() => {
                (StatusCode::NOT_FOUND, Html(render::errors::not_found())).into_response()
            }
            AppError::Cms(e) => {
                error!(error = %e, kind = ?e.kind(), "page render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render::errors::failure()),
                )
                    .into_response()
            }
            AppError::NotFound | AppError::AdminDisabled => {
                (StatusCode::NOT_FOUND, Html(render::errors::not_found())).into_response()
            }
            AppError::Unauthorized => {
                warn!("admin request rejected");
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Html(render::errors::unauthorized()),
                )
                    .into_response()
            }
        }
    }
}
