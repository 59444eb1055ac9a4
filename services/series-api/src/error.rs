//! Lookup errors and their HTTP mapping.
//!
//! ```json
//! { "error": "No se encontró ninguna serie con el título 'Lost'" }
//! { "error": "Error al consultar la API de series", "detalle": "..." }
//! { "error": "Ruta inválida", "detalle": "..." }
//! ```

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Generic message returned with every 500 response.
pub const LOOKUP_FAILED_MESSAGE: &str = "Error al consultar la API de series";
/// Message returned when the path parameter cannot be decoded.
pub const INVALID_PATH_MESSAGE: &str = "Ruta inválida";

/// Errors that can occur while looking up a show
#[derive(Debug, Error)]
pub enum LookupError {
    /// Upstream answered with a non-success status for the searched title
    #[error("No se encontró ninguna serie con el título '{title}'")]
    NotFound { title: String },

    /// Network failure or an undecodable upstream body
    #[error("{0}")]
    Transport(String),

    /// Path parameter could not be decoded (e.g. invalid UTF-8 escape)
    #[error("{0}")]
    InvalidPath(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(error_chain(&err))
    }
}

impl From<PathRejection> for LookupError {
    fn from(rejection: PathRejection) -> Self {
        LookupError::InvalidPath(rejection.body_text())
    }
}

/// Render an error and all of its sources as `outer: cause: root`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !detail.ends_with(&cause_text) {
            detail.push_str(": ");
            detail.push_str(&cause_text);
        }
        source = cause.source();
    }
    detail
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detalle: Option<String>,
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            LookupError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LookupError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = match self {
            LookupError::NotFound { .. } => ErrorBody {
                error: message,
                detalle: None,
            },
            LookupError::Transport(detail) => {
                error!(detail = %detail, "Show lookup failed");
                ErrorBody {
                    error: LOOKUP_FAILED_MESSAGE.to_string(),
                    detalle: Some(detail),
                }
            }
            LookupError::InvalidPath(detail) => {
                warn!(detail = %detail, "Rejected show path");
                ErrorBody {
                    error: INVALID_PATH_MESSAGE.to_string(),
                    detalle: Some(detail),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
