//! HTTP handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::error::LookupError;
use crate::normalize::normalize;
use crate::summary::ShowSummary;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    estado: &'static str,
    mensaje: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        estado: "OK",
        mensaje: "La API está corriendo al 100%",
    })
}

/// `GET /api/serie/:nombre`
pub async fn get_serie(
    State(state): State<AppState>,
    nombre: Result<Path<String>, PathRejection>,
) -> Result<Json<ShowSummary>, LookupError> {
    let Path(nombre) = nombre?;
    let title = normalize(&nombre);
    info!(query = %nombre, title = %title, "Looking up show");

    let summary = state.tvmaze.lookup(&nombre, &title).await?;
    Ok(Json(summary))
}
