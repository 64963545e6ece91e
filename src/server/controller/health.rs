use axum::{response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::error::AppError};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// # Returns
/// - `200 OK` - Service is running, with the API version
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> Result<impl IntoResponse, AppError> {
    Ok(Json(HealthDto {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
