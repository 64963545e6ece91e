use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::RoomOccupancyDto, reservation::ReservationDto},
    server::{error::AppError, service::dashboard::DashboardService, state::AppState, util},
};

/// Tag for grouping front-desk dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Confirmed reservations checking in today.
///
/// # Returns
/// - `200 OK` - Today's arrivals
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dashboard/arrivals-today",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Today's arrivals", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn arrivals_today(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let arrivals = DashboardService::new(&state.db, util::date::today())
        .arrivals_today()
        .await?;

    Ok(Json(
        arrivals
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Checked-in reservations checking out today.
///
/// # Returns
/// - `200 OK` - Today's departures
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dashboard/departures-today",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Today's departures", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn departures_today(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let departures = DashboardService::new(&state.db, util::date::today())
        .departures_today()
        .await?;

    Ok(Json(
        departures
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Occupancy snapshot of every room.
///
/// A room is occupied when a checked-in reservation covers today. Occupied rooms carry
/// the guest's full name and the expected check-out date.
///
/// # Returns
/// - `200 OK` - One entry per room, ordered by room number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/dashboard/occupancy",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Occupancy per room", body = Vec<RoomOccupancyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn occupancy(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let snapshot = DashboardService::new(&state.db, util::date::today())
        .occupancy()
        .await?;

    Ok(Json(
        snapshot
            .into_iter()
            .map(|o| o.into_dto())
            .collect::<Vec<_>>(),
    ))
}
