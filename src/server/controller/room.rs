use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        room::{RoomDto, SearchAvailableRoomsDto},
    },
    server::{
        error::AppError, model::room::SearchAvailableRoomsParams, service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// List every room in the catalogue.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Rooms ordered by room number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all().await?;

    Ok(Json(
        rooms.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single room.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `room_id` - ID of the room to fetch
///
/// # Returns
/// - `200 OK` - The room
/// - `404 Not Found` - Room does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db).get_by_id(room_id).await?;

    Ok(Json(room.into_dto()))
}

/// Search rooms free over a date range.
///
/// A room is free when none of its confirmed or checked-in reservations shares a night
/// with `[check_in, check_out)`. The optional `category` narrows the search to
/// `single`, `double` or `suite`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Interval and optional category
///
/// # Returns
/// - `200 OK` - Free rooms ordered by room number
/// - `400 Bad Request` - Invalid interval, past check-in or unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/rooms/available",
    tag = ROOM_TAG,
    request_body = SearchAvailableRoomsDto,
    responses(
        (status = 200, description = "Rooms free over the interval", body = Vec<RoomDto>),
        (status = 400, description = "Invalid search parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_available_rooms(
    State(state): State<AppState>,
    Json(payload): Json<SearchAvailableRoomsDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SearchAvailableRoomsParams::from_dto(payload)?;

    let rooms = RoomService::new(&state.db)
        .search_available(params, &state.booking_context())
        .await?;

    Ok(Json(
        rooms.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>(),
    ))
}
