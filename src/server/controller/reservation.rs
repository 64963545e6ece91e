use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CancellationDto, CheckOutDto, CreateReservationDto, ReservationDto,
            UpdateReservationDto,
        },
    },
    server::{
        error::{booking::BookingError, AppError},
        model::reservation::{CreateReservationParams, UpdateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

fn service(state: &AppState) -> ReservationService<'_> {
    ReservationService::new(&state.db, &state.room_locks, state.booking_context())
}

/// Book a room.
///
/// Validates the guest, party size and stay interval, checks that the room is free and
/// creates a `confirmed` reservation priced at nights times the room's nightly rate.
/// An existing guest with the same document number is reused.
///
/// # Arguments
/// - `state` - Application state containing the database connection and room locks
/// - `payload` - Room, guest data, interval and party size
///
/// # Returns
/// - `201 Created` - The new reservation
/// - `400 Bad Request` - Invalid guest data, party size or interval
/// - `404 Not Found` - Room does not exist
/// - `409 Conflict` - Room already booked for an overlapping interval
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room not available for the interval", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(BookingError::from)?;

    let reservation = service(&state)
        .create(CreateReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Get a reservation with its room and guest.
///
/// # Returns
/// - `200 OK` - The reservation
/// - `404 Not Found` - Reservation does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reservation", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = service(&state).get_by_id(reservation_id).await?;

    Ok(Json(reservation.into_dto()))
}

/// Change the dates and/or party size of a reservation.
///
/// Only `confirmed` and `checked_in` reservations can be changed. Omitted fields keep
/// their current value; new dates are re-checked for availability and re-priced.
///
/// # Arguments
/// - `state` - Application state containing the database connection and room locks
/// - `reservation_id` - ID of the reservation to change
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated reservation
/// - `400 Bad Request` - Invalid interval or party size
/// - `404 Not Found` - Reservation does not exist
/// - `409 Conflict` - Reservation is closed, or the new dates overlap another booking
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation cannot be changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(BookingError::from)?;

    let reservation = service(&state)
        .update(UpdateReservationParams::from_dto(reservation_id, payload))
        .await?;

    Ok(Json(reservation.into_dto()))
}

/// Cancel a reservation.
///
/// Cancelling frees the room for the interval. Cancelling an already cancelled
/// reservation succeeds; a checked-out reservation cannot be cancelled.
///
/// # Returns
/// - `200 OK` - Reservation id with its `cancelled` status
/// - `404 Not Found` - Reservation does not exist
/// - `409 Conflict` - Reservation is checked out
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled reservation", body = CancellationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cancellation = service(&state).cancel(reservation_id).await?;

    Ok(Json(cancellation.into_dto()))
}

/// Check a guest in.
///
/// # Returns
/// - `200 OK` - The reservation, now `checked_in`
/// - `404 Not Found` - Reservation does not exist
/// - `409 Conflict` - Reservation is not `confirmed`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations/{reservation_id}/check-in",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Guest checked in", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation is not confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = service(&state).check_in(reservation_id).await?;

    Ok(Json(reservation.into_dto()))
}

/// Check a guest out and return the final bill.
///
/// # Returns
/// - `200 OK` - Reservation id and total price
/// - `404 Not Found` - Reservation does not exist
/// - `409 Conflict` - Reservation is not `checked_in`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations/{reservation_id}/check-out",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Guest checked out", body = CheckOutDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 409, description = "Reservation is not checked in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_out(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let receipt = service(&state).check_out(reservation_id).await?;

    Ok(Json(receipt.into_dto()))
}
