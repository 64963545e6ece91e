use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::model::reservation::{LifecycleAction, ReservationStatus},
};

/// Domain errors raised by the reservation lifecycle and availability engine.
///
/// Every variant is a rejected precondition; none of them is retried internally. Storage
/// failures are not represented here and surface as `AppError::DbErr` instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// The stay interval is empty, inverted, starts in the past or is too long.
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Guest data or party size failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Room {0} not found")]
    RoomNotFound(i32),

    #[error("Reservation {0} not found")]
    ReservationNotFound(i32),

    /// A blocking reservation already overlaps the requested interval.
    #[error("Room {room_id} is not available from {check_in} to {check_out}")]
    RoomUnavailable {
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// The lifecycle transition is not allowed from the reservation's current status.
    #[error("Cannot {operation} reservation: current status is {status}")]
    InvalidState {
        operation: LifecycleAction,
        status: ReservationStatus,
    },
}

/// Collapses field-level validation failures into a single `Validation` error naming the
/// rejected fields.
impl From<ValidationErrors> for BookingError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// Converts booking errors into HTTP responses.
///
/// The error message is returned verbatim since it only describes the rejected request.
///
/// # Returns
/// - 400 Bad Request - For `InvalidDateRange` and `Validation`
/// - 404 Not Found - For `RoomNotFound` and `ReservationNotFound`
/// - 409 Conflict - For `RoomUnavailable` and `InvalidState`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RoomNotFound(_) | Self::ReservationNotFound(_) => StatusCode::NOT_FOUND,
            Self::RoomUnavailable { .. } | Self::InvalidState { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
