//! Error hierarchy of the booking backend.
//!
//! Each concern owns a `thiserror` enum (`booking`, `config`). `AppError` gathers them
//! together with storage and I/O failures so services and handlers can propagate any of
//! them with `?`, and renders itself as an `ErrorDto` body when returned from a handler.

pub mod booking;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{booking::BookingError, config::ConfigError},
};

/// Error returned by services, handlers and startup code.
///
/// Only `BookingErr` reaches the client with its own message and status code. The other
/// variants describe failures of the server itself.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Rejected booking operation, answered with 400, 404 or 409.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// SeaORM query, transaction or connection failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure binding or serving the TCP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BookingErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// 500 response that logs the wrapped error and hides it from the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
