//! Availability checks over blocking reservations.
//!
//! Only `confirmed` and `checked_in` reservations block a room, and a stay conflicts with
//! another only when they share at least one night.

use sea_orm::{ConnectionTrait, DbErr};
use std::collections::HashSet;

use crate::server::{
    data::reservation::ReservationRepository, error::booking::BookingError, error::AppError,
    model::reservation::StayDates,
};

pub struct AvailabilityChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityChecker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether `room_id` has no blocking reservation overlapping `stay`.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `stay` - Requested interval
    /// - `exclude_id` - Reservation ignored by the check, used when it moves its own dates
    pub async fn is_available(
        &self,
        room_id: i32,
        stay: &StayDates,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let conflicts = ReservationRepository::new(self.db)
            .count_blocking_overlaps(room_id, stay, exclude_id)
            .await?;

        Ok(conflicts == 0)
    }

    /// Like [`Self::is_available`] but fails with `RoomUnavailable` on a conflict.
    pub async fn ensure_available(
        &self,
        room_id: i32,
        stay: &StayDates,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if self.is_available(room_id, stay, exclude_id).await? {
            return Ok(());
        }

        tracing::warn!(
            room_id,
            check_in = %stay.check_in(),
            check_out = %stay.check_out(),
            "Rejected booking for unavailable room"
        );

        Err(BookingError::RoomUnavailable {
            room_id,
            check_in: stay.check_in(),
            check_out: stay.check_out(),
        }
        .into())
    }

    /// Rooms holding at least one blocking reservation overlapping `stay`.
    pub async fn unavailable_room_ids(&self, stay: &StayDates) -> Result<HashSet<i32>, DbErr> {
        ReservationRepository::new(self.db)
            .blocked_room_ids(stay)
            .await
    }
}
