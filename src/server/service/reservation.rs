//! Reservation lifecycle management.
//!
//! Every mutating operation runs its reads, checks and writes inside one database
//! transaction; returning early drops the transaction, which rolls it back. Creating a
//! reservation and moving its dates additionally hold the room's lock from
//! `RoomLockService` until the transaction has committed.

use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::server::{
    data::{guest::GuestRepository, reservation::ReservationRepository, room::RoomRepository},
    error::{booking::BookingError, AppError},
    model::{
        context::BookingContext,
        reservation::{
            Cancellation, CheckOutReceipt, CreateReservationParams, LifecycleAction,
            NewReservation, Reservation, UpdateReservationParams,
        },
    },
    service::{availability::AvailabilityChecker, pricing, room_lock::RoomLockService},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    room_locks: &'a RoomLockService,
    ctx: BookingContext,
}

impl<'a> ReservationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        room_locks: &'a RoomLockService,
        ctx: BookingContext,
    ) -> Self {
        Self {
            db,
            room_locks,
            ctx,
        }
    }

    /// Books a room for a guest.
    ///
    /// Validates the guest data, party size and stay interval, then checks under the
    /// room's lock that the room exists and is free before resolving the guest by
    /// document number and inserting the reservation as `confirmed`.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The new reservation with room and guest snapshots
    /// - `Err(BookingError::Validation)` - Invalid guest data or party size
    /// - `Err(BookingError::InvalidDateRange)` - Empty, past or too long stay
    /// - `Err(BookingError::RoomNotFound)` - Unknown room
    /// - `Err(BookingError::RoomUnavailable)` - Overlapping blocking reservation
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        params.guest.validate().map_err(BookingError::from)?;
        self.ctx.validate_party_size(params.party_size)?;
        let stay = self
            .ctx
            .validate_new_stay(params.check_in, params.check_out)?;

        let _room_guard = self.room_locks.acquire(params.room_id).await;
        let txn = self.db.begin().await?;

        let room = RoomRepository::new(&txn)
            .get_by_id(params.room_id)
            .await?
            .ok_or(BookingError::RoomNotFound(params.room_id))?;

        AvailabilityChecker::new(&txn)
            .ensure_available(room.id, &stay, None)
            .await?;

        let guest = GuestRepository::new(&txn)
            .find_or_create(params.guest)
            .await?;

        let reservation = ReservationRepository::new(&txn)
            .create(NewReservation {
                room_id: room.id,
                guest_id: guest.id,
                stay,
                party_size: params.party_size,
                total_price: pricing::total_price(room.nightly_rate, &stay),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            room = %reservation.room.number,
            check_in = %stay.check_in(),
            check_out = %stay.check_out(),
            "Created reservation"
        );

        Ok(reservation)
    }

    /// Gets a reservation with its room and guest.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation
    /// - `Err(BookingError::ReservationNotFound)` - Unknown reservation id
    pub async fn get_by_id(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| BookingError::ReservationNotFound(id).into())
    }

    /// Changes the dates and/or party size of an active reservation.
    ///
    /// Absent fields keep their current value. Availability is re-checked, excluding the
    /// reservation itself, and the price recomputed only when a date actually changes.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(BookingError::ReservationNotFound)` - Unknown reservation id
    /// - `Err(BookingError::InvalidState)` - Reservation is cancelled or checked out
    /// - `Err(BookingError::InvalidDateRange)` - Effective interval is empty or too long
    /// - `Err(BookingError::Validation)` - Supplied party size is out of bounds
    /// - `Err(BookingError::RoomUnavailable)` - New dates overlap another reservation
    pub async fn update(&self, params: UpdateReservationParams) -> Result<Reservation, AppError> {
        let room_id = self.get_by_id(params.id).await?.room.id;

        let _room_guard = self.room_locks.acquire(room_id).await;
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let current = repo
            .get_by_id(params.id)
            .await?
            .ok_or(BookingError::ReservationNotFound(params.id))?;

        current.status.apply(LifecycleAction::Update)?;

        if let Some(party_size) = params.party_size {
            self.ctx.validate_party_size(party_size)?;
        }

        let check_in = params.check_in.unwrap_or(current.stay.check_in());
        let check_out = params.check_out.unwrap_or(current.stay.check_out());
        let dates_changed =
            check_in != current.stay.check_in() || check_out != current.stay.check_out();

        let (stay, total_price) = if dates_changed {
            let stay = self.ctx.validate_stay(check_in, check_out)?;

            AvailabilityChecker::new(&txn)
                .ensure_available(current.room.id, &stay, Some(current.id))
                .await?;

            (stay, pricing::total_price(current.room.nightly_rate, &stay))
        } else {
            (current.stay, current.total_price)
        };

        let party_size = params.party_size.unwrap_or(current.party_size);

        repo.update_details(current.id, stay, party_size, total_price)
            .await?;

        let updated = repo
            .get_by_id(current.id)
            .await?
            .ok_or(BookingError::ReservationNotFound(current.id))?;

        txn.commit().await?;

        tracing::info!(
            reservation_id = updated.id,
            dates_changed,
            total_price = %updated.total_price,
            "Updated reservation"
        );

        Ok(updated)
    }

    /// Marks a confirmed reservation as checked in.
    pub async fn check_in(&self, id: i32) -> Result<Reservation, AppError> {
        self.transition(id, LifecycleAction::CheckIn).await
    }

    /// Marks a checked-in reservation as checked out and returns the final bill.
    pub async fn check_out(&self, id: i32) -> Result<CheckOutReceipt, AppError> {
        let reservation = self.transition(id, LifecycleAction::CheckOut).await?;

        Ok(CheckOutReceipt {
            reservation_id: reservation.id,
            total_price: reservation.total_price,
        })
    }

    /// Cancels a reservation that has not been checked out.
    ///
    /// Cancelling an already cancelled reservation succeeds without changes.
    pub async fn cancel(&self, id: i32) -> Result<Cancellation, AppError> {
        let reservation = self.transition(id, LifecycleAction::Cancel).await?;

        Ok(Cancellation {
            reservation_id: reservation.id,
            status: reservation.status,
        })
    }

    /// Applies a status transition inside a transaction.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation carrying its new status
    /// - `Err(BookingError::ReservationNotFound)` - Unknown reservation id
    /// - `Err(BookingError::InvalidState)` - Transition not allowed from the current status
    async fn transition(&self, id: i32, action: LifecycleAction) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let mut reservation = repo
            .get_by_id(id)
            .await?
            .ok_or(BookingError::ReservationNotFound(id))?;

        let previous = reservation.status;
        let next = match previous.apply(action) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(reservation_id = id, "{}", err);
                return Err(err.into());
            }
        };

        if next != previous {
            repo.update_status(id, next).await?;
        }

        txn.commit().await?;

        tracing::info!(
            reservation_id = id,
            from = %previous,
            to = %next,
            "Reservation {}",
            action
        );

        reservation.status = next;
        Ok(reservation)
    }
}
