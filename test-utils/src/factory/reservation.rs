//! Reservation factory for creating test reservation entities.
//!
//! The factory writes rows directly and performs no availability or pricing checks, so
//! tests can arrange any state, including overlapping or terminal reservations.

use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, room.id, guest.id)
///     .dates(check_in, check_out)
///     .status("checked_in")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::reservation::Model,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `room_id` - Room being reserved
    /// - `guest_id` - Guest holding the reservation
    pub fn new(db: &'a DatabaseConnection, room_id: i32, guest_id: i32) -> Self {
        let entity = fixture::reservation::entity_builder()
            .room_id(room_id)
            .guest_id(guest_id)
            .build();

        Self { db, entity }
    }

    /// Sets both ends of the stay.
    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.entity.check_in = check_in;
        self.entity.check_out = check_out;
        self
    }

    pub fn party_size(mut self, party_size: i32) -> Self {
        self.entity.party_size = party_size;
        self
    }

    pub fn total_price_cents(mut self, cents: i64) -> Self {
        self.entity.total_price_cents = cents;
        self
    }

    /// Sets the status tag (`confirmed`, `checked_in`, `checked_out`, `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(self.entity.room_id),
            guest_id: ActiveValue::Set(self.entity.guest_id),
            check_in: ActiveValue::Set(self.entity.check_in),
            check_out: ActiveValue::Set(self.entity.check_out),
            party_size: ActiveValue::Set(self.entity.party_size),
            total_price_cents: ActiveValue::Set(self.entity.total_price_cents),
            status: ActiveValue::Set(self.entity.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed reservation with default values for the given room and guest.
///
/// Shorthand for `ReservationFactory::new(db, room_id, guest_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    room_id: i32,
    guest_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, room_id, guest_id).build().await
}
