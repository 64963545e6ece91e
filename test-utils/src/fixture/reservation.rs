//! Reservation fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::reservation;

/// Default status tag.
pub const DEFAULT_STATUS: &str = "confirmed";

/// Default party size.
pub const DEFAULT_PARTY_SIZE: i32 = 2;

/// Default check-in date (2025-06-01).
pub fn default_check_in() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// Default check-out date (2025-06-03).
pub fn default_check_out() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
}

/// Creates a reservation entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - room_id: `1`
/// - guest_id: `1`
/// - check_in: `2025-06-01`
/// - check_out: `2025-06-03`
/// - party_size: `2`
/// - total_price_cents: `16000`
/// - status: `"confirmed"`
pub fn entity() -> reservation::Model {
    entity_builder().build()
}

/// Creates a reservation entity builder for customization.
pub fn entity_builder() -> ReservationEntityBuilder {
    ReservationEntityBuilder::default()
}

/// Builder for creating customized reservation entity models.
pub struct ReservationEntityBuilder {
    id: i32,
    room_id: i32,
    guest_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    party_size: i32,
    total_price_cents: i64,
    status: String,
}

impl Default for ReservationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            room_id: 1,
            guest_id: 1,
            check_in: default_check_in(),
            check_out: default_check_out(),
            party_size: DEFAULT_PARTY_SIZE,
            total_price_cents: 16_000,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl ReservationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn room_id(mut self, room_id: i32) -> Self {
        self.room_id = room_id;
        self
    }

    pub fn guest_id(mut self, guest_id: i32) -> Self {
        self.guest_id = guest_id;
        self
    }

    /// Sets both ends of the stay.
    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn party_size(mut self, party_size: i32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn total_price_cents(mut self, cents: i64) -> Self {
        self.total_price_cents = cents;
        self
    }

    /// Sets the status tag (`confirmed`, `checked_in`, `checked_out`, `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and returns the reservation entity model.
    pub fn build(self) -> reservation::Model {
        reservation::Model {
            id: self.id,
            room_id: self.room_id,
            guest_id: self.guest_id,
            check_in: self.check_in,
            check_out: self.check_out,
            party_size: self.party_size,
            total_price_cents: self.total_price_cents,
            status: self.status,
        }
    }
}
