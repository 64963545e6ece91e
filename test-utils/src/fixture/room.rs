//! Room fixtures for creating in-memory test data.

use entity::room;

/// Default room number.
pub const DEFAULT_NUMBER: &str = "101";

/// Default room category tag.
pub const DEFAULT_CATEGORY: &str = "single";

/// Default floor.
pub const DEFAULT_FLOOR: i32 = 1;

/// Default nightly rate in cents (80.00).
pub const DEFAULT_NIGHTLY_RATE_CENTS: i64 = 8_000;

/// Default amenities text.
pub const DEFAULT_AMENITIES: &str = "WiFi, TV, Air conditioning";

/// Creates a room entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - number: `"101"`
/// - category: `"single"`
/// - floor: `1`
/// - nightly_rate_cents: `8000`
/// - amenities: `"WiFi, TV, Air conditioning"`
pub fn entity() -> room::Model {
    entity_builder().build()
}

/// Creates a room entity builder for customization.
pub fn entity_builder() -> RoomEntityBuilder {
    RoomEntityBuilder::default()
}

/// Builder for creating customized room entity models.
pub struct RoomEntityBuilder {
    id: i32,
    number: String,
    category: String,
    floor: i32,
    nightly_rate_cents: i64,
    amenities: String,
}

impl Default for RoomEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            number: DEFAULT_NUMBER.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            floor: DEFAULT_FLOOR,
            nightly_rate_cents: DEFAULT_NIGHTLY_RATE_CENTS,
            amenities: DEFAULT_AMENITIES.to_string(),
        }
    }
}

impl RoomEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the category tag (`single`, `double` or `suite`).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    /// Sets the nightly rate in cents.
    pub fn nightly_rate_cents(mut self, cents: i64) -> Self {
        self.nightly_rate_cents = cents;
        self
    }

    pub fn amenities(mut self, amenities: impl Into<String>) -> Self {
        self.amenities = amenities.into();
        self
    }

    /// Builds and returns the room entity model.
    pub fn build(self) -> room::Model {
        room::Model {
            id: self.id,
            number: self.number,
            category: self.category,
            floor: self.floor,
            nightly_rate_cents: self.nightly_rate_cents,
            amenities: self.amenities,
        }
    }
}
