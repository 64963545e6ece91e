//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Defaults come from `fixture::room` with a unique room number per instance.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db)
///     .number("301")
///     .category("suite")
///     .nightly_rate_cents(20_000)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::room::Model,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::room::entity_builder()
            .number(format!("R{}", id))
            .build();

        Self { db, entity }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.entity.number = number.into();
        self
    }

    /// Sets the category tag (`single`, `double` or `suite`).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.entity.category = category.into();
        self
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.entity.floor = floor;
        self
    }

    /// Sets the nightly rate in cents.
    pub fn nightly_rate_cents(mut self, cents: i64) -> Self {
        self.entity.nightly_rate_cents = cents;
        self
    }

    pub fn amenities(mut self, amenities: impl Into<String>) -> Self {
        self.entity.amenities = amenities.into();
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(self.entity.number),
            category: ActiveValue::Set(self.entity.category),
            floor: ActiveValue::Set(self.entity.floor),
            nightly_rate_cents: ActiveValue::Set(self.entity.nightly_rate_cents),
            amenities: ActiveValue::Set(self.entity.amenities),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
