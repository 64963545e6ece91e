//! Guest factory for creating test guest entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guests with customizable fields.
///
/// Defaults come from `fixture::guest` with a unique document number per instance so
/// that the unique constraint on `document_number` never trips between factories.
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guest::Model,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::guest::entity_builder()
            .document_number(format!("DOC{:06}", id))
            .build();

        Self { db, entity }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    pub fn document_number(mut self, document_number: impl Into<String>) -> Self {
        self.entity.document_number = document_number.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.entity.email = email;
        self
    }

    /// Builds and inserts the guest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guest::Model)` - Created guest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            document_number: ActiveValue::Set(self.entity.document_number),
            nationality: ActiveValue::Set(self.entity.nationality),
            email: ActiveValue::Set(self.entity.email),
            phone: ActiveValue::Set(self.entity.phone),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest with default values.
///
/// Shorthand for `GuestFactory::new(db).build().await`.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db).build().await
}
