//! Guest data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::guest::{Guest, NewGuest};

pub struct GuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_document(&self, document_number: &str) -> Result<Option<Guest>, DbErr> {
        Ok(entity::prelude::Guest::find()
            .filter(entity::guest::Column::DocumentNumber.eq(document_number))
            .one(self.db)
            .await?
            .map(Guest::from_entity))
    }

    pub async fn create(&self, guest: NewGuest) -> Result<Guest, DbErr> {
        let entity = entity::guest::ActiveModel {
            first_name: ActiveValue::Set(guest.first_name),
            last_name: ActiveValue::Set(guest.last_name),
            document_number: ActiveValue::Set(guest.document_number),
            nationality: ActiveValue::Set(guest.nationality),
            email: ActiveValue::Set(guest.email),
            phone: ActiveValue::Set(guest.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(entity))
    }

    /// Resolves a guest by document number, creating the record on first use.
    ///
    /// An existing record is returned unchanged even if the supplied name or contact
    /// details differ from it.
    ///
    /// # Returns
    /// - `Ok(Guest)` - Existing or newly created guest
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn find_or_create(&self, guest: NewGuest) -> Result<Guest, DbErr> {
        if let Some(existing) = self.find_by_document(&guest.document_number).await? {
            return Ok(existing);
        }

        self.create(guest).await
    }
}
