//! Room data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::room::{CreateRoomParams, Room, RoomCategory},
    util::money::decimal_to_cents,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a room into the catalogue.
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error, including a duplicate room number
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            number: ActiveValue::Set(params.number),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            floor: ActiveValue::Set(params.floor),
            nightly_rate_cents: ActiveValue::Set(decimal_to_cents(params.nightly_rate)?),
            amenities: ActiveValue::Set(params.amenities),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Room::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .map(Room::from_entity)
            .transpose()
    }

    /// Gets every room ordered by room number.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect()
    }

    /// Gets the rooms of one category ordered by room number.
    pub async fn get_by_category(&self, category: RoomCategory) -> Result<Vec<Room>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::Category.eq(category.as_str()))
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect()
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find().count(self.db).await
    }
}
