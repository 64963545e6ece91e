use sea_orm::DatabaseConnection;

use crate::server::{
    data::room::RoomRepository,
    error::{booking::BookingError, AppError},
    model::{
        context::BookingContext,
        room::{Room, SearchAvailableRoomsParams},
    },
    service::availability::AvailabilityChecker,
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every room ordered by room number
    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| BookingError::RoomNotFound(id).into())
    }

    /// Finds rooms with no blocking reservation over the requested interval.
    ///
    /// # Arguments
    /// - `params` - Interval and optional category filter
    /// - `ctx` - Booking context supplying today's date
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Free rooms ordered by room number
    /// - `Err(BookingError::InvalidDateRange)` - Empty interval or check-in in the past
    pub async fn search_available(
        &self,
        params: SearchAvailableRoomsParams,
        ctx: &BookingContext,
    ) -> Result<Vec<Room>, AppError> {
        let stay = ctx.validate_search(params.check_in, params.check_out)?;

        let repo = RoomRepository::new(self.db);
        let rooms = match params.category {
            Some(category) => repo.get_by_category(category).await?,
            None => repo.get_all().await?,
        };

        let blocked = AvailabilityChecker::new(self.db)
            .unavailable_room_ids(&stay)
            .await?;

        Ok(rooms
            .into_iter()
            .filter(|room| !blocked.contains(&room.id))
            .collect())
    }
}
