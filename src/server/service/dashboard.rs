//! Front-desk views of the current day.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::{occupancy::RoomOccupancy, reservation::Reservation},
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, today: NaiveDate) -> Self {
        Self { db, today }
    }

    /// Confirmed reservations checking in today
    pub async fn arrivals_today(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .find_arrivals(self.today)
            .await?)
    }

    /// Checked-in reservations checking out today
    pub async fn departures_today(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .find_departures(self.today)
            .await?)
    }

    /// Occupancy of every room, ordered by room number.
    ///
    /// A room is occupied when a checked-in reservation covers today, that is
    /// `check_in <= today < check_out`.
    pub async fn occupancy(&self) -> Result<Vec<RoomOccupancy>, AppError> {
        let rooms = RoomRepository::new(self.db).get_all().await?;

        let mut current: HashMap<i32, Reservation> = HashMap::new();
        for reservation in ReservationRepository::new(self.db)
            .find_occupying(self.today)
            .await?
        {
            current.entry(reservation.room.id).or_insert(reservation);
        }

        Ok(rooms
            .into_iter()
            .map(|room| RoomOccupancy {
                current: current.remove(&room.id),
                room,
            })
            .collect())
    }
}
