use chrono::NaiveDate;

use crate::{
    model::dashboard::RoomOccupancyDto,
    server::model::{reservation::Reservation, room::Room},
};

/// Occupancy of one room on a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOccupancy {
    pub room: Room,
    /// Checked-in reservation covering the day, if any.
    pub current: Option<Reservation>,
}

impl RoomOccupancy {
    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    pub fn expected_check_out(&self) -> Option<NaiveDate> {
        self.current.as_ref().map(|r| r.stay.check_out())
    }

    pub fn into_dto(self) -> RoomOccupancyDto {
        let occupied = self.is_occupied();
        let expected_check_out = self.expected_check_out();

        RoomOccupancyDto {
            room: self.room.into_dto(),
            occupied,
            guest_name: self.current.map(|r| r.guest.full_name()),
            expected_check_out,
        }
    }
}
