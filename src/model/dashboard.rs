use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::room::RoomDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomOccupancyDto {
    pub room: RoomDto,
    pub occupied: bool,
    /// Full name of the checked-in guest, when occupied.
    pub guest_name: Option<String>,
    pub expected_check_out: Option<NaiveDate>,
}
