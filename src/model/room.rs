use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategoryDto {
    Single,
    Double,
    Suite,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub number: String,
    pub category: RoomCategoryDto,
    pub floor: i32,
    #[schema(value_type = String, example = "80.00")]
    pub nightly_rate: Decimal,
    pub amenities: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SearchAvailableRoomsDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Optional category filter: `single`, `double` or `suite`.
    #[serde(default)]
    pub category: Option<String>,
}
