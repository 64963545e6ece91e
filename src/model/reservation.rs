use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::room::RoomDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatusDto {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuestDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub nationality: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema, Validate)]
pub struct CreateGuestDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 5, max = 50))]
    pub document_number: String,
    #[validate(length(min = 2, max = 50))]
    pub nationality: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema, Validate)]
pub struct CreateReservationDto {
    pub room_id: i32,
    #[validate(nested)]
    pub guest: CreateGuestDto,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub party_size: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema, Validate)]
pub struct UpdateReservationDto {
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub party_size: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub party_size: i32,
    #[schema(value_type = String, example = "160.00")]
    pub total_price: Decimal,
    pub status: ReservationStatusDto,
    pub room: RoomDto,
    pub guest: GuestDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckOutDto {
    pub reservation_id: i32,
    #[schema(value_type = String, example = "160.00")]
    pub total_price: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CancellationDto {
    pub reservation_id: i32,
    pub status: ReservationStatusDto,
}
