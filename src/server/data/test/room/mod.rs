use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParams, RoomCategory},
};
use rust_decimal_macros::dec;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_category;
mod get_by_id;
