use super::*;
use crate::server::{
    error::{booking::BookingError, AppError},
    model::reservation::{LifecycleAction, ReservationStatus, UpdateReservationParams},
    service::{reservation::ReservationService, room_lock::RoomLockService},
};
use entity::prelude::*;
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::reservation::ReservationFactory};

mod lifecycle;
mod update;
