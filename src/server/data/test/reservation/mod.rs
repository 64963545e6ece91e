use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{NewReservation, ReservationStatus, StayDates},
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::reservation::ReservationFactory};

mod count_blocking_overlaps;
mod create;
mod dashboard_queries;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn stay(from: (u32, u32), to: (u32, u32)) -> StayDates {
    StayDates::new(date(from.0, from.1), date(to.0, to.1)).unwrap()
}
