//! Reservation domain models, lifecycle state machine and parameters.
//!
//! A reservation moves through `confirmed → checked_in → checked_out`, and may be
//! cancelled from either non-terminal state. The legal transitions are defined once, in
//! [`ReservationStatus::apply`]; services never compare statuses themselves.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use std::fmt;

use crate::{
    model::reservation::{
        CancellationDto, CheckOutDto, CreateReservationDto, ReservationDto, ReservationStatusDto,
        UpdateReservationDto,
    },
    server::{
        error::booking::BookingError,
        model::{
            guest::{Guest, NewGuest},
            room::Room,
        },
        util::money::cents_to_decimal,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Operation requested on an existing reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    CheckIn,
    CheckOut,
    Cancel,
    Update,
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CheckIn => "check in",
            Self::CheckOut => "check out",
            Self::Cancel => "cancel",
            Self::Update => "update",
        })
    }
}

impl ReservationStatus {
    /// Statuses that occupy a room for availability purposes.
    pub const BLOCKING: [ReservationStatus; 2] = [Self::Confirmed, Self::CheckedIn];

    /// Tag stored in the `reservation.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "confirmed" => Some(Self::Confirmed),
            "checked_in" => Some(Self::CheckedIn),
            "checked_out" => Some(Self::CheckedOut),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn is_blocking(self) -> bool {
        match self {
            Self::Confirmed | Self::CheckedIn => true,
            Self::CheckedOut | Self::Cancelled => false,
        }
    }

    /// Returns the status after `action`, or the reason the action is not allowed.
    ///
    /// `Update` leaves the status unchanged but is only legal while the reservation is
    /// still active. Cancelling an already cancelled reservation is accepted and keeps
    /// it cancelled.
    ///
    /// # Returns
    /// - `Ok(ReservationStatus)` - Status to persist
    /// - `Err(BookingError::InvalidState)` - Transition not allowed from the current status
    pub fn apply(self, action: LifecycleAction) -> Result<Self, BookingError> {
        use LifecycleAction::*;
        use ReservationStatus::*;

        let next = match (self, action) {
            (Confirmed, CheckIn) => Some(CheckedIn),
            (Confirmed, CheckOut) => None,
            (Confirmed, Cancel) => Some(Cancelled),
            (Confirmed, Update) => Some(Confirmed),

            (CheckedIn, CheckIn) => None,
            (CheckedIn, CheckOut) => Some(CheckedOut),
            (CheckedIn, Cancel) => Some(Cancelled),
            (CheckedIn, Update) => Some(CheckedIn),

            (CheckedOut, CheckIn | CheckOut | Cancel | Update) => None,

            (Cancelled, Cancel) => Some(Cancelled),
            (Cancelled, CheckIn | CheckOut | Update) => None,
        };

        next.ok_or(BookingError::InvalidState {
            operation: action,
            status: self,
        })
    }

    pub fn into_dto(self) -> ReservationStatusDto {
        match self {
            Self::Confirmed => ReservationStatusDto::Confirmed,
            Self::CheckedIn => ReservationStatusDto::CheckedIn,
            Self::CheckedOut => ReservationStatusDto::CheckedOut,
            Self::Cancelled => ReservationStatusDto::Cancelled,
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open stay interval `[check_in, check_out)` with at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// # Returns
    /// - `Ok(StayDates)` - `check_in` is strictly before `check_out`
    /// - `Err(BookingError::InvalidDateRange)` - Empty or inverted interval
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_in >= check_out {
            return Err(BookingError::InvalidDateRange(format!(
                "check-out {} must be after check-in {}",
                check_out, check_in
            )));
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, always positive.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Whether two stays share at least one night. Touching intervals do not overlap.
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// Whether `day` is one of the nights of this stay.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }
}

/// Reservation with its room and guest snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub room: Room,
    pub guest: Guest,
    pub stay: StayDates,
    pub party_size: i32,
    pub total_price: Decimal,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `reservation` - The reservation entity from the database
    /// - `room` - The room the reservation references
    /// - `guest` - The guest the reservation references
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Unknown status tag, unknown room category or an empty
    ///   stored interval
    pub fn from_entities(
        reservation: entity::reservation::Model,
        room: entity::room::Model,
        guest: entity::guest::Model,
    ) -> Result<Self, DbErr> {
        let status = ReservationStatus::from_tag(&reservation.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status {:?} for reservation {}",
                reservation.status, reservation.id
            ))
        })?;

        let stay = StayDates::new(reservation.check_in, reservation.check_out).map_err(|e| {
            DbErr::Custom(format!("Reservation {} has {}", reservation.id, e))
        })?;

        Ok(Self {
            id: reservation.id,
            room: Room::from_entity(room)?,
            guest: Guest::from_entity(guest),
            stay,
            party_size: reservation.party_size,
            total_price: cents_to_decimal(reservation.total_price_cents),
            status,
        })
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            room_id: self.room.id,
            guest_id: self.guest.id,
            check_in: self.stay.check_in(),
            check_out: self.stay.check_out(),
            nights: self.stay.nights(),
            party_size: self.party_size,
            total_price: self.total_price,
            status: self.status.into_dto(),
            room: self.room.into_dto(),
            guest: self.guest.into_dto(),
        }
    }
}

/// Parameters for booking a room.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReservationParams {
    pub room_id: i32,
    pub guest: NewGuest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub party_size: i32,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self {
            room_id: dto.room_id,
            guest: NewGuest::from_dto(dto.guest),
            check_in: dto.check_in,
            check_out: dto.check_out,
            party_size: dto.party_size,
        }
    }
}

/// Row to insert once every booking check has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub room_id: i32,
    pub guest_id: i32,
    pub stay: StayDates,
    pub party_size: i32,
    pub total_price: Decimal,
}

/// Partial update of an active reservation. Absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateReservationParams {
    pub id: i32,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub party_size: Option<i32>,
}

impl UpdateReservationParams {
    pub fn from_dto(id: i32, dto: UpdateReservationDto) -> Self {
        Self {
            id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            party_size: dto.party_size,
        }
    }
}

/// Final bill returned on check-out.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutReceipt {
    pub reservation_id: i32,
    pub total_price: Decimal,
}

impl CheckOutReceipt {
    pub fn into_dto(self) -> CheckOutDto {
        CheckOutDto {
            reservation_id: self.reservation_id,
            total_price: self.total_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cancellation {
    pub reservation_id: i32,
    pub status: ReservationStatus,
}

impl Cancellation {
    pub fn into_dto(self) -> CancellationDto {
        CancellationDto {
            reservation_id: self.reservation_id,
            status: self.status.into_dto(),
        }
    }
}
