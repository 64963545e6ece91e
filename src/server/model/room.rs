//! Room domain models and parameters.
//!
//! Rooms are read-only after creation. The stored category tag is parsed into the closed
//! `RoomCategory` enum and the stored nightly rate in cents becomes a `Decimal`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use std::fmt;

use crate::{
    model::room::{RoomCategoryDto, RoomDto, SearchAvailableRoomsDto},
    server::{error::booking::BookingError, util::money::cents_to_decimal},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomCategory {
    Single,
    Double,
    Suite,
}

impl RoomCategory {
    /// Tag stored in the `room.category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Suite => "suite",
        }
    }

    /// Parses a stored or client-supplied category tag.
    ///
    /// # Returns
    /// - `Some(RoomCategory)` - Tag is one of `single`, `double`, `suite`
    /// - `None` - Unknown tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "suite" => Some(Self::Suite),
            _ => None,
        }
    }

    pub fn into_dto(self) -> RoomCategoryDto {
        match self {
            Self::Single => RoomCategoryDto::Single,
            Self::Double => RoomCategoryDto::Double,
            Self::Suite => RoomCategoryDto::Suite,
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable room with its nightly rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    /// Human-facing room number, unique across the property.
    pub number: String,
    pub category: RoomCategory,
    pub floor: i32,
    pub nightly_rate: Decimal,
    pub amenities: String,
}

impl Room {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The room entity from the database
    ///
    /// # Returns
    /// - `Ok(Room)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored category tag is not a known category
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, DbErr> {
        let category = RoomCategory::from_tag(&entity.category).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown category {:?} for room {}",
                entity.category, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            number: entity.number,
            category,
            floor: entity.floor,
            nightly_rate: cents_to_decimal(entity.nightly_rate_cents),
            amenities: entity.amenities,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            number: self.number,
            category: self.category.into_dto(),
            floor: self.floor,
            nightly_rate: self.nightly_rate,
            amenities: self.amenities,
        }
    }
}

/// Parameters for adding a room to the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoomParams {
    pub number: String,
    pub category: RoomCategory,
    pub floor: i32,
    pub nightly_rate: Decimal,
    pub amenities: String,
}

/// Parameters for searching rooms free over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchAvailableRoomsParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Restricts the search to one category when set.
    pub category: Option<RoomCategory>,
}

impl SearchAvailableRoomsParams {
    /// Converts the search request, parsing the optional category tag.
    ///
    /// # Returns
    /// - `Ok(SearchAvailableRoomsParams)` - Request with a known or absent category
    /// - `Err(BookingError::Validation)` - Category tag is not `single`, `double` or `suite`
    pub fn from_dto(dto: SearchAvailableRoomsDto) -> Result<Self, BookingError> {
        let category = dto
            .category
            .map(|tag| {
                RoomCategory::from_tag(&tag)
                    .ok_or_else(|| BookingError::Validation(format!("Unknown room category: {}", tag)))
            })
            .transpose()?;

        Ok(Self {
            check_in: dto.check_in,
            check_out: dto.check_out,
            category,
        })
    }
}
