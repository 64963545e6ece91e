//! Guest domain models and parameters.
//!
//! Guests are deduplicated by document number: the first reservation for a document
//! creates the record and later reservations reuse it unchanged.

use validator::Validate;

use crate::model::reservation::{CreateGuestDto, GuestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub nationality: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Guest {
    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            document_number: entity.document_number,
            nationality: entity.nationality,
            email: entity.email,
            phone: entity.phone,
        }
    }

    /// First and last name separated by a space, as shown on the front desk.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            document_number: self.document_number,
            nationality: self.nationality,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Guest data supplied with a new reservation.
///
/// Carries the same field rules as `CreateGuestDto` so that values which only become
/// invalid after trimming are still rejected.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewGuest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 5, max = 50))]
    pub document_number: String,
    #[validate(length(min = 2, max = 50))]
    pub nationality: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
}

impl NewGuest {
    /// Converts the request body, trimming surrounding whitespace from every field.
    ///
    /// Empty optional fields are treated as absent.
    pub fn from_dto(dto: CreateGuestDto) -> Self {
        let optional = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            document_number: dto.document_number.trim().to_string(),
            nationality: dto.nationality.trim().to_string(),
            email: optional(dto.email),
            phone: optional(dto.phone),
        }
    }
}
