//! SeaORM entities for the hotel desk schema.
//!
//! Column types mirror the `migration` crate. Money is kept in integer cents and
//! enumerations as their snake_case tags; conversion into domain types happens in the
//! server's repository layer.

pub mod prelude;

pub mod guest;
pub mod reservation;
pub mod room;
