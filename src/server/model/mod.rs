//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Stored string tags (room category,
//! reservation status) are parsed into closed enums here, and stored cents become
//! `Decimal` amounts.

pub mod context;
pub mod guest;
pub mod occupancy;
pub mod reservation;
pub mod room;
