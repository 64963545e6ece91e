//! Request and response bodies of the JSON API.
//!
//! These DTOs are the wire contract; the server converts them to and from its domain
//! models at the controller boundary.

pub mod api;
pub mod dashboard;
pub mod reservation;
pub mod room;
