//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and provide the
//! default values used by the factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let room = fixture::room::entity();
//! let suite = fixture::room::entity_builder().category("suite").build();
//! ```

pub mod guest;
pub mod reservation;
pub mod room;

pub use guest::{entity as guest_entity, entity_builder as guest_entity_builder};
pub use reservation::{entity as reservation_entity, entity_builder as reservation_entity_builder};
pub use room::{entity as room_entity, entity_builder as room_entity_builder};
