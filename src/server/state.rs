//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Per-room lock registry serializing availability checks with their writes
//! - Booking limits read from configuration

use sea_orm::DatabaseConnection;

use crate::server::{
    config::BookingPolicy, model::context::BookingContext, service::room_lock::RoomLockService,
    util,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `RoomLockService` shares its registry through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Lock registry shared by every request that books or moves a stay.
    pub room_locks: RoomLockService,

    pub policy: BookingPolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, policy: BookingPolicy) -> Self {
        Self {
            db,
            room_locks: RoomLockService::new(),
            policy,
        }
    }

    /// Builds the context a single request validates and schedules against.
    ///
    /// The current date is read once per request so every check in that request agrees
    /// on what "today" is.
    pub fn booking_context(&self) -> BookingContext {
        BookingContext::new(util::date::today(), self.policy)
    }
}
