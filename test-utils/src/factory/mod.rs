//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::create_room(&db).await?;
//! let guest = factory::create_guest(&db).await?;
//! let reservation = factory::create_reservation(&db, room.id, guest.id).await?;
//!
//! // Or all at once
//! let (room, guest, reservation) =
//!     factory::helpers::create_reservation_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let suite = factory::room::RoomFactory::new(&db)
//!     .category("suite")
//!     .nightly_rate_cents(20_000)
//!     .build()
//!     .await?;
//! ```

pub mod guest;
pub mod helpers;
pub mod reservation;
pub mod room;

pub use guest::create_guest;
pub use reservation::create_reservation;
pub use room::create_room;
