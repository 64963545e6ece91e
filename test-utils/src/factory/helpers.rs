//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room, a guest and a confirmed reservation linking them.
///
/// All entities use default values. Use the individual factories to customize.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((room, guest, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room::Model,
        entity::guest::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let room = crate::factory::room::create_room(db).await?;
    let guest = crate::factory::guest::create_guest(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, room.id, guest.id).await?;

    Ok((room, guest, reservation))
}
