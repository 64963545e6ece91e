//! Per-room async locks.
//!
//! Availability is checked and the booking written while holding the lock of the room
//! being booked, so two concurrent requests for the same room cannot both pass the check
//! before either has inserted. Requests for different rooms never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per room id, created lazily on first use.
///
/// Cloning the service shares the same registry.
#[derive(Clone, Default)]
pub struct RoomLockService {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl RoomLockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `room_id`.
    ///
    /// The registry lock is only held while looking up the room's mutex, never while
    /// waiting for it.
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Guard releasing the room when dropped
    pub async fn acquire(&self, room_id: i32) -> OwnedMutexGuard<()> {
        let room_lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(room_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        room_lock.lock_owned().await
    }
}
