//! Per-user mutual exclusion for checkout.

use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type LockMap = HashMap<Uuid, LockSlot>;

struct LockSlot {
    lock: Arc<AsyncMutex<()>>,
    /// Holders plus waiters currently registered for the user.
    users: usize,
}

/// Registry of one async lock per user id.
///
/// Holders for the same user run one at a time while different users never wait on each
/// other. An entry is removed once its last holder or waiter is gone, including waiters
/// whose acquire was cancelled.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<LockMap>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `user_id`; released when the guard drops.
    pub async fn acquire(&self, user_id: Uuid) -> UserLockGuard {
        let registration = Registration::new(self.locks.clone(), user_id);
        let guard = registration.lock.clone().lock_owned().await;

        UserLockGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of users with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One holder's or waiter's claim on a registry entry.
struct Registration {
    locks: Arc<Mutex<LockMap>>,
    user_id: Uuid,
    lock: Arc<AsyncMutex<()>>,
}

impl Registration {
    fn new(locks: Arc<Mutex<LockMap>>, user_id: Uuid) -> Self {
        let lock = {
            let mut map = locks.lock();
            let slot = map.entry(user_id).or_insert_with(|| LockSlot {
                lock: Arc::default(),
                users: 0,
            });
            slot.users += 1;
            slot.lock.clone()
        };

        Self {
            locks,
            user_id,
            lock,
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let mut map = self.locks.lock();
        if let Some(slot) = map.get_mut(&self.user_id) {
            slot.users -= 1;
            if slot.users == 0 {
                map.remove(&self.user_id);
            }
        }
    }
}

/// Exclusive access to one user's checkout.
pub struct UserLockGuard {
    // Fields drop in order: the mutex is released before the registration is withdrawn.
    _guard: OwnedMutexGuard<()>,
    _registration: Registration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Tests that a second holder for the same user waits for the first.
    ///
    /// Expected: second acquire times out while the first guard is held, then succeeds
    #[tokio::test]
    async fn serializes_same_user() {
        let locks = UserLocks::new();
        let user_id = Uuid::new_v4();

        let first = locks.acquire(user_id).await;
        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.acquire(user_id)).await;
        assert!(blocked.is_err());

        drop(first);
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(user_id)).await;
        assert!(second.is_ok());
    }

    /// Tests that different users do not block each other.
    ///
    /// Expected: both guards held at once
    #[tokio::test]
    async fn different_users_run_concurrently() {
        let locks = UserLocks::new();

        let _a = locks.acquire(Uuid::new_v4()).await;
        let b = tokio::time::timeout(Duration::from_millis(50), locks.acquire(Uuid::new_v4())).await;

        assert!(b.is_ok());
        assert_eq!(locks.len(), 2);
    }

    /// Tests that idle entries are pruned.
    ///
    /// Expected: registry empty after the guard drops
    #[tokio::test]
    async fn prunes_released_entries() {
        let locks = UserLocks::new();

        let guard = locks.acquire(Uuid::new_v4()).await;
        assert_eq!(locks.len(), 1);

        drop(guard);
        assert!(locks.is_empty());
    }

    /// Tests a waiter cancelled after the holder released the lock.
    ///
    /// Expected: registry empty once both the holder and the cancelled waiter are gone
    #[tokio::test]
    async fn prunes_cancelled_waiter_after_release() {
        let locks = UserLocks::new();
        let user_id = Uuid::new_v4();

        let first = locks.acquire(user_id).await;
        {
            let waiter = locks.acquire(user_id);
            tokio::pin!(waiter);
            assert!(tokio::time::timeout(Duration::from_millis(20), &mut waiter)
                .await
                .is_err());

            drop(first);
            assert_eq!(locks.len(), 1);
        }

        assert!(locks.is_empty());
        let again = tokio::time::timeout(Duration::from_millis(50), locks.acquire(user_id)).await;
        assert!(again.is_ok());
    }
}
