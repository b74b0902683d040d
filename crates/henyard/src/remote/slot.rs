//! Single-value mailbox where the newest write wins

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Holds at most one value. `put` overwrites anything unread and `take`
/// never blocks on an empty slot.
#[derive(Debug)]
pub struct LatestSlot<T> {
    value: Mutex<Option<T>>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    // A panic while holding the lock cannot leave an Option half-written
    fn guard(&self) -> MutexGuard<'_, Option<T>> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `value`; returns true if an unread value was replaced
    pub fn put(&self, value: T) -> bool {
        self.guard().replace(value).is_some()
    }

    pub fn take(&self) -> Option<T> {
        self.guard().take()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_none()
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_newest_value_wins() {
        let slot = LatestSlot::new();
        assert!(!slot.put(1));
        assert!(slot.put(2));
        assert!(slot.put(3));
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_shared_between_threads() {
        let slot = Arc::new(LatestSlot::new());
        let writer = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || {
                for i in 0..100 {
                    slot.put(i);
                }
            })
        };
        writer.join().unwrap();
        assert_eq!(slot.take(), Some(99));
    }
}
