//! Callback registry for pending request sessions
//!
//! The registry is the single shared, synchronized piece of state in the
//! crate: a map from random session ids to pending outcome callbacks. It
//! owns callback lifetime: insert on registration, remove on delivery, at
//! most one delivery per id. Everything else in the crate is a pure
//! function over its inputs.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use uuid::Uuid;

use crate::core::{Outcome, OutcomeCallback, PermissionError, PermissionResult};

struct PendingSession {
    callback: OutcomeCallback,
    registered_at: Instant,
}

/// Map from session ids to pending outcome callbacks
///
/// Safe under concurrent access from independent sessions; the internal
/// mutex is the single synchronization point. Ids are random v4 uuids, used
/// only for correlation, never for authorization.
pub struct CallbackRegistry {
    inner: Mutex<Inner>,
}

struct Inner {
    sessions: HashMap<Uuid, PendingSession>,
    closed: bool,
}

impl CallbackRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                sessions: HashMap::new(),
                closed: false,
            }),
        }
    }

    /// Store `callback` under a fresh random id and return the id
    ///
    /// Fails with `RegistryClosed` after `close()`.
    pub fn register(&self, callback: OutcomeCallback) -> PermissionResult<Uuid> {
        let mut inner = self.inner.lock().unwrap();
        if inner.closed {
            return Err(PermissionError::RegistryClosed);
        }

        let id = Uuid::new_v4();
        inner.sessions.insert(
            id,
            PendingSession {
                callback,
                registered_at: Instant::now(),
            },
        );
        tracing::debug!("[CallbackRegistry] Registered session {}", id);
        Ok(id)
    }

    /// Invoke and evict the callback for `id`, if still pending
    ///
    /// The callback runs synchronously, outside the registry lock. Returns
    /// whether a callback fired; delivering to an unknown or already
    /// completed id is a silent no-op, which makes completion idempotent.
    pub fn deliver(&self, id: Uuid, outcome: Outcome) -> bool {
        let pending = self.inner.lock().unwrap().sessions.remove(&id);

        match pending {
            Some(session) => {
                tracing::debug!(
                    "[CallbackRegistry] Delivering outcome to session {} after {:?}",
                    id,
                    session.registered_at.elapsed()
                );
                (session.callback)(outcome);
                true
            }
            None => {
                tracing::debug!(
                    "[CallbackRegistry] No pending session {}, dropping outcome",
                    id
                );
                false
            }
        }
    }

    /// Whether a session is still pending delivery
    pub fn contains(&self, id: Uuid) -> bool {
        self.inner.lock().unwrap().sessions.contains_key(&id)
    }

    /// Number of pending sessions
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().sessions.len()
    }

    /// Whether no sessions are pending
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().sessions.is_empty()
    }

    /// Close the registry for teardown
    ///
    /// New registrations are rejected from this point on. Pending entries
    /// are NOT drained and stay deliverable, but each orphaned id is logged
    /// with its age so abandoned sessions are visible. Returns the number
    /// of orphans.
    pub fn close(&self) -> usize {
        let mut inner = self.inner.lock().unwrap();
        inner.closed = true;

        for (id, session) in &inner.sessions {
            tracing::warn!(
                "[CallbackRegistry] Orphaned session {} (pending for {:?})",
                id,
                session.registered_at.elapsed()
            );
        }
        inner.sessions.len()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_callback(counter: Arc<AtomicUsize>) -> OutcomeCallback {
        Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_register_and_deliver() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let id = registry.register(counting_callback(count.clone())).unwrap();

        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);

        assert!(registry.deliver(id, Outcome::AllGranted));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_second_delivery_is_noop() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let id = registry.register(counting_callback(count.clone())).unwrap();

        assert!(registry.deliver(id, Outcome::AllGranted));
        assert!(!registry.deliver(id, Outcome::SomeDenied(vec![])));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let registry = CallbackRegistry::new();
        assert!(!registry.deliver(Uuid::new_v4(), Outcome::AllGranted));
    }

    #[test]
    fn test_sessions_do_not_cross_deliver() {
        let registry = CallbackRegistry::new();
        let count_a = Arc::new(AtomicUsize::new(0));
        let count_b = Arc::new(AtomicUsize::new(0));
        let id_a = registry.register(counting_callback(count_a.clone())).unwrap();
        let id_b = registry.register(counting_callback(count_b.clone())).unwrap();

        assert_ne!(id_a, id_b);

        registry.deliver(id_a, Outcome::AllGranted);
        assert_eq!(count_a.load(Ordering::SeqCst), 1);
        assert_eq!(count_b.load(Ordering::SeqCst), 0);
        assert!(registry.contains(id_b));
    }

    #[test]
    fn test_delivered_outcome_reaches_callback() {
        let registry = CallbackRegistry::new();
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        let id = registry
            .register(Box::new(move |outcome| {
                *seen_clone.lock().unwrap() = Some(outcome);
            }))
            .unwrap();

        let camera = crate::core::Permission::new("android.permission.CAMERA").unwrap();
        registry.deliver(id, Outcome::SomeDenied(vec![camera.clone()]));

        assert_eq!(
            seen.lock().unwrap().take(),
            Some(Outcome::SomeDenied(vec![camera]))
        );
    }

    #[test]
    fn test_close_rejects_new_registrations() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let id = registry.register(counting_callback(count.clone())).unwrap();

        assert_eq!(registry.close(), 1);
        assert_eq!(
            registry
                .register(counting_callback(count.clone()))
                .unwrap_err(),
            PermissionError::RegistryClosed
        );

        // Entries registered before close stay deliverable.
        assert!(registry.deliver(id, Outcome::AllGranted));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
