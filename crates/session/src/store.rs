//! The session store service.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use solicred_auth::{Principal, Role};

use crate::persist::{SessionBackend, SessionError, StoredSession};

/// Holds the authenticated principal for the lifetime of a session.
///
/// One store is created at bootstrap and shared by reference with the
/// navigation guard, the menu filter, and visibility checks. Reads never
/// fail; the only mutations are set and clear.
pub struct SessionStore {
    current: RwLock<Option<Principal>>,
    backend: Box<dyn SessionBackend>,
}

impl SessionStore {
    /// Create the store and load whatever record the backend kept.
    ///
    /// A record that cannot be read is treated as "no session": the failure
    /// is logged, the record removed, and bootstrap continues
    /// unauthenticated. This path never fails and never panics.
    pub fn open(backend: Box<dyn SessionBackend>) -> Self {
        let current = match backend.load() {
            Ok(Some(record)) => {
                tracing::debug!(user = %record.principal.id, "restored session record");
                Some(record.principal)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session record");
                if let Err(err) = backend.clear() {
                    tracing::warn!(error = %err, "failed to remove unreadable session record");
                }
                None
            }
        };

        Self {
            current: RwLock::new(current),
            backend,
        }
    }

    /// Store a freshly authenticated principal.
    ///
    /// The principal is trusted as issued by the authentication
    /// collaborator; no validation happens here.
    pub fn set_session(&self, principal: Principal) -> Result<(), SessionError> {
        let record = StoredSession {
            principal: principal.clone(),
            stored_at: Utc::now(),
        };
        self.backend.save(&record)?;

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(principal);
        Ok(())
    }

    /// The current principal, or `None` when unauthenticated.
    pub fn session(&self) -> Option<Principal> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Role set of the current principal; empty when unauthenticated.
    pub fn roles(&self) -> Vec<Role> {
        self.session().map(|p| p.roles).unwrap_or_default()
    }

    /// Remove the session. Idempotent: clearing an empty store is a no-op.
    ///
    /// The in-memory principal is dropped before the backend write; a
    /// backend failure still leaves the store unauthenticated.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.backend.clear()
    }

    /// Clear the session after a collaborator reported an authentication
    /// failure for the stored token (e.g. an HTTP 401 on any request).
    pub fn invalidate(&self) -> Result<(), SessionError> {
        tracing::info!("invalidating session after authentication failure");
        self.clear_session()
    }
}

#[cfg(test)]
mod tests {
    use solicred_auth::AuthToken;
    use solicred_core::UserId;

    use crate::persist::{FileBackend, MemoryBackend};

    use super::*;

    fn principal(id: i64, roles: Vec<Role>) -> Principal {
        Principal {
            id: UserId::new(id),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            token: AuthToken::new("tok"),
            roles,
        }
    }

    #[test]
    fn set_then_read_returns_principal() {
        let store = SessionStore::open(Box::new(MemoryBackend::new()));
        assert!(!store.is_authenticated());

        store
            .set_session(principal(1, vec![Role::Solicitante]))
            .unwrap();

        let current = store.session().unwrap();
        assert_eq!(current.id, UserId::new(1));
        assert_eq!(store.roles(), vec![Role::Solicitante]);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = SessionStore::open(Box::new(MemoryBackend::new()));
        store.set_session(principal(1, vec![])).unwrap();

        store.clear_session().unwrap();
        assert!(store.session().is_none());

        // Second clear on an already-empty store must not fail.
        store.clear_session().unwrap();
        assert!(store.session().is_none());
    }

    #[test]
    fn invalidate_drops_the_session() {
        let store = SessionStore::open(Box::new(MemoryBackend::new()));
        store.set_session(principal(5, vec![Role::Analista])).unwrap();

        store.invalidate().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn reopen_restores_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::open(Box::new(FileBackend::new(&path)));
        store.set_session(principal(9, vec![Role::Analista])).unwrap();
        drop(store);

        let reopened = SessionStore::open(Box::new(FileBackend::new(&path)));
        assert_eq!(reopened.session().unwrap().id, UserId::new(9));
    }

    #[test]
    fn corrupt_record_fails_closed_to_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "definitely not json").unwrap();

        let store = SessionStore::open(Box::new(FileBackend::new(&path)));
        assert!(store.session().is_none());

        // The unreadable record was removed, so the next open is clean.
        assert!(!path.exists());
    }
}
