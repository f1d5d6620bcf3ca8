//! SessionManager: concurrent per-session access via DashMap.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use crate::state::DialogueState;

/// Shared handle to one session. Lock it for the length of a turn.
pub type SessionHandle = Arc<Mutex<DialogueState>>;

/// Session table. Entries are created lazily and never removed by the
/// dialogue; reset clears an entry in place.
pub struct SessionManager {
    sessions: DashMap<String, SessionHandle>,
    undo_capacity: usize,
}

impl SessionManager {
    pub fn new(undo_capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            undo_capacity,
        }
    }

    /// Fresh random session id.
    pub fn new_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Handle for `session_id`, creating the session on first contact.
    ///
    /// The map shard is released before the handle is returned, so callers
    /// never hold it while locking the session.
    pub fn get_or_create(&self, session_id: &str) -> SessionHandle {
        if let Some(existing) = self.sessions.get(session_id) {
            return Arc::clone(existing.value());
        }
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id, "session created");
                Arc::new(Mutex::new(DialogueState::new(session_id, self.undo_capacity)))
            })
            .value()
            .clone()
    }

    pub fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.get(session_id).map(|s| Arc::clone(s.value()))
    }

    pub fn remove(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(circuit_core::config::defaults::DEFAULT_UNDO_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_idempotent() {
        let manager = SessionManager::new(10);
        let a = manager.get_or_create("s1");
        let b = manager.get_or_create("s1");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(manager.session_count(), 1);
    }

    #[test]
    fn unknown_session_is_none() {
        assert!(SessionManager::default().get("nope").is_none());
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionManager::new_session_id(), SessionManager::new_session_id());
    }
}
