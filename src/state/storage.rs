//! Session state storage
//!
//! This module keeps per-session dialogue state in memory for the lifetime
//! of the process, including creation, lookup, expiry, and cleanup. Each
//! session owns an independent state; nothing is shared between sessions
//! and nothing survives the process.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::utils::errors::{CampusBuddyError, Result};
use super::context::DialogueState;

/// Stored state plus bookkeeping for one conversation session
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub state: DialogueState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionEntry {
    fn new(ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            state: DialogueState::new(),
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// In-memory session registry
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<Uuid, SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl: Duration::seconds(config.ttl_seconds as i64),
        }
    }

    /// Start a new session with a fresh dialogue state
    pub fn create_session(&mut self) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions.insert(session_id, SessionEntry::new(self.ttl));
        debug!(session_id = %session_id, "Session created");
        session_id
    }

    /// Load the dialogue state for a session
    ///
    /// An expired session is removed and reported as absent, matching a
    /// session that never existed.
    pub fn load(&mut self, session_id: Uuid) -> Option<DialogueState> {
        match self.sessions.get(&session_id) {
            Some(entry) if entry.is_expired() => {
                warn!(session_id = %session_id, "Session expired, removing");
                self.sessions.remove(&session_id);
                None
            }
            Some(entry) => Some(entry.state.clone()),
            None => None,
        }
    }

    /// Save the dialogue state for a session, refreshing its expiry
    pub fn save(&mut self, session_id: Uuid, state: DialogueState) -> Result<()> {
        let ttl = self.ttl;
        let entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or(CampusBuddyError::SessionNotFound { session_id })?;

        let now = Utc::now();
        entry.state = state;
        entry.updated_at = now;
        entry.expires_at = now + ttl;

        debug!(session_id = %session_id, pending = entry.state.pending_label(),
               "Session state saved");
        Ok(())
    }

    /// Remove a session
    pub fn remove(&mut self, session_id: Uuid) -> Result<()> {
        self.sessions
            .remove(&session_id)
            .map(|_| ())
            .ok_or(CampusBuddyError::SessionNotFound { session_id })
    }

    /// Drop all expired sessions, returning how many were removed
    pub fn purge_expired(&mut self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !entry.is_expired());
        let removed = before - self.sessions.len();
        if removed > 0 {
            debug!(removed = removed, "Purged expired sessions");
        }
        removed
    }

    /// Inspect a session's bookkeeping entry
    pub fn entry(&self, session_id: Uuid) -> Option<&SessionEntry> {
        self.sessions.get(&session_id)
    }

    /// Number of live sessions (including not-yet-purged expired ones)
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check whether the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::context::Topic;
    use assert_matches::assert_matches;

    fn store() -> SessionStore {
        SessionStore::new(&SessionConfig { ttl_seconds: 3600 })
    }

    #[test]
    fn test_create_and_load_session() {
        let mut store = store();
        let id = store.create_session();

        let state = store.load(id).expect("session should exist");
        assert!(!state.has_pending());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_updates_state() {
        let mut store = store();
        let id = store.create_session();

        store.save(id, DialogueState::awaiting(Topic::Navigation)).unwrap();

        let state = store.load(id).unwrap();
        assert!(state.is_awaiting(Topic::Navigation));
    }

    #[test]
    fn test_save_unknown_session() {
        let mut store = store();
        let result = store.save(Uuid::new_v4(), DialogueState::new());
        assert_matches!(result, Err(CampusBuddyError::SessionNotFound { .. }));
    }

    #[test]
    fn test_remove_session() {
        let mut store = store();
        let id = store.create_session();

        store.remove(id).unwrap();
        assert!(store.load(id).is_none());
        assert_matches!(store.remove(id), Err(CampusBuddyError::SessionNotFound { .. }));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut store = store();
        let first = store.create_session();
        let second = store.create_session();

        store.save(first, DialogueState::awaiting(Topic::StudyTimer)).unwrap();

        assert!(store.load(first).unwrap().is_awaiting(Topic::StudyTimer));
        assert!(!store.load(second).unwrap().has_pending());
    }

    #[test]
    fn test_expired_session_is_removed_on_load() {
        let mut store = store();
        let id = store.create_session();

        // force the entry into the past
        store.sessions.get_mut(&id).unwrap().expires_at = Utc::now() - Duration::seconds(1);

        assert!(store.load(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let mut store = store();
        let stale = store.create_session();
        let _fresh = store.create_session();

        store.sessions.get_mut(&stale).unwrap().expires_at = Utc::now() - Duration::seconds(1);

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_refreshes_expiry() {
        let mut store = store();
        let id = store.create_session();

        let before = store.entry(id).unwrap().expires_at;
        store.save(id, DialogueState::new()).unwrap();
        let after = store.entry(id).unwrap().expires_at;

        assert!(after >= before);
    }
}
