//! Client-held session record.
//!
//! The session is a small JSON file on disk: the signed-in seller plus an
//! absolute expiry timestamp. There is no server-side session to consult;
//! whoever holds a fresh record is signed in. Expiry is checked on read,
//! and a stale or unreadable file is treated exactly like no file at all.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use mw_core::Seller;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Sessions live for two hours from the moment of login.
const SESSION_TTL_MINUTES: i64 = 120;

/// Errors that can occur while persisting a session record.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The on-disk session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: Seller,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    /// Build a fresh record for `user`, expiring one TTL from now.
    #[must_use]
    pub fn begin(user: Seller) -> Self {
        Self {
            expires_at: Utc::now() + Duration::minutes(SESSION_TTL_MINUTES),
            user,
        }
    }

    fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// File-backed store for the single session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist `session`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    pub fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        let body = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, body)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Load the current session, if a live one exists.
    ///
    /// An absent, unreadable, malformed, or expired record all yield `None`,
    /// and anything that exists but is unusable is deleted so the next read
    /// starts clean.
    #[must_use]
    pub fn load(&self) -> Option<StoredSession> {
        self.load_at(Utc::now())
    }

    fn load_at(&self, now: DateTime<Utc>) -> Option<StoredSession> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(_) => return None,
        };

        match serde_json::from_str::<StoredSession>(&body) {
            Ok(session) if session.is_live_at(now) => Some(session),
            Ok(_) => {
                debug!(path = %self.path.display(), "session expired, clearing");
                self.clear();
                None
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable session record, clearing");
                self.clear();
                None
            }
        }
    }

    /// Delete the session record, if present.
    pub fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "failed to remove session file");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mw_core::SellerId;

    fn seller() -> Seller {
        Seller {
            id: SellerId::new("s-1"),
            name: "Luis".to_owned(),
            email: mw_core::Email::parse("luis@mw.com").unwrap(),
            phone: "555-0100".to_owned(),
            active: true,
        }
    }

    fn temp_store(name: &str) -> SessionStore {
        let dir = std::env::temp_dir().join(format!("mw-session-test-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        SessionStore::new(dir.join("session.json"))
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("round-trip");
        store.save(&StoredSession::begin(seller())).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.user.name, "Luis");
        store.clear();
    }

    #[test]
    fn test_absent_file_is_no_session() {
        let store = temp_store("absent");
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_expiry_boundary() {
        let store = temp_store("expiry");
        let session = StoredSession::begin(seller());
        let login = session.expires_at - Duration::minutes(SESSION_TTL_MINUTES);
        store.save(&session).unwrap();

        // One minute shy of the TTL the session is live.
        assert!(store.load_at(login + Duration::minutes(119)).is_some());
        // One minute past, it is gone and the file has been cleaned up.
        assert!(store.load_at(login + Duration::minutes(121)).is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_record_self_heals() {
        let store = temp_store("corrupt");
        std::fs::write(&store.path, "{not json").unwrap();

        assert!(store.load().is_none());
        assert!(!store.path.exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = temp_store("clear");
        store.save(&StoredSession::begin(seller())).unwrap();
        store.clear();
        store.clear();
        assert!(store.load().is_none());
    }
}
