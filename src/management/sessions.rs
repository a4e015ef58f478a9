use std::collections::HashMap;

use chrono::{Duration, Utc};

use crate::{
    types::{Session, User},
    utils,
};

/// Active login sessions keyed by their cookie token.
pub struct SessionManager {
    sessions: HashMap<String, Session>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Opens a session for `user` and returns it.
    pub fn login(&mut self, user: &User) -> Session {
        self.purge_expired();

        let session = Session {
            token: utils::generate_session_token(),
            username: user.username.clone(),
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Ends the session behind `token`. Returns whether one existed.
    pub fn logout(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Username of the live session behind `token`.
    pub fn username_for(&mut self, token: &str) -> Option<String> {
        let expired = self
            .sessions
            .get(token)
            .map(|s| s.expires_at <= Utc::now())?;

        if expired {
            self.sessions.remove(token);
            return None;
        }

        self.sessions.get(token).map(|s| s.username.clone())
    }

    pub fn purge_expired(&mut self) {
        let now = Utc::now();
        self.sessions.retain(|_, s| s.expires_at > now);
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}
