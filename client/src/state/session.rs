//! Session store: who is signed in and which theme is active.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one `SessionStore` and provides it to the tree
//! as `RwSignal<SessionStore>`. Route guards, navbars and auth pages read it;
//! only the mutators below write it.
//!
//! INVARIANTS
//! ==========
//! - `token` is present iff `user` is present.
//! - `logged_in()` is derived from `user`, so it can never disagree with it.
//! - Every mutator updates state, persists what it must, then notifies all
//!   subscribers before returning.
//! - A `LoginTicket` only installs a user if no newer login, `set_user` or
//!   `clear_user` happened since it was issued.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, MemoryStorage};
use super::toast::Toast;
use crate::net::types::User;

/// Local-storage key holding the dark mode flag as a JSON boolean.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Local-storage key for the saved session when persistence is enabled.
pub const SESSION_KEY: &str = "user-storage";

pub const DARK_MODE_TOAST: &str = "Dark mode toggled!";
pub const DARK_MODE_TOAST_MS: u32 = 500;

/// Snapshot of the session as seen by readers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
    dark_mode: bool,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    user: User,
    #[serde(default)]
    token: Option<String>,
}

/// Handle for one in-flight login submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginTicket(u64);

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

/// Single writer for the application session.
pub struct SessionStore {
    session: Session,
    storage: Box<dyn KeyValueStore>,
    persist_session: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    login_generation: u64,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("persist_session", &self.persist_session)
            .field("listeners", &self.listeners.len())
            .field("login_generation", &self.login_generation)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Build the store from durable storage.
    ///
    /// Dark mode is read from [`DARK_MODE_KEY`]; a missing or malformed value
    /// means `false`. The saved session is only restored when
    /// `persist_session` is set.
    pub fn new(storage: impl KeyValueStore + 'static, persist_session: bool) -> Self {
        let mut store = Self::deferred(storage, persist_session);
        store.restore();
        store
    }

    /// Build the store in the state a server render sees: logged out, light
    /// theme. Nothing is read from `storage` until [`SessionStore::restore`].
    pub fn deferred(storage: impl KeyValueStore + 'static, persist_session: bool) -> Self {
        Self {
            session: Session { user: None, token: None, dark_mode: false },
            storage: Box::new(storage),
            persist_session,
            listeners: Vec::new(),
            next_subscription: 0,
            login_generation: 0,
        }
    }

    /// Load dark mode and, when persistence is on, the saved session.
    ///
    /// A user already installed is kept over the saved one. Subscribers are
    /// notified once with the loaded state.
    pub fn restore(&mut self) {
        self.session.dark_mode = self
            .storage
            .get(DARK_MODE_KEY)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(false);

        if self.persist_session && !self.logged_in() {
            if let Some(saved) = self
                .storage
                .get(SESSION_KEY)
                .and_then(|raw| serde_json::from_str::<PersistedSession>(&raw).ok())
                .filter(|saved| !saved.user.is_empty())
            {
                self.login_generation += 1;
                self.session.token = Some(saved.token.unwrap_or_default());
                self.session.user = Some(saved.user);
            }
        }
        self.notify();
    }

    /// Store backed by process memory with session persistence off.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), false)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn logged_in(&self) -> bool {
        self.session.logged_in()
    }

    pub fn dark_mode(&self) -> bool {
        self.session.dark_mode()
    }

    /// Install an authenticated user. An empty user record clears the session.
    pub fn set_user(&mut self, user: User, token: String) {
        if user.is_empty() {
            self.clear_user();
            return;
        }
        self.login_generation += 1;
        self.session.user = Some(user);
        self.session.token = Some(token);
        self.save_session();
        self.notify();
    }

    /// Drop the current user and token.
    pub fn clear_user(&mut self) {
        self.login_generation += 1;
        self.session.user = None;
        self.session.token = None;
        self.save_session();
        self.notify();
    }

    /// Clear local state and hand back the token that was active, if any.
    ///
    /// The caller sends the server-side logout with that token afterwards;
    /// local state is already gone whether or not that call succeeds.
    pub fn log_out(&mut self) -> Option<String> {
        let token = self.session.token.clone();
        self.clear_user();
        token
    }

    /// Flip dark mode, persist it, and return the notification to show.
    pub fn toggle_dark_mode(&mut self) -> Toast {
        let next = !self.session.dark_mode;
        self.session.dark_mode = next;
        let raw = if next { "true" } else { "false" };
        if let Err(e) = self.storage.set(DARK_MODE_KEY, raw) {
            log::warn!("dark mode preference not persisted: {e}");
        }
        self.notify();
        Toast::success(DARK_MODE_TOAST).with_duration(DARK_MODE_TOAST_MS)
    }

    /// Start a login submission. Any earlier outstanding ticket becomes stale.
    pub fn begin_login(&mut self) -> LoginTicket {
        self.login_generation += 1;
        LoginTicket(self.login_generation)
    }

    pub fn is_current(&self, ticket: LoginTicket) -> bool {
        ticket.0 == self.login_generation
    }

    /// Install the result of the login that issued `ticket`.
    ///
    /// Returns `false` and leaves the session untouched when the ticket was
    /// superseded.
    pub fn complete_login(&mut self, ticket: LoginTicket, user: User, token: String) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding superseded login response");
            return false;
        }
        self.set_user(user, token);
        true
    }

    /// Register a listener called with the new session after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.session);
        }
    }

    fn save_session(&self) {
        if !self.persist_session {
            return;
        }
        let Some(user) = self.session.user.clone() else {
            self.storage.remove(SESSION_KEY);
            return;
        };
        let saved = PersistedSession { user, token: self.session.token.clone() };
        match serde_json::to_string(&saved) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &raw) {
                    log::warn!("session not persisted: {e}");
                }
            }
            Err(e) => log::warn!("session not serialized: {e}"),
        }
    }
}
