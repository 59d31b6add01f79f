//! Transient user-facing notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth flows and the session store report outcomes as toasts instead of
//! blocking dialogs. The `ToastHost` component renders this queue and expires
//! entries after their duration.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    /// Spinner shown while a request is in flight; never auto-expires.
    Loading,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
            Self::Loading => "toast--loading",
        }
    }
}

/// A notification before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Display time in milliseconds. `None` keeps the toast until replaced or dismissed.
    pub duration_ms: Option<u32>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into(), duration_ms: Some(DEFAULT_TOAST_MS) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into(), duration_ms: Some(DEFAULT_TOAST_MS) }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into(), duration_ms: Some(DEFAULT_TOAST_MS) }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Loading, message: message.into(), duration_ms: None }
    }

    #[must_use]
    pub fn with_duration(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}

/// A queued toast with its handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Ordered queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(ToastEntry { id, toast });
        if self.entries.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.entries.len() - MAX_VISIBLE_TOASTS;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Replace the content of toast `id` in place (loading → success/error).
    ///
    /// Returns `false` when the toast is gone; the replacement is then queued
    /// as a new toast so the outcome is still shown.
    pub fn replace(&mut self, id: u64, toast: Toast) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.toast = toast;
            return true;
        }
        self.push(toast);
        false
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.toast)
    }
}
