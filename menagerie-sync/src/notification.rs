//! Transient user notifications.
//!
//! At most one notification is live at a time. Each post bumps a
//! generation; the expiry timer of a notification only clears the slot if
//! the generation it was armed with is still current.

use std::fmt;
use tokio::time::Instant;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => f.write_str("success"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A status message shown to the user for a fixed window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
    pub issued_at: Instant,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            issued_at: Instant::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Single notification slot with generation tracking.
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    /// Replaces any live notification. Returns the generation to arm the
    /// expiry timer with.
    pub fn post(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        self.current = Some(notification);
        self.generation
    }

    /// Clears the slot if `generation` is still the latest post.
    /// Returns true if something was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
