//! Session state owned by the controller.
//!
//! Everything the view layer renders from lives here: the active kind,
//! the collection cache, the edit session, the notification slot and the
//! per-kind in-flight counters behind the loading flag.

use crate::cache::CollectionCache;
use crate::notification::{Notification, NotificationSlot};
use menagerie_types::{RecordId, ResourceKind};
use std::collections::HashMap;

/// The single, process-wide edit session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// No record is being edited. Creation happens from here.
    #[default]
    Idle,
    /// An existing record of `kind` is being edited.
    Editing { kind: ResourceKind, id: RecordId },
}

impl EditSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { kind, .. } => Some(*kind),
        }
    }

    pub fn id(&self) -> Option<&RecordId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { id, .. } => Some(id),
        }
    }
}

/// Ticket bookkeeping for one kind's fetches.
#[derive(Debug, Clone, Copy, Default)]
struct FetchTickets {
    issued: u64,
    applied: u64,
}

/// Mutable state behind the controller.
#[derive(Debug, Clone)]
pub struct SessionState {
    active_kind: ResourceKind,
    cache: CollectionCache,
    edit: EditSession,
    notification: NotificationSlot,
    in_flight: HashMap<ResourceKind, usize>,
    fetches: HashMap<ResourceKind, FetchTickets>,
}

impl SessionState {
    /// Creates empty state with `initial_kind` active.
    pub fn new(initial_kind: ResourceKind) -> Self {
        Self {
            active_kind: initial_kind,
            cache: CollectionCache::new(),
            edit: EditSession::Idle,
            notification: NotificationSlot::default(),
            in_flight: HashMap::new(),
            fetches: HashMap::new(),
        }
    }

    pub fn active_kind(&self) -> ResourceKind {
        self.active_kind
    }

    pub fn cache(&self) -> &CollectionCache {
        &self.cache
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    /// True while a remote call for the active kind is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading_kind(self.active_kind)
    }

    /// True while a remote call for `kind` is outstanding.
    pub fn is_loading_kind(&self, kind: ResourceKind) -> bool {
        self.in_flight.get(&kind).copied().unwrap_or(0) > 0
    }

    // ── Transitions (controller only) ────────────────────────────

    /// Makes `kind` active and ends any edit session.
    /// Returns the session that was cleared, if any.
    pub(crate) fn activate(&mut self, kind: ResourceKind) -> Option<EditSession> {
        self.active_kind = kind;
        self.clear_edit()
    }

    pub(crate) fn begin_edit(&mut self, kind: ResourceKind, id: RecordId) {
        self.edit = EditSession::Editing { kind, id };
    }

    /// Ends the edit session. Returns it if one was active.
    pub(crate) fn clear_edit(&mut self) -> Option<EditSession> {
        match std::mem::take(&mut self.edit) {
            EditSession::Idle => None,
            editing => Some(editing),
        }
    }

    pub(crate) fn begin_request(&mut self, kind: ResourceKind) {
        *self.in_flight.entry(kind).or_insert(0) += 1;
    }

    pub(crate) fn end_request(&mut self, kind: ResourceKind) {
        if let Some(count) = self.in_flight.get_mut(&kind) {
            *count = count.saturating_sub(1);
        }
    }

    /// Issues a new fetch ticket for `kind`.
    pub(crate) fn issue_fetch(&mut self, kind: ResourceKind) -> u64 {
        let tickets = self.fetches.entry(kind).or_default();
        tickets.issued += 1;
        tickets.issued
    }

    /// Applies a completed fetch unless a newer one for `kind` already
    /// landed. Returns whether the cache was replaced.
    pub(crate) fn complete_fetch(
        &mut self,
        kind: ResourceKind,
        ticket: u64,
        records: Vec<menagerie_types::Record>,
    ) -> bool {
        let tickets = self.fetches.entry(kind).or_default();
        if ticket <= tickets.applied {
            return false;
        }
        tickets.applied = ticket;
        self.cache.replace(kind, records);
        true
    }

    pub(crate) fn post_notification(&mut self, notification: Notification) -> u64 {
        self.notification.post(notification)
    }

    pub(crate) fn expire_notification(&mut self, generation: u64) -> bool {
        self.notification.expire(generation)
    }
}
