//! Session controller, the single writer of all local state.
//!
//! Owns the active kind, the collection cache, the edit session, the
//! loading flag and the notification slot. Remote calls go through a
//! [`ResourceApi`]; transport and service failures are converted into
//! error notifications and never escape an operation. Only caller bugs
//! (preconditions) are returned as errors.

use crate::api::ResourceApi;
use crate::config::SessionConfig;
use crate::error::{SyncError, SyncResult};
use crate::notification::Notification;
use crate::state::{EditSession, SessionState};
use menagerie_types::{Draft, Record, RecordId, ResourceKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// How an operation ended from the user's point of view.
///
/// The matching notification carries the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Succeeded
    }
}

/// Drives remote CRUD calls and keeps local state consistent with them.
///
/// Cloning is cheap; clones share the same state.
#[derive(Clone)]
pub struct SessionController {
    api: Arc<dyn ResourceApi>,
    state: Arc<RwLock<SessionState>>,
    config: SessionConfig,
}

impl SessionController {
    /// Creates a controller with empty caches and no edit session.
    pub fn new(api: Arc<dyn ResourceApi>, config: SessionConfig) -> Self {
        debug!("Session controller using {}", api.describe());
        Self {
            api,
            state: Arc::new(RwLock::new(SessionState::new(config.initial_kind))),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // ── Reads ────────────────────────────────────────────────────

    pub async fn active_kind(&self) -> ResourceKind {
        self.state.read().await.active_kind()
    }

    /// Cached records of `kind`, in service order.
    pub async fn records(&self, kind: ResourceKind) -> Vec<Record> {
        self.state.read().await.cache().read(kind).to_vec()
    }

    /// A cached record, e.g. to pre-populate an edit form.
    pub async fn find_record(&self, kind: ResourceKind, id: &RecordId) -> Option<Record> {
        self.state.read().await.cache().find(kind, id).cloned()
    }

    pub async fn edit_session(&self) -> EditSession {
        self.state.read().await.edit_session().clone()
    }

    /// True while a remote call for the active kind is outstanding.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn is_loading_kind(&self, kind: ResourceKind) -> bool {
        self.state.read().await.is_loading_kind(kind)
    }

    /// The live notification, if it has not expired or been replaced.
    pub async fn notification(&self) -> Option<Notification> {
        self.state.read().await.notification().cloned()
    }

    /// A consistent copy of the whole state, for rendering.
    ///
    /// Clones every cached collection. Prefer [`records`](Self::records)
    /// or the other per-field reads when only part of the state is needed.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    // ── Selection & fetch ────────────────────────────────────────

    /// Makes `kind` active and refreshes it.
    ///
    /// The edit session is cleared before the fetch is dispatched, so it
    /// never outlives a kind switch. Reselecting the active kind is a
    /// manual refresh.
    pub async fn select(&self, kind: ResourceKind) -> Outcome {
        {
            let mut state = self.state.write().await;
            if let Some(cleared) = state.activate(kind) {
                debug!("Cleared edit session {:?} on switch to {}", cleared, kind);
            }
        }
        debug!("Selected {}", kind.plural());
        self.fetch(kind).await
    }

    /// Replaces the cache for `kind` with the service's current collection.
    ///
    /// On failure the cache is left untouched and an error notification
    /// is posted. A result is applied to the kind it was requested for,
    /// and dropped if a newer fetch of that kind already landed.
    pub async fn fetch(&self, kind: ResourceKind) -> Outcome {
        let ticket = {
            let mut state = self.state.write().await;
            state.begin_request(kind);
            state.issue_fetch(kind)
        };

        let result = self.api.list(kind).await;

        let mut state = self.state.write().await;
        state.end_request(kind);
        match result {
            Ok(records) => {
                let count = records.len();
                if state.complete_fetch(kind, ticket, records) {
                    debug!("Cached {} {}", count, kind.plural());
                } else {
                    debug!("Dropped stale {} fetch (ticket {})", kind.plural(), ticket);
                }
                Outcome::Succeeded
            }
            Err(e) => {
                warn!("Loading {} failed: {}", kind.plural(), e);
                self.notify(
                    &mut state,
                    Notification::error(format!("Failed to load {}", kind.plural())),
                );
                Outcome::Failed
            }
        }
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Creates a record, then refetches `kind` to learn its id.
    pub async fn create(&self, kind: ResourceKind, draft: &Draft) -> SyncResult<Outcome> {
        check_draft(kind, draft)?;

        self.state.write().await.begin_request(kind);
        let result = self.api.create(draft).await;

        let succeeded = {
            let mut state = self.state.write().await;
            state.end_request(kind);
            self.conclude(&mut state, kind, "create", "created", result.map(drop))
        };

        if succeeded {
            self.fetch(kind).await;
            Ok(Outcome::Succeeded)
        } else {
            Ok(Outcome::Failed)
        }
    }

    /// Replaces record `id`, ends the edit session and refetches `kind`.
    ///
    /// On failure the edit session is kept so the caller can retry or
    /// cancel.
    pub async fn update(
        &self,
        kind: ResourceKind,
        id: &RecordId,
        draft: &Draft,
    ) -> SyncResult<Outcome> {
        check_draft(kind, draft)?;
        check_id(id)?;

        self.state.write().await.begin_request(kind);
        let result = self.api.update(kind, id, draft).await;

        let succeeded = {
            let mut state = self.state.write().await;
            state.end_request(kind);
            let succeeded =
                self.conclude(&mut state, kind, "update", "updated", result.map(drop));
            if succeeded {
                state.clear_edit();
            }
            succeeded
        };

        if succeeded {
            self.fetch(kind).await;
            Ok(Outcome::Succeeded)
        } else {
            Ok(Outcome::Failed)
        }
    }

    /// Deletes record `id`, then refetches `kind`.
    ///
    /// Callers must have obtained explicit user confirmation first.
    pub async fn remove(&self, kind: ResourceKind, id: &RecordId) -> SyncResult<Outcome> {
        check_id(id)?;

        self.state.write().await.begin_request(kind);
        let result = self.api.delete(kind, id).await;

        let succeeded = {
            let mut state = self.state.write().await;
            state.end_request(kind);
            self.conclude(&mut state, kind, "delete", "deleted", result)
        };

        if succeeded {
            self.fetch(kind).await;
            Ok(Outcome::Succeeded)
        } else {
            Ok(Outcome::Failed)
        }
    }

    // ── Edit session ─────────────────────────────────────────────

    /// Starts editing record `id`. `kind` must be the active kind.
    pub async fn begin_edit(&self, kind: ResourceKind, id: RecordId) -> SyncResult<()> {
        check_id(&id)?;

        let mut state = self.state.write().await;
        let active = state.active_kind();
        if active != kind {
            return Err(SyncError::Precondition(format!(
                "cannot edit {} while {} is active",
                kind.plural(),
                active.plural()
            )));
        }

        debug!("Editing {} {}", kind.label(), id);
        state.begin_edit(kind, id);
        Ok(())
    }

    /// Ends the edit session, if any. Never fails, never notifies.
    pub async fn cancel_edit(&self) {
        if let Some(cleared) = self.state.write().await.clear_edit() {
            debug!("Cancelled edit session {:?}", cleared);
        }
    }

    // ── Internals ────────────────────────────────────────────────

    /// Posts the notification for a finished mutation. Returns whether it
    /// succeeded.
    fn conclude(
        &self,
        state: &mut SessionState,
        kind: ResourceKind,
        verb: &str,
        past: &str,
        result: SyncResult<()>,
    ) -> bool {
        match result {
            Ok(()) => {
                info!("{} {}", kind.label(), past);
                self.notify(state, Notification::success(format!("{} {past}", kind.label())));
                true
            }
            Err(e) => {
                warn!("Failed to {} {}: {}", verb, noun(kind), e);
                let fallback = format!("Failed to {verb} {}", noun(kind));
                self.notify(state, Notification::error(e.user_message(&fallback)));
                false
            }
        }
    }

    /// Replaces the live notification and arms its expiry timer.
    fn notify(&self, state: &mut SessionState, notification: Notification) {
        let generation = state.post_notification(notification);
        let ttl = Duration::from_millis(self.config.notification_ttl_ms);
        let shared = Arc::clone(&self.state);

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if shared.write().await.expire_notification(generation) {
                debug!("Notification {} expired", generation);
            }
        });
    }
}

/// Lowercase singular label, e.g. "tracked animal".
fn noun(kind: ResourceKind) -> String {
    kind.label().to_lowercase()
}

fn check_draft(kind: ResourceKind, draft: &Draft) -> SyncResult<()> {
    draft
        .expect_kind(kind)
        .map_err(|e| SyncError::Precondition(e.to_string()))
}

fn check_id(id: &RecordId) -> SyncResult<()> {
    if id.is_blank() {
        return Err(SyncError::Precondition("record id must not be empty".to_string()));
    }
    Ok(())
}
