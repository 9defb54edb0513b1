//! Remote service abstraction.
//!
//! One collection per [`ResourceKind`], each exposing list, create, update
//! and delete. Implementations report failures as [`SyncError`] and never
//! touch local state; the controller decides what a result means.
//!
//! [`SyncError`]: crate::SyncError

use crate::error::SyncResult;
use async_trait::async_trait;
use menagerie_types::{Draft, Record, RecordId, ResourceKind};

/// Abstract remote record service.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Short description of the backend, used in log lines.
    fn describe(&self) -> String;

    /// Fetches the full collection for `kind`, in service order.
    async fn list(&self, kind: ResourceKind) -> SyncResult<Vec<Record>>;

    /// Creates a record from `draft`. Returns the created record when the
    /// service echoes it back.
    async fn create(&self, draft: &Draft) -> SyncResult<Option<Record>>;

    /// Replaces the record `id` of `kind` with `draft`. Returns the updated
    /// record when the service echoes it back.
    async fn update(
        &self,
        kind: ResourceKind,
        id: &RecordId,
        draft: &Draft,
    ) -> SyncResult<Option<Record>>;

    /// Deletes the record `id` of `kind`.
    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> SyncResult<()>;
}
