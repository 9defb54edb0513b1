//! Resource-synchronization core for the Menagerie client.
//!
//! Mediates between a view layer and a remote REST service exposing four
//! record collections (people, specialists, enclosures, tracked animals).
//!
//! # Architecture
//!
//! - **Cache**: last-known-good snapshot of each collection, replaced
//!   wholesale on every successful fetch
//! - **Controller**: the single writer of all local state. Selects the
//!   active collection, drives remote CRUD calls, owns the edit session,
//!   the loading flag and the notification slot
//! - **Api**: the `ResourceApi` seam over the remote service, with a
//!   reqwest implementation in [`http`]
//!
//! Local state only changes after a remote call succeeds; mutations are
//! always followed by a fresh fetch rather than patched into the cache.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use menagerie_sync::{ApiConfig, HttpResourceApi, SessionConfig, SessionController};
//! use menagerie_types::ResourceKind;
//!
//! # async fn demo() -> menagerie_sync::SyncResult<()> {
//! let api = HttpResourceApi::new(ApiConfig::default())?;
//! let controller = SessionController::new(Arc::new(api), SessionConfig::default());
//!
//! controller.select(ResourceKind::Enclosure).await;
//! for record in controller.records(ResourceKind::Enclosure).await {
//!     println!("{} {}", record.id(), record.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
mod config;
mod controller;
mod error;
pub mod http;
pub mod notification;
pub mod state;

pub use api::ResourceApi;
pub use cache::CollectionCache;
pub use config::{ApiConfig, SessionConfig};
pub use controller::{Outcome, SessionController};
pub use error::{SyncError, SyncResult};
pub use http::HttpResourceApi;
pub use notification::{Notification, Severity};
pub use state::{EditSession, SessionState};
