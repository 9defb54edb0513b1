//! Core type definitions for the Menagerie client.
//!
//! This crate defines the records exchanged with the remote service:
//! - The closed set of collections ([`ResourceKind`])
//! - Server-assigned record identifiers ([`RecordId`])
//! - The four record shapes and their [`Record`] sum type
//! - Creation/modification payloads ([`Draft`]), i.e. records without an id
//!
//! Nothing here performs I/O. The sync layer decides where records come
//! from and when caches change.

mod draft;
mod ids;
mod kind;
mod record;
mod resource;

pub use draft::{Draft, EnclosureDraft, PersonDraft, SpecialistDraft, TrackedAnimalDraft};
pub use ids::RecordId;
pub use kind::ResourceKind;
pub use record::{Enclosure, Gender, Person, Record, Specialist, TrackedAnimal};
pub use resource::Resource;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: ResourceKind,
        actual: ResourceKind,
    },
}
