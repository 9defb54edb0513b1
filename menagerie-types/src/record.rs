//! Record shapes as returned by the remote service.

use crate::draft::Draft;
use crate::resource::{Resource, decode_record};
use crate::{RecordId, ResourceKind};
use serde::{Deserialize, Serialize};

/// A person (user) known to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// A staff member with a specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialist {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub years_of_experience: u32,
}

/// An enclosure housing animals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enclosure {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(rename = "type")]
    pub enclosure_type: String,
    pub capacity: u32,
    pub location: String,
    pub name: String,
}

/// An individually tracked animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedAnimal {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub name: String,
    pub species: String,
    pub age: u32,
    pub gender: Gender,
}

/// Gender of a tracked animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male", alias = "Male", alias = "MALE")]
    Male,
    #[serde(rename = "female", alias = "Female", alias = "FEMALE")]
    Female,
}

/// A record of any kind.
///
/// Serializes as the bare kind-specific shape. Decoding needs the kind to
/// be known up front, see [`Record::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Person(Person),
    Specialist(Specialist),
    Enclosure(Enclosure),
    TrackedAnimal(TrackedAnimal),
}

impl Record {
    /// Decodes one element of a collection response for `kind`.
    pub fn decode(kind: ResourceKind, value: serde_json::Value) -> crate::Result<Self> {
        match kind {
            ResourceKind::Person => decode_record::<Person>(value),
            ResourceKind::Specialist => decode_record::<Specialist>(value),
            ResourceKind::Enclosure => decode_record::<Enclosure>(value),
            ResourceKind::TrackedAnimal => decode_record::<TrackedAnimal>(value),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Record::Person(_) => Person::KIND,
            Record::Specialist(_) => Specialist::KIND,
            Record::Enclosure(_) => Enclosure::KIND,
            Record::TrackedAnimal(_) => TrackedAnimal::KIND,
        }
    }

    pub fn id(&self) -> &RecordId {
        match self {
            Record::Person(r) => r.id(),
            Record::Specialist(r) => r.id(),
            Record::Enclosure(r) => r.id(),
            Record::TrackedAnimal(r) => r.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Person(r) => Resource::name(r),
            Record::Specialist(r) => Resource::name(r),
            Record::Enclosure(r) => Resource::name(r),
            Record::TrackedAnimal(r) => Resource::name(r),
        }
    }

    /// Builds the payload that would recreate this record, minus its id.
    /// Used to pre-populate edit forms.
    pub fn to_draft(&self) -> Draft {
        match self {
            Record::Person(r) => r.to_draft().into(),
            Record::Specialist(r) => r.to_draft().into(),
            Record::Enclosure(r) => r.to_draft().into(),
            Record::TrackedAnimal(r) => r.to_draft().into(),
        }
    }
}

impl From<Person> for Record {
    fn from(r: Person) -> Self {
        Record::Person(r)
    }
}

impl From<Specialist> for Record {
    fn from(r: Specialist) -> Self {
        Record::Specialist(r)
    }
}

impl From<Enclosure> for Record {
    fn from(r: Enclosure) -> Self {
        Record::Enclosure(r)
    }
}

impl From<TrackedAnimal> for Record {
    fn from(r: TrackedAnimal) -> Self {
        Record::TrackedAnimal(r)
    }
}
