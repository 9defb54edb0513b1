//! Creation and modification payloads.
//!
//! A draft is a record shape without its `id`; the service assigns ids on
//! creation and receives them in the path on update.

use crate::ResourceKind;
use crate::record::{Enclosure, Gender, Person, Specialist, TrackedAnimal};
use crate::resource::decode_draft;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialistDraft {
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub years_of_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureDraft {
    #[serde(rename = "type")]
    pub enclosure_type: String,
    pub capacity: u32,
    pub location: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedAnimalDraft {
    pub name: String,
    pub species: String,
    pub age: u32,
    pub gender: Gender,
}

/// A payload of any kind. Serializes as the bare kind-specific shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Draft {
    Person(PersonDraft),
    Specialist(SpecialistDraft),
    Enclosure(EnclosureDraft),
    TrackedAnimal(TrackedAnimalDraft),
}

impl Draft {
    /// Decodes a payload for `kind` from loosely built JSON (e.g. form input).
    pub fn decode(kind: ResourceKind, value: serde_json::Value) -> crate::Result<Self> {
        match kind {
            ResourceKind::Person => decode_draft::<Person>(value),
            ResourceKind::Specialist => decode_draft::<Specialist>(value),
            ResourceKind::Enclosure => decode_draft::<Enclosure>(value),
            ResourceKind::TrackedAnimal => decode_draft::<TrackedAnimal>(value),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Draft::Person(_) => ResourceKind::Person,
            Draft::Specialist(_) => ResourceKind::Specialist,
            Draft::Enclosure(_) => ResourceKind::Enclosure,
            Draft::TrackedAnimal(_) => ResourceKind::TrackedAnimal,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Draft::Person(d) => &d.name,
            Draft::Specialist(d) => &d.name,
            Draft::Enclosure(d) => &d.name,
            Draft::TrackedAnimal(d) => &d.name,
        }
    }

    /// Required text fields that are empty or whitespace only, by wire name.
    ///
    /// Numeric and enumerated fields are always present once the draft
    /// exists, so only text fields can be reported here.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let text_fields: Vec<(&'static str, &str)> = match self {
            Draft::Person(d) => vec![("name", &d.name), ("email", &d.email)],
            Draft::Specialist(d) => vec![
                ("name", &d.name),
                ("email", &d.email),
                ("specialization", &d.specialization),
            ],
            Draft::Enclosure(d) => vec![
                ("type", &d.enclosure_type),
                ("location", &d.location),
                ("name", &d.name),
            ],
            Draft::TrackedAnimal(d) => vec![("name", &d.name), ("species", &d.species)],
        };

        text_fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Ensures the draft targets `expected`.
    pub fn expect_kind(&self, expected: ResourceKind) -> crate::Result<()> {
        let actual = self.kind();
        if actual == expected {
            Ok(())
        } else {
            Err(crate::Error::KindMismatch { expected, actual })
        }
    }
}

impl From<PersonDraft> for Draft {
    fn from(d: PersonDraft) -> Self {
        Draft::Person(d)
    }
}

impl From<SpecialistDraft> for Draft {
    fn from(d: SpecialistDraft) -> Self {
        Draft::Specialist(d)
    }
}

impl From<EnclosureDraft> for Draft {
    fn from(d: EnclosureDraft) -> Self {
        Draft::Enclosure(d)
    }
}

impl From<TrackedAnimalDraft> for Draft {
    fn from(d: TrackedAnimalDraft) -> Self {
        Draft::TrackedAnimal(d)
    }
}
