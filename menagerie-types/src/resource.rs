//! Per-kind behaviour shared by the four record shapes.

use crate::draft::{Draft, EnclosureDraft, PersonDraft, SpecialistDraft, TrackedAnimalDraft};
use crate::record::{Enclosure, Person, Record, Specialist, TrackedAnimal};
use crate::{RecordId, ResourceKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record shape belonging to exactly one [`ResourceKind`].
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The collection this shape belongs to.
    const KIND: ResourceKind;

    /// Payload shape used to create or modify records of this kind.
    type Draft: Serialize + DeserializeOwned + Clone + Into<Draft>;

    fn id(&self) -> &RecordId;

    fn name(&self) -> &str;

    /// The payload that would recreate this record, minus its id.
    fn to_draft(&self) -> Self::Draft;

    fn into_record(self) -> Record;
}

/// Decodes `value` as `R` and wraps it in [`Record`].
///
/// Either `id` or `_id` may carry the identifier. When both are present
/// `id` wins.
pub(crate) fn decode_record<R: Resource>(mut value: serde_json::Value) -> crate::Result<Record> {
    if let serde_json::Value::Object(fields) = &mut value {
        if fields.contains_key("id") {
            fields.remove("_id");
        }
    }
    Ok(serde_json::from_value::<R>(value)?.into_record())
}

/// Decodes `value` as the draft type of `R` and wraps it in [`Draft`].
pub(crate) fn decode_draft<R: Resource>(value: serde_json::Value) -> crate::Result<Draft> {
    Ok(serde_json::from_value::<R::Draft>(value)?.into())
}

impl Resource for Person {
    const KIND: ResourceKind = ResourceKind::Person;
    type Draft = PersonDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> PersonDraft {
        PersonDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    fn into_record(self) -> Record {
        Record::Person(self)
    }
}

impl Resource for Specialist {
    const KIND: ResourceKind = ResourceKind::Specialist;
    type Draft = SpecialistDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> SpecialistDraft {
        SpecialistDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            specialization: self.specialization.clone(),
            years_of_experience: self.years_of_experience,
        }
    }

    fn into_record(self) -> Record {
        Record::Specialist(self)
    }
}

impl Resource for Enclosure {
    const KIND: ResourceKind = ResourceKind::Enclosure;
    type Draft = EnclosureDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> EnclosureDraft {
        EnclosureDraft {
            enclosure_type: self.enclosure_type.clone(),
            capacity: self.capacity,
            location: self.location.clone(),
            name: self.name.clone(),
        }
    }

    fn into_record(self) -> Record {
        Record::Enclosure(self)
    }
}

impl Resource for TrackedAnimal {
    const KIND: ResourceKind = ResourceKind::TrackedAnimal;
    type Draft = TrackedAnimalDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> TrackedAnimalDraft {
        TrackedAnimalDraft {
            name: self.name.clone(),
            species: self.species.clone(),
            age: self.age,
            gender: self.gender,
        }
    }

    fn into_record(self) -> Record {
        Record::TrackedAnimal(self)
    }
}
