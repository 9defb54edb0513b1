//! The closed set of collections exposed by the remote service.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four supported record collections.
///
/// Determines which cache and which remote path an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Person,
    Specialist,
    Enclosure,
    TrackedAnimal,
}

impl ResourceKind {
    /// All kinds, in display order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Person,
        ResourceKind::Specialist,
        ResourceKind::Enclosure,
        ResourceKind::TrackedAnimal,
    ];

    /// Path segment of the collection on the remote service.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Person => "people",
            ResourceKind::Specialist => "specialists",
            ResourceKind::Enclosure => "enclosures",
            ResourceKind::TrackedAnimal => "tracked-animals",
        }
    }

    /// Human-readable singular label, capitalized.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Person => "Person",
            ResourceKind::Specialist => "Specialist",
            ResourceKind::Enclosure => "Enclosure",
            ResourceKind::TrackedAnimal => "Tracked animal",
        }
    }

    /// Human-readable plural, lowercase.
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Person => "people",
            ResourceKind::Specialist => "specialists",
            ResourceKind::Enclosure => "enclosures",
            ResourceKind::TrackedAnimal => "tracked animals",
        }
    }

    /// Wire names of the fields a draft of this kind must carry.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Person => &["name", "email"],
            ResourceKind::Specialist => &[
                "name",
                "email",
                "specialization",
                "yearsOfExperience",
            ],
            ResourceKind::Enclosure => &["type", "capacity", "location", "name"],
            ResourceKind::TrackedAnimal => &["name", "species", "age", "gender"],
        }
    }

    /// Wire names of the integer-valued fields. Every other field is text.
    pub fn numeric_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Person => &[],
            ResourceKind::Specialist => &["yearsOfExperience"],
            ResourceKind::Enclosure => &["capacity"],
            ResourceKind::TrackedAnimal => &["age"],
        }
    }

    pub fn is_numeric_field(self, field: &str) -> bool {
        self.numeric_fields().contains(&field)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "person" | "people" | "user" | "users" => Ok(ResourceKind::Person),
            "specialist" | "specialists" => Ok(ResourceKind::Specialist),
            "enclosure" | "enclosures" => Ok(ResourceKind::Enclosure),
            "tracked-animal" | "tracked-animals" | "trackedanimal" | "animal" | "animals" => {
                Ok(ResourceKind::TrackedAnimal)
            }
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}
