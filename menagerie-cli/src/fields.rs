//! `key=value` field assignments from the command line.

use anyhow::{Context, Result, anyhow, bail};
use menagerie_types::{Draft, ResourceKind};
use serde_json::{Map, Value};

/// Parses one `key=value` argument for a draft of `kind`.
///
/// Integers become JSON numbers only in the kind's numeric fields. Every
/// other value, including an empty one, stays the literal text.
pub fn parse_assignment(kind: ResourceKind, raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("missing field name in '{raw}'");
    }
    Ok((key.to_string(), parse_value(kind.is_numeric_field(key), value)))
}

fn parse_value(numeric: bool, raw: &str) -> Value {
    if numeric {
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Value::from(n);
        }
    }
    Value::String(raw.to_string())
}

/// Builds a draft of `kind` from `base` (if any) overlaid with `fields`.
pub fn build_draft(kind: ResourceKind, base: Option<&Draft>, fields: &[String]) -> Result<Draft> {
    let mut object = match base {
        Some(draft) => match serde_json::to_value(draft)? {
            Value::Object(map) => map,
            other => bail!("unexpected draft shape: {other}"),
        },
        None => Map::new(),
    };

    for raw in fields {
        let (key, value) = parse_assignment(kind, raw)?;
        object.insert(key, value);
    }

    Draft::decode(kind, Value::Object(object))
        .with_context(|| format!("invalid {} fields", kind.label().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_types::{EnclosureDraft, PersonDraft, SpecialistDraft};
    use pretty_assertions::assert_eq;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numeric_fields_parse_as_integers() {
        let (key, value) = parse_assignment(ResourceKind::Enclosure, "capacity=12").unwrap();
        assert_eq!(key, "capacity");
        assert_eq!(value, Value::from(12));
        assert_eq!(
            parse_assignment(ResourceKind::TrackedAnimal, "age= 4").unwrap().1,
            Value::from(4)
        );
    }

    #[test]
    fn text_fields_stay_literal() {
        assert_eq!(
            parse_assignment(ResourceKind::Person, "name=007").unwrap().1,
            Value::String("007".into())
        );
        assert_eq!(
            parse_assignment(ResourceKind::Enclosure, "location=North Wing").unwrap().1,
            Value::String("North Wing".into())
        );
        assert_eq!(
            parse_assignment(ResourceKind::Person, "name=").unwrap().1,
            Value::String(String::new())
        );
    }

    #[test]
    fn non_integer_in_numeric_field_stays_text() {
        assert_eq!(
            parse_assignment(ResourceKind::Enclosure, "capacity=lots").unwrap().1,
            Value::String("lots".into())
        );
        assert!(build_draft(
            ResourceKind::Enclosure,
            None,
            &args(&["type=Pond", "capacity=lots", "location=South", "name=Lake"]),
        )
        .is_err());
    }

    #[test]
    fn value_may_contain_equals() {
        let (key, value) = parse_assignment(ResourceKind::Person, "name=a=b").unwrap();
        assert_eq!(key, "name");
        assert_eq!(value, Value::String("a=b".into()));
    }

    #[test]
    fn malformed_assignments() {
        assert!(parse_assignment(ResourceKind::Enclosure, "capacity").is_err());
        assert!(parse_assignment(ResourceKind::Enclosure, "=12").is_err());
    }

    #[test]
    fn builds_fresh_draft() {
        let draft = build_draft(
            ResourceKind::Enclosure,
            None,
            &args(&["type=Savanna", "capacity=12", "location=North", "name=Plains"]),
        )
        .unwrap();

        assert_eq!(
            draft,
            Draft::Enclosure(EnclosureDraft {
                enclosure_type: "Savanna".into(),
                capacity: 12,
                location: "North".into(),
                name: "Plains".into(),
            })
        );
    }

    #[test]
    fn fresh_draft_missing_field_is_error() {
        let err = build_draft(ResourceKind::Person, None, &args(&["name=Kim"])).unwrap_err();
        assert!(err.to_string().contains("invalid person fields"));
    }

    #[test]
    fn overlay_replaces_only_given_fields() {
        let base = Draft::Enclosure(EnclosureDraft {
            enclosure_type: "Savanna".into(),
            capacity: 12,
            location: "North".into(),
            name: "Plains".into(),
        });

        let draft = build_draft(ResourceKind::Enclosure, Some(&base), &args(&["capacity=15"]))
            .unwrap();

        match draft {
            Draft::Enclosure(d) => {
                assert_eq!(d.capacity, 15);
                assert_eq!(d.name, "Plains");
            }
            other => panic!("unexpected draft {other:?}"),
        }
    }

    #[test]
    fn overlay_keeps_string_fields_textual() {
        let base = Draft::Person(PersonDraft {
            name: "Kim".into(),
            email: "kim@zoo.org".into(),
        });

        let draft = build_draft(ResourceKind::Person, Some(&base), &args(&["name=1984"])).unwrap();

        assert_eq!(draft.name(), "1984");
    }

    #[test]
    fn fresh_draft_keeps_numeric_looking_text() {
        let draft = build_draft(
            ResourceKind::Specialist,
            None,
            &args(&[
                "name=007",
                "email=bond@mi6.uk",
                "specialization=42",
                "yearsOfExperience=12",
            ]),
        )
        .unwrap();

        assert_eq!(
            draft,
            Draft::Specialist(SpecialistDraft {
                name: "007".into(),
                email: "bond@mi6.uk".into(),
                specialization: "42".into(),
                years_of_experience: 12,
            })
        );
    }
}
