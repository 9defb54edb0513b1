use menagerie_types::{Error, ResourceKind};

// ── Naming ───────────────────────────────────────────────────────

#[test]
fn all_lists_every_kind_once() {
    assert_eq!(ResourceKind::ALL.len(), 4);
    assert_eq!(ResourceKind::ALL[0], ResourceKind::Person);
    assert_eq!(ResourceKind::ALL[3], ResourceKind::TrackedAnimal);
}

#[test]
fn path_segments() {
    assert_eq!(ResourceKind::Person.path_segment(), "people");
    assert_eq!(ResourceKind::Specialist.path_segment(), "specialists");
    assert_eq!(ResourceKind::Enclosure.path_segment(), "enclosures");
    assert_eq!(ResourceKind::TrackedAnimal.path_segment(), "tracked-animals");
}

#[test]
fn display_uses_label() {
    assert_eq!(ResourceKind::Enclosure.to_string(), "Enclosure");
    assert_eq!(ResourceKind::TrackedAnimal.to_string(), "Tracked animal");
}

#[test]
fn plural_is_lowercase() {
    for kind in ResourceKind::ALL {
        let plural = kind.plural();
        assert_eq!(plural, plural.to_lowercase());
    }
}

#[test]
fn required_fields_include_name() {
    for kind in ResourceKind::ALL {
        assert!(kind.required_fields().contains(&"name"), "{kind} lacks name");
    }
    assert!(ResourceKind::Specialist
        .required_fields()
        .contains(&"yearsOfExperience"));
    assert!(ResourceKind::Enclosure.required_fields().contains(&"type"));
}

#[test]
fn numeric_fields_are_required_and_never_text() {
    for kind in ResourceKind::ALL {
        for field in kind.numeric_fields() {
            assert!(kind.required_fields().contains(field), "{kind} {field}");
        }
        assert!(!kind.is_numeric_field("name"));
    }
    assert!(ResourceKind::Enclosure.is_numeric_field("capacity"));
    assert!(ResourceKind::Specialist.is_numeric_field("yearsOfExperience"));
    assert!(ResourceKind::TrackedAnimal.is_numeric_field("age"));
    assert!(ResourceKind::Person.numeric_fields().is_empty());
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_accepts_common_spellings() {
    let cases = [
        ("person", ResourceKind::Person),
        ("People", ResourceKind::Person),
        ("users", ResourceKind::Person),
        ("specialist", ResourceKind::Specialist),
        ("SPECIALISTS", ResourceKind::Specialist),
        ("enclosure", ResourceKind::Enclosure),
        ("tracked-animals", ResourceKind::TrackedAnimal),
        ("tracked_animal", ResourceKind::TrackedAnimal),
        ("Tracked animal", ResourceKind::TrackedAnimal),
        ("animals", ResourceKind::TrackedAnimal),
    ];
    for (input, expected) in cases {
        assert_eq!(input.parse::<ResourceKind>().unwrap(), expected, "input {input}");
    }
}

#[test]
fn parse_round_trips_path_segment_and_label() {
    for kind in ResourceKind::ALL {
        assert_eq!(kind.path_segment().parse::<ResourceKind>().unwrap(), kind);
        assert_eq!(kind.label().parse::<ResourceKind>().unwrap(), kind);
    }
}

#[test]
fn parse_rejects_unknown() {
    let err = "giraffes".parse::<ResourceKind>().unwrap_err();
    assert!(matches!(err, Error::UnknownKind(ref s) if s == "giraffes"));
    assert!(err.to_string().contains("unknown resource kind"));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_snake_case() {
    let json = serde_json::to_string(&ResourceKind::TrackedAnimal).unwrap();
    assert_eq!(json, "\"tracked_animal\"");
    let back: ResourceKind = serde_json::from_str("\"specialist\"").unwrap();
    assert_eq!(back, ResourceKind::Specialist);
}
