// Foo documents end to end

use demos::Foo;
use serdec::{Error, ErrorCategory, EventKind};

const FOO: &str = "investigator: 'Ethan D. Twardy'\nexposure_time: 0.001\n";

#[test_log::test]
fn well_formed_round_trip() {
    let foo = Foo::from_yaml(FOO).unwrap();
    assert_eq!(foo.investigator, "Ethan D. Twardy");
    assert_eq!(foo.exposure_time, 0.001);
}

#[test_log::test]
fn bundled_data_file_loads() {
    let text = include_str!("../data/foo.yaml");
    assert_eq!(Foo::from_yaml(text), Foo::from_yaml(FOO));
}

#[test_log::test]
fn swapped_fields_are_a_field_name_error() {
    let input = "exposure_time: 0.001\ninvestigator: 'Ethan D. Twardy'\n";
    let error = Foo::from_yaml(input).unwrap_err();
    assert_eq!(error.category(), ErrorCategory::FieldName);
    assert_eq!(
        error.to_string(),
        "expected field 'investigator', got field 'exposure_time'"
    );
}

#[test_log::test]
fn non_numeric_exposure_time() {
    let input = "investigator: 'Ethan D. Twardy'\nexposure_time: not_a_number\n";
    let error = Foo::from_yaml(input).unwrap_err();
    assert_eq!(
        error,
        Error::Conversion {
            token: "not_a_number".into(),
            target: "double",
        }
    );
    assert!(error.to_string().contains("not_a_number"));
}

#[test_log::test]
fn oversized_exposure_time() {
    let input = format!(
        "investigator: 'Ethan D. Twardy'\nexposure_time: 0.{}\n",
        "1".repeat(100)
    );
    let error = Foo::from_yaml(&input).unwrap_err();
    assert_eq!(error, Error::TooLong { max: 64 });
    assert_eq!(error.to_string(), "field exceeds maximum length (64)");
}

#[test_log::test]
fn earliest_violation_is_reported() {
    // Sequence where a mapping belongs, and a bad number later
    let input = "- investigator\n- exposure_time: nope\n";
    assert_eq!(
        Foo::from_yaml(input),
        Err(Error::mismatch(EventKind::MappingStart, EventKind::SequenceStart))
    );

    // Bad key first, bad number second
    let input = "investigatr: x\nexposure_time: nope\n";
    assert!(matches!(
        Foo::from_yaml(input),
        Err(Error::FieldName { .. })
    ));

    // Bad number first, extra key second
    let input = "investigator: x\nexposure_time: nope\nextra: 1\n";
    assert!(matches!(
        Foo::from_yaml(input),
        Err(Error::Conversion { .. })
    ));
}

#[test_log::test]
fn repeated_passes_allocate_per_pass() {
    for _ in 0..1000 {
        let mut foo = Foo::from_yaml(FOO).unwrap();
        assert!(foo.investigator.capacity() >= foo.investigator.len());
        foo.release();
        assert_eq!(foo.investigator.capacity(), 0);
    }
}

#[test_log::test]
fn release_is_idempotent() {
    let mut foo = Foo::from_yaml(FOO).unwrap();
    foo.release();
    foo.release();
    assert_eq!(foo.investigator, "");
    assert_eq!(foo.exposure_time, 0.001);
}
