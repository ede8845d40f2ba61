//! Nil queries over heterogeneous containers

use nillable_core::{
    Dynamic, Nillable, NillableExt, SentinelPolicy, TypeDesc, as_nillable, erase, is_nil,
    is_nil_with,
};

use crate::common::{init_tracing, sample_record};

#[test]
fn optionals_in_any_array_are_nillable() {
    let absent: Option<String> = None;
    let present: Option<String> = Some(String::from("OptString"));
    let values: Vec<Dynamic> = vec![erase(absent), erase(present)];

    for value in &values {
        assert!(
            as_nillable(&**value).is_some(),
            "{value:?} was not found to be optional"
        );
    }
}

#[test]
fn record_fields_report_absence() {
    init_tracing();
    let record = sample_record();

    assert!(!is_nil(&record["name"]));
    assert!(is_nil(&record["nickname"]));
    assert!(!is_nil(&record["age"]));
    assert!(is_nil(&record["manager"]));
    assert!(!is_nil(&record["team"]));
    assert!(!is_nil(&record["office"]));
    assert!(is_nil(&record["badge"]));
}

#[test]
fn sentinel_policy_only_changes_the_sentinel() {
    let record = sample_record();
    let policy = SentinelPolicy::TreatAsValue;

    let mut nil_fields: Vec<&str> = record
        .iter()
        .filter_map(|(key, value)| is_nil_with(value, policy).then_some(*key))
        .collect();
    nil_fields.sort_unstable();
    assert_eq!(nil_fields, ["badge", "nickname"]);
}

#[test]
fn root_nil_sees_through_nesting() {
    init_tracing();
    let record = sample_record();

    let root_nil = |key: &str| {
        record[key]
            .as_nillable()
            .is_some_and(|nillable| nillable.is_root_nil())
    };
    assert!(!root_nil("team"));
    assert!(root_nil("office"));
    assert!(root_nil("manager"));
    assert!(!root_nil("age"));
}

#[test]
fn wrapped_types_survive_erasure() {
    let record = sample_record();

    let nickname = record["nickname"].as_nillable().unwrap();
    assert!(nickname.is_nil());
    assert!(nickname.is_wrapped_type::<String>());

    let team = record["team"].as_nillable().unwrap();
    assert_eq!(team.wrapped_type(), TypeDesc::of::<Option<String>>());
    assert_eq!(team.wrapped_root_type(), TypeDesc::of::<String>());
    assert_eq!(team.unwrap_root_payload_as::<String>(), "compilers");

    let badge = record["badge"].as_nillable().unwrap();
    assert_eq!(badge.wrapped_type(), TypeDesc::any());
}

#[test]
fn checked_unwrap_explains_failure() {
    let record = sample_record();

    let name = record["name"].as_nillable().unwrap();
    assert_eq!(name.downcast_payload::<String>().unwrap(), "Ada");
    let err = name.downcast_payload::<u32>().unwrap_err();
    assert!(err.to_string().contains("cannot narrow"));

    let office = record["office"].as_nillable().unwrap();
    assert!(office.downcast_root::<String>().unwrap_err().is_nil());
}
