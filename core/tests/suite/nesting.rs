//! Root unwrapping through nested optionals

use nillable_core::{Dynamic, NULL, Nillable, NillableExt, TypeDesc, erase};

use crate::common::init_tracing;

#[test]
fn double_optional_collapses_to_string() {
    init_tracing();
    let value: Option<Option<String>> = Some(Some(String::from("hello")));

    assert_eq!(value.wrapped_type(), TypeDesc::of::<Option<String>>());
    assert_eq!(value.wrapped_root_type(), TypeDesc::of::<String>());
    assert_eq!(value.root_payload_as::<String>().unwrap(), "hello");
}

#[test]
fn wrapped_root_type_matches_runtime_root_at_any_depth() {
    let value: Option<Option<Option<Option<char>>>> = Some(Some(Some(Some('x'))));
    let root = value.root_payload().unwrap();

    assert_eq!(value.wrapped_root_type(), root.type_desc());
    assert!(value.is_root_wrapped_type::<char>());
}

#[test]
fn first_absent_level_short_circuits() {
    let value: Option<Option<Option<u8>>> = Some(None);
    assert!(!value.is_nil());
    assert!(value.is_root_nil());
    assert_eq!(value.root_payload_as::<u8>(), None);
    assert_eq!(value.wrapped_root_type(), TypeDesc::of::<u8>());
}

#[test]
fn sentinel_inside_optional_is_root_nil() {
    let value = Some(NULL);
    assert!(!value.is_nil());
    assert!(value.is_root_nil());
}

#[test]
fn boxed_nesting_is_followed() {
    init_tracing();
    let inner: Dynamic = erase(Some(Some(-3_i16)));
    let value: Option<Dynamic> = Some(inner);

    assert_eq!(value.root_payload_as::<i16>(), Some(&-3));
    assert!(!value.is_root_nil());
}

#[test]
#[should_panic(expected = "unwrap of absent value")]
fn forced_root_unwrap_of_absent_inner_panics() {
    let value: Option<Option<Option<u8>>> = Some(Some(None));
    let _ = value.unwrap_root_payload();
}
