//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::collections::HashMap;

use nillable_core::{Dynamic, NULL, any_nil, erase};

/// Route `tracing` output through the test harness so descent logs show up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// A decoded record with every flavour of absence the crate knows about.
pub fn sample_record() -> HashMap<&'static str, Dynamic> {
    HashMap::from([
        ("name", erase(Some(String::from("Ada")))),
        ("nickname", erase(None::<String>)),
        ("age", erase(36_u32)),
        ("manager", erase(NULL)),
        ("team", erase(Some(Some(String::from("compilers"))))),
        ("office", erase(Some(None::<String>))),
        ("badge", any_nil()),
    ])
}
