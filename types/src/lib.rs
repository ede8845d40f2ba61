//! Domain types shared by the nil-reflection crates.
//!
//! This crate has no reflection logic, no IO and minimal dependencies. It holds the
//! configuration knob for sentinel handling and the error returned by checked unwraps,
//! so hosts can embed both in their own config and error types without pulling in the
//! reflection core.

mod error;
mod policy;

pub use error::UnwrapError;
pub use policy::SentinelPolicy;
