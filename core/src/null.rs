//! The universal null sentinel.

use std::any::Any;
use std::fmt;

use crate::desc::TypeDesc;
use crate::nillable::{Nillable, Sealed, absent_unwrap};
use crate::reflect::Reflect;

/// Untyped absence for erased contexts.
///
/// Every `Null` is the same value. It wraps the top type and is always nil, so any
/// unwrap panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Null;

pub const NULL: Null = Null;

impl Reflect for Null {
    fn describe() -> TypeDesc {
        TypeDesc::sentinel::<Self>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Sealed for Null {}

impl Nillable for Null {
    fn wrapped_type(&self) -> TypeDesc {
        TypeDesc::any()
    }

    fn is_nil(&self) -> bool {
        true
    }

    fn unwrap_payload(&self) -> &dyn Reflect {
        absent_unwrap(TypeDesc::any())
    }

    fn root_payload(&self) -> Option<&dyn Reflect> {
        None
    }
}

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}
