//! The nil-reflection capability set.
//!
//! [`Nillable`] is object safe so it can be queried through `&dyn Nillable` obtained from
//! an erased value. The type-narrowing operations are generic and live on
//! [`NillableExt`], which every nillable type (and `dyn Nillable`) gets for free.

use std::any::{Any, type_name};

use nillable_types::UnwrapError;
use tracing::trace;

use crate::desc::TypeDesc;
use crate::reflect::Reflect;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Panics for an unwrap of an absent value of type `desc`.
#[cold]
#[track_caller]
pub(crate) fn absent_unwrap(desc: TypeDesc) -> ! {
    panic!("unwrap of absent value (wrapped type {desc})")
}

#[track_caller]
fn narrow<T: Any>(value: &dyn Reflect) -> &T {
    match value.downcast_ref::<T>() {
        Some(narrowed) => narrowed,
        None => panic!(
            "cannot narrow {} to {}",
            value.type_desc(),
            type_name::<T>()
        ),
    }
}

fn try_narrow<T: Any>(value: &dyn Reflect) -> Result<&T, UnwrapError> {
    value
        .downcast_ref::<T>()
        .ok_or_else(|| UnwrapError::TypeMismatch {
            expected: type_name::<T>(),
            found: value.type_desc().name(),
        })
}

/// A value that can be asked whether it is absent and unwrapped generically.
///
/// Implemented only for `Option<T>` and [`Null`](crate::Null). Outside crates can query
/// the trait but not implement it:
///
/// ```compile_fail
/// use nillable_core::{Nillable, Reflect, TypeDesc, impl_reflect};
///
/// struct Maybe;
/// impl_reflect!(Maybe);
///
/// impl Nillable for Maybe {
///     fn wrapped_type(&self) -> TypeDesc {
///         TypeDesc::any()
///     }
///     fn is_nil(&self) -> bool {
///         true
///     }
///     fn unwrap_payload(&self) -> &dyn Reflect {
///         unreachable!()
///     }
/// }
/// ```
///
/// The `unwrap_*` operations treat absence as a contract violation and panic. Use the
/// `Option`-returning counterparts when absence is expected.
pub trait Nillable: Reflect + Sealed {
    /// The payload type this value holds when present, regardless of current state.
    fn wrapped_type(&self) -> TypeDesc;

    /// The payload type with every level of optional wrapping removed.
    fn wrapped_root_type(&self) -> TypeDesc {
        self.wrapped_type().root()
    }

    fn is_nil(&self) -> bool;

    /// Whether unwrapping through every nesting level ends in absence.
    fn is_root_nil(&self) -> bool {
        self.root_payload().is_none()
    }

    /// The payload at this level. Panics if absent.
    fn unwrap_payload(&self) -> &dyn Reflect;

    fn payload(&self) -> Option<&dyn Reflect> {
        if self.is_nil() {
            None
        } else {
            Some(self.unwrap_payload())
        }
    }

    /// The innermost payload. Panics if any level is absent.
    fn unwrap_root_payload(&self) -> &dyn Reflect {
        let value = self.unwrap_payload();
        match value.as_nillable() {
            Some(inner) => {
                trace!(ty = %inner.type_desc(), "unwrapping nested optional");
                inner.unwrap_root_payload()
            }
            None => value,
        }
    }

    /// The innermost payload, or `None` as soon as any level is absent.
    fn root_payload(&self) -> Option<&dyn Reflect> {
        let value = self.payload()?;
        match value.as_nillable() {
            Some(inner) => {
                trace!(ty = %inner.type_desc(), "descending into nested optional");
                inner.root_payload()
            }
            None => Some(value),
        }
    }
}

/// Type tests and type-narrowing unwraps for any [`Nillable`].
pub trait NillableExt: Nillable {
    fn is_wrapped_type<T: ?Sized + 'static>(&self) -> bool {
        self.wrapped_type().is::<T>()
    }

    fn is_root_wrapped_type<T: ?Sized + 'static>(&self) -> bool {
        self.wrapped_root_type().is::<T>()
    }

    fn wraps(&self, desc: TypeDesc) -> bool {
        self.wrapped_type() == desc
    }

    fn root_wraps(&self, desc: TypeDesc) -> bool {
        self.wrapped_root_type() == desc
    }

    /// Panics if absent or if the payload is not a `T`.
    #[track_caller]
    fn unwrap_payload_as<T: Any>(&self) -> &T {
        narrow(self.unwrap_payload())
    }

    fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload()?.downcast_ref::<T>()
    }

    /// Panics if any level is absent or if the root payload is not a `T`.
    #[track_caller]
    fn unwrap_root_payload_as<T: Any>(&self) -> &T {
        narrow(self.unwrap_root_payload())
    }

    fn root_payload_as<T: Any>(&self) -> Option<&T> {
        self.root_payload()?.downcast_ref::<T>()
    }

    fn downcast_payload<T: Any>(&self) -> Result<&T, UnwrapError> {
        let value = self.payload().ok_or(UnwrapError::Nil {
            ty: self.wrapped_type().name(),
        })?;
        try_narrow(value)
    }

    fn downcast_root<T: Any>(&self) -> Result<&T, UnwrapError> {
        let value = self.root_payload().ok_or(UnwrapError::Nil {
            ty: self.wrapped_root_type().name(),
        })?;
        try_narrow(value)
    }
}

impl<N: Nillable + ?Sized> NillableExt for N {}
