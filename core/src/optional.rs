//! `Option<T>` as the generic optional variant, plus the statically typed extension.

use std::any::Any;

use crate::desc::TypeDesc;
use crate::nillable::{Nillable, Sealed, absent_unwrap};
use crate::reflect::{Dynamic, Reflect, erase};

/// Absent value of the top type. Erase it with [`any_nil`] to store "no value" in a
/// heterogeneous container.
pub const ANY_NIL: Option<Dynamic> = None;

#[must_use]
pub fn any_nil() -> Dynamic {
    erase(ANY_NIL)
}

impl<T: Reflect> Reflect for Option<T> {
    fn describe() -> TypeDesc {
        TypeDesc::optional::<T>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect> Sealed for Option<T> {}

impl<T: Reflect> Nillable for Option<T> {
    fn wrapped_type(&self) -> TypeDesc {
        T::describe()
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn unwrap_payload(&self) -> &dyn Reflect {
        let Some(value) = self else {
            absent_unwrap(T::describe())
        };
        value
    }
}

/// A nillable whose payload type is statically known.
///
/// Adds construction, a canonical nil instance and lazy coalescing on top of
/// [`Nillable`].
pub trait OptionalObject: Nillable + Sized {
    type Wrapped: Reflect;

    /// The canonical absent instance.
    fn nil_value() -> Self;

    /// The canonical absent instance, erased for untyped containers.
    fn nil_erased() -> Dynamic {
        erase(Self::nil_value())
    }

    fn from_wrapped(value: Self::Wrapped) -> Self;

    fn wrapped(&self) -> Option<&Self::Wrapped>;

    fn into_wrapped(self) -> Option<Self::Wrapped>;

    /// Panics if absent.
    #[track_caller]
    fn unwrap_wrapped(&self) -> &Self::Wrapped {
        match self.wrapped() {
            Some(value) => value,
            None => absent_unwrap(self.wrapped_type()),
        }
    }

    /// The payload, or `default()` if absent. `default` runs only when needed.
    fn value_or_else<F>(self, default: F) -> Self::Wrapped
    where
        F: FnOnce() -> Self::Wrapped,
    {
        match self.into_wrapped() {
            Some(value) => value,
            None => default(),
        }
    }

    fn value_or(self, default: Self::Wrapped) -> Self::Wrapped {
        self.value_or_else(|| default)
    }

    /// Like [`value_or_else`](Self::value_or_else) with a fallible default.
    fn try_value_or_else<E, F>(self, default: F) -> Result<Self::Wrapped, E>
    where
        F: FnOnce() -> Result<Self::Wrapped, E>,
    {
        match self.into_wrapped() {
            Some(value) => Ok(value),
            None => default(),
        }
    }

    /// `self` if present, otherwise `default()`.
    fn or_object_else<F>(self, default: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.into_wrapped() {
            Some(value) => Self::from_wrapped(value),
            None => default(),
        }
    }
}

impl<T: Reflect> OptionalObject for Option<T> {
    type Wrapped = T;

    fn nil_value() -> Self {
        None
    }

    fn from_wrapped(value: T) -> Self {
        Some(value)
    }

    fn wrapped(&self) -> Option<&T> {
        self.as_ref()
    }

    fn into_wrapped(self) -> Option<T> {
        self
    }
}

/// Free-function form of [`OptionalObject::value_or_else`].
pub fn coalesce<O, F>(optional: O, default: F) -> O::Wrapped
where
    O: OptionalObject,
    F: FnOnce() -> O::Wrapped,
{
    optional.value_or_else(default)
}
