//! Runtime type descriptors.
//!
//! A [`TypeDesc`] is the runtime stand-in for a type: identity, a printable name and a
//! shape. Only this crate can build nillable shapes, so the set of nillable types is
//! closed to `Option<T>` and the [`Null`](crate::Null) sentinel no matter what host
//! crates implement [`Reflect`] for.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::nillable::Nillable;
use crate::reflect::{Dynamic, Reflect};

/// Recovers the capability set from a value whose concrete type the descriptor names.
type NillableView = for<'a> fn(&'a dyn Any) -> Option<&'a dyn Nillable>;

#[derive(Clone, Copy)]
enum Shape {
    Plain,
    Optional {
        wrapped: fn() -> TypeDesc,
        view: NillableView,
    },
    Sentinel {
        view: NillableView,
    },
}

fn view_as<N: Nillable>(value: &dyn Any) -> Option<&dyn Nillable> {
    value.downcast_ref::<N>().map(|nillable| nillable as &dyn Nillable)
}

/// Marker for host types that [`impl_reflect!`](crate::impl_reflect) describes as plain.
///
/// Coherence rules keep host crates from implementing it for `Option<_>` or `Null`.
#[doc(hidden)]
pub trait PlainType: 'static {}

/// Plain descriptor for a type `impl_reflect!` was invoked on.
#[doc(hidden)]
#[must_use]
pub fn plain_desc<T: PlainType>() -> TypeDesc {
    TypeDesc::plain::<T>()
}

/// Runtime description of a reflectable type.
///
/// Equality and hashing use the `TypeId` alone; the name is diagnostic. Every public
/// constructor derives the shape from the type itself, so equal descriptors agree on it.
/// A plain descriptor cannot be built for a nillable type:
///
/// ```compile_fail
/// use nillable_core::TypeDesc;
///
/// let desc = TypeDesc::plain::<Option<String>>();
/// ```
///
/// ```compile_fail
/// use nillable_core::Null;
///
/// nillable_core::impl_reflect!(Null);
/// ```
///
/// ```compile_fail
/// use nillable_core::__private::plain_desc;
///
/// let desc = plain_desc::<Option<String>>();
/// ```
#[derive(Clone, Copy)]
pub struct TypeDesc {
    id: TypeId,
    name: &'static str,
    shape: Shape,
}

impl TypeDesc {
    /// Descriptor of a reflectable type, including its nillable shape.
    #[must_use]
    pub fn of<T: Reflect>() -> Self {
        T::describe()
    }

    pub(crate) fn plain<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            shape: Shape::Plain,
        }
    }

    /// The universal top type: an erased [`Dynamic`] value of unknown type.
    #[must_use]
    pub fn any() -> Self {
        Self::plain::<Dynamic>()
    }

    pub(crate) fn optional<T: Reflect>() -> Self {
        Self {
            id: TypeId::of::<Option<T>>(),
            name: type_name::<Option<T>>(),
            shape: Shape::Optional {
                wrapped: T::describe,
                view: view_as::<Option<T>>,
            },
        }
    }

    pub(crate) fn sentinel<N: Nillable>() -> Self {
        Self {
            id: TypeId::of::<N>(),
            name: type_name::<N>(),
            shape: Shape::Sentinel {
                view: view_as::<N>,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[must_use]
    pub fn is_nillable(&self) -> bool {
        !matches!(self.shape, Shape::Plain)
    }

    #[must_use]
    pub fn is_null_sentinel(&self) -> bool {
        matches!(self.shape, Shape::Sentinel { .. })
    }

    /// The payload type a value of this type holds when present.
    ///
    /// `None` for plain types. The sentinel wraps the top type.
    #[must_use]
    pub fn wrapped(&self) -> Option<TypeDesc> {
        match self.shape {
            Shape::Plain => None,
            Shape::Optional { wrapped, .. } => Some(wrapped()),
            Shape::Sentinel { .. } => Some(Self::any()),
        }
    }

    /// Strips every level of optional wrapping. Plain types are their own root.
    #[must_use]
    pub fn root(&self) -> TypeDesc {
        let mut current = *self;
        while let Some(inner) = current.wrapped() {
            current = inner;
        }
        current
    }

    pub(crate) fn nillable_view<'a>(&self, value: &'a dyn Any) -> Option<&'a dyn Nillable> {
        match self.shape {
            Shape::Plain => None,
            Shape::Optional { view, .. } | Shape::Sentinel { view } => view(value),
        }
    }

    fn shape_name(&self) -> &'static str {
        match self.shape {
            Shape::Plain => "plain",
            Shape::Optional { .. } => "optional",
            Shape::Sentinel { .. } => "sentinel",
        }
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDesc")
            .field("name", &self.name)
            .field("shape", &self.shape_name())
            .finish()
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
