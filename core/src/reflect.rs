//! Erased values.
//!
//! Every value that goes into an untyped container implements [`Reflect`]. Boxed
//! [`Dynamic`] values are transparent: they describe and downcast as the value they hold.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::desc::TypeDesc;
use crate::nillable::Nillable;

/// A value that can be described and downcast at runtime.
///
/// Host types opt in with [`impl_reflect!`](crate::impl_reflect). Such types are always
/// plain: only `Option<T>` and [`Null`](crate::Null) are nillable.
pub trait Reflect: Any {
    /// Descriptor of the implementing type.
    fn describe() -> TypeDesc
    where
        Self: Sized;

    /// Descriptor of the concrete value behind `self`.
    fn type_desc(&self) -> TypeDesc;

    fn as_any(&self) -> &dyn Any;
}

/// An owned erased value.
pub type Dynamic = Box<dyn Reflect>;

#[must_use]
pub fn erase<T: Reflect>(value: T) -> Dynamic {
    Box::new(value)
}

impl dyn Reflect {
    /// The capability set of this value, if its type is nillable.
    #[must_use]
    pub fn as_nillable(&self) -> Option<&dyn Nillable> {
        self.type_desc().nillable_view(self.as_any())
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.type_desc())
    }
}

/// Implements [`Reflect`] for plain types.
///
/// ```
/// use nillable_core::{TypeDesc, impl_reflect, is_nil};
///
/// struct Celsius(f64);
/// impl_reflect!(Celsius);
///
/// assert!(!is_nil(&Celsius(21.5)));
/// assert!(!TypeDesc::of::<Celsius>().is_nillable());
/// ```
#[macro_export]
macro_rules! impl_reflect {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::__private::PlainType for $ty {}

            impl $crate::Reflect for $ty {
                fn describe() -> $crate::TypeDesc {
                    $crate::__private::plain_desc::<Self>()
                }

                fn type_desc(&self) -> $crate::TypeDesc {
                    <Self as $crate::Reflect>::describe()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )+
    };
}

impl_reflect!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: 'static> Reflect for Vec<T> {
    fn describe() -> TypeDesc {
        TypeDesc::plain::<Self>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K: 'static, V: 'static> Reflect for HashMap<K, V> {
    fn describe() -> TypeDesc {
        TypeDesc::plain::<Self>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K: 'static, V: 'static> Reflect for BTreeMap<K, V> {
    fn describe() -> TypeDesc {
        TypeDesc::plain::<Self>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for Dynamic {
    fn describe() -> TypeDesc {
        TypeDesc::any()
    }

    fn type_desc(&self) -> TypeDesc {
        (**self).type_desc()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}
