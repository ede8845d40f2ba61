//! Runtime nil reflection for erased values.
//!
//! Code that stores heterogeneous values behind `dyn Reflect` can ask whether a value
//! represents absence, what it would hold if present, and unwrap nested optionals down
//! to a single root value or root type.
//!
//! - [`Nillable`]: the sealed capability set, implemented by `Option<T>` and [`Null`].
//! - [`is_nil`] / [`is_nil_type`]: queries over arbitrary values and descriptors, with a
//!   [`SentinelPolicy`] for the null sentinel.
//! - [`OptionalObject`]: statically typed construction and lazy coalescing.
//!
//! ```
//! use nillable_core::{Dynamic, Nillable, NillableExt, TypeDesc, erase, is_nil};
//!
//! let row: Vec<Dynamic> = vec![erase(Some(Some(String::from("hello")))), erase(None::<i32>)];
//!
//! let nested = row[0].as_nillable().unwrap();
//! assert_eq!(nested.wrapped_root_type(), TypeDesc::of::<String>());
//! assert_eq!(nested.root_payload_as::<String>().unwrap(), "hello");
//! assert!(is_nil(&row[1]));
//! ```

mod desc;
mod nillable;
mod null;
mod optional;
mod query;
mod reflect;

pub use desc::TypeDesc;
pub use nillable::{Nillable, NillableExt};
pub use null::{NULL, Null};
pub use optional::{ANY_NIL, OptionalObject, any_nil, coalesce};
pub use query::{as_nillable, is_nil, is_nil_type, is_nil_type_with, is_nil_with};
pub use reflect::{Dynamic, Reflect, erase};

pub use nillable_types::{SentinelPolicy, UnwrapError};

#[doc(hidden)]
pub mod __private {
    pub use crate::desc::{PlainType, plain_desc};
}
