//! Nil queries over erased values and type descriptors.

use nillable_types::SentinelPolicy;
use tracing::debug;

use crate::desc::TypeDesc;
use crate::nillable::Nillable;
use crate::reflect::Reflect;

/// Views an erased value through the capability set, if its type is nillable.
#[must_use]
pub fn as_nillable(value: &dyn Reflect) -> Option<&dyn Nillable> {
    value.as_nillable()
}

/// Whether `value` is an absent optional or the null sentinel.
///
/// Plain values are never nil.
#[must_use]
pub fn is_nil(value: &dyn Reflect) -> bool {
    is_nil_with(value, SentinelPolicy::default())
}

#[must_use]
pub fn is_nil_with(value: &dyn Reflect, policy: SentinelPolicy) -> bool {
    let Some(nillable) = value.as_nillable() else {
        return false;
    };
    if !policy.treats_sentinel_as_nil() && value.type_desc().is_null_sentinel() {
        debug!(%policy, "null sentinel treated as a present value");
        return false;
    }
    nillable.is_nil()
}

/// Whether values of the described type can be nil.
#[must_use]
pub fn is_nil_type(desc: TypeDesc) -> bool {
    is_nil_type_with(desc, SentinelPolicy::default())
}

#[must_use]
pub fn is_nil_type_with(desc: TypeDesc, policy: SentinelPolicy) -> bool {
    if !desc.is_nillable() {
        return false;
    }
    if !policy.treats_sentinel_as_nil() && desc.is_null_sentinel() {
        debug!(%policy, ty = %desc, "null sentinel type treated as a present type");
        return false;
    }
    true
}
