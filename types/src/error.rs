use thiserror::Error;

/// Why a checked unwrap of a nillable value produced no payload.
///
/// Type names come from `std::any::type_name` and are for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError {
    #[error("unwrap of absent {ty} value")]
    Nil { ty: &'static str },
    #[error("cannot narrow {found} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl UnwrapError {
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil { .. })
    }
}
