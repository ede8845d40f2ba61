//! Sentinel handling policy for nil queries.
//!
//! Hosts that mix the universal `Null` sentinel with real optionals sometimes need the
//! sentinel to count as a present value (for example, a JSON `null` that is meaningful
//! payload rather than a missing key). The policy is a plain enum so it can live inside a
//! host configuration file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How nil queries treat the universal null sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelPolicy {
    /// The sentinel is nil, like any absent optional.
    #[default]
    TreatAsNil,
    /// The sentinel is an ordinary present value.
    TreatAsValue,
}

impl SentinelPolicy {
    #[must_use]
    pub const fn treats_sentinel_as_nil(self) -> bool {
        matches!(self, Self::TreatAsNil)
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "treat_as_nil" | "treat-as-nil" | "nil" => Some(Self::TreatAsNil),
            "treat_as_value" | "treat-as-value" | "value" => Some(Self::TreatAsValue),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TreatAsNil => "treat_as_nil",
            Self::TreatAsValue => "treat_as_value",
        }
    }
}

impl From<bool> for SentinelPolicy {
    fn from(treat_as_nil: bool) -> Self {
        if treat_as_nil {
            Self::TreatAsNil
        } else {
            Self::TreatAsValue
        }
    }
}

impl fmt::Display for SentinelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
