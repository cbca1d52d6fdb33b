//! Conflict policies
//!
//! What an add-operation does when the element it adds is already present.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Behavior on an already-present element
///
/// Policies never influence what happens when the element is absent: every
/// policy adds it and reports success. They only decide how a duplicate is
/// handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Report an error and do not add
    Fail,

    /// Report a warning and do not add
    WarnNotAdd,

    /// Report a warning, but add (overwriting the present element)
    WarnButAdd,

    /// Do nothing: no add, no warning, no failure
    NoOp,

    /// Overwrite silently and report success
    Overwrite,
}

impl ConflictPolicy {
    /// All policies, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Fail,
        Self::WarnNotAdd,
        Self::WarnButAdd,
        Self::NoOp,
        Self::Overwrite,
    ];

    /// Configuration key (`snake_case`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::WarnNotAdd => "warn_not_add",
            Self::WarnButAdd => "warn_but_add",
            Self::NoOp => "no_op",
            Self::Overwrite => "overwrite",
        }
    }

    /// Display name used in result messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::WarnNotAdd => "WarnNotAdd",
            Self::WarnButAdd => "WarnButAdd",
            Self::NoOp => "NoOp",
            Self::Overwrite => "Overwrite",
        }
    }
}

impl Display for ConflictPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConflictPolicy {
    type Err = ConfigurationError;

    /// Accepts either the configuration key or the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s || p.name() == s)
            .ok_or_else(|| {
                ConfigurationError::InvalidConfig(format!("unknown conflict policy '{s}'"))
            })
    }
}
