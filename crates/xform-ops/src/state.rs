//! Operation lifecycle
//!
//! `Configuring -> Executing -> Finished`. Policy setters are only legal
//! while configuring; an operation executes at most once.

use std::fmt::{self, Display, Formatter};

/// Lifecycle state of one add-operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationState {
    /// Builder phase: policy may be set any number of times
    Configuring,

    /// Probe/resolve/apply in progress
    Executing,

    /// Terminal: a result (or error) was produced
    Finished,
}

impl OperationState {
    /// Whether policy setters are still accepted
    #[inline]
    #[must_use]
    pub const fn is_configurable(self) -> bool {
        matches!(self, Self::Configuring)
    }
}

impl Display for OperationState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configuring => "configuring",
            Self::Executing => "executing",
            Self::Finished => "finished",
        })
    }
}

/// States reachable from `from`
#[must_use]
pub fn allowed_transitions(from: OperationState) -> &'static [OperationState] {
    use OperationState::*;
    match from {
        Configuring => &[Executing],
        Executing => &[Finished],
        Finished => &[],
    }
}

/// Check a lifecycle transition
#[must_use]
pub fn is_allowed(from: OperationState, to: OperationState) -> bool {
    allowed_transitions(from).contains(&to)
}
