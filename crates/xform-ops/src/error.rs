//! Error types for the conflict-policy engine
//!
//! Three failure kinds can end an add-operation:
//! - Configuration misuse (policy unset, configured after execution began)
//! - Existence probe failure (nothing was mutated)
//! - Mutation failure (the add was attempted and failed)

use xform_artifact::ArtifactError;

use crate::state::OperationState;

/// Boxed error from a collaborator outside this crate
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Programmer errors in how an operation was configured or reused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No policy on the operation and strict mode forbids the default
    #[error("operation '{operation}' has no conflict policy and explicit policies are required")]
    PolicyUnset {
        /// Operation name
        operation: String,
    },

    /// Policy setter called once execution had begun
    #[error("cannot configure operation '{operation}': execution already started ({state})")]
    ExecutionStarted {
        /// Operation name
        operation: String,
        /// State the operation was in
        state: OperationState,
    },

    /// Illegal lifecycle transition (e.g. executing an operation twice)
    #[error("operation '{operation}' cannot go from {from} to {to}")]
    IllegalTransition {
        /// Operation name
        operation: String,
        /// Current state
        from: OperationState,
        /// Requested state
        to: OperationState,
    },

    /// Engine configuration could not be loaded
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Existence check failed; the target was not mutated
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Target could not be read
    #[error("target unreadable: {0}")]
    Unreadable(String),

    /// Target model rejected the element
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Collaborator-specific failure
    #[error("{0}")]
    Other(#[source] BoxError),
}

/// Mutation was attempted and failed
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// Target model rejected the change
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Delegate refused the change
    #[error("rejected: {0}")]
    Rejected(String),

    /// Collaborator-specific failure
    #[error("{0}")]
    Other(#[source] BoxError),
}

/// Any failure raised while executing an add-operation
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// Configuration misuse
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Existence probe failed
    #[error("probe failed: {0}")]
    Probe(#[from] ProbeError),

    /// Mutation failed
    #[error("apply failed: {0}")]
    Apply(#[from] ApplyError),
}

impl ExecutionError {
    /// Check if error is a configuration misuse
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if error came from the existence probe
    #[inline]
    #[must_use]
    pub fn is_probe(&self) -> bool {
        matches!(self, Self::Probe(_))
    }

    /// Check if error came from the mutation delegate
    #[inline]
    #[must_use]
    pub fn is_apply(&self) -> bool {
        matches!(self, Self::Apply(_))
    }
}
