//! Add-element operations
//!
//! [`AddElementOperation`] binds an element identity, its conflict policy,
//! and the probe/delegate pair that knows how to find and add it.

use std::fmt;

use xform_artifact::ElementId;

use crate::contract::AddElement;
use crate::delegate::{ExistenceProbe, MutationDelegate};
use crate::error::{ApplyError, ConfigurationError, ProbeError};
use crate::policy::ConflictPolicy;
use crate::state::{self, OperationState};

/// One add-operation against targets of type `A`
///
/// Probe and delegate must be `Send`, so operations can be handed to
/// worker threads.
///
/// # Invariants
/// - Policy can only change while [`OperationState::Configuring`]
/// - Executes at most once; [`OperationState::Finished`] is terminal
pub struct AddElementOperation<A> {
    name: String,
    element: ElementId,
    policy: Option<ConflictPolicy>,
    state: OperationState,
    probe: Box<dyn ExistenceProbe<A> + Send>,
    delegate: Box<dyn MutationDelegate<A> + Send>,
}

impl<A> AddElementOperation<A> {
    /// Create operation with no policy set
    #[must_use]
    pub fn new<P, D>(
        name: impl Into<String>,
        element: impl Into<ElementId>,
        probe: P,
        delegate: D,
    ) -> Self
    where
        P: ExistenceProbe<A> + Send + 'static,
        D: MutationDelegate<A> + Send + 'static,
    {
        Self {
            name: name.into(),
            element: element.into(),
            policy: None,
            state: OperationState::Configuring,
            probe: Box::new(probe),
            delegate: Box::new(delegate),
        }
    }

    /// Operation name, used in results and logs
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity of the element this operation adds
    #[inline]
    #[must_use]
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> OperationState {
        self.state
    }

    pub(crate) fn transition(&mut self, to: OperationState) -> Result<(), ConfigurationError> {
        if !state::is_allowed(self.state, to) {
            return Err(ConfigurationError::IllegalTransition {
                operation: self.name.clone(),
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    pub(crate) fn probe(&self, target: &A) -> Result<bool, ProbeError> {
        self.probe.probe(target, &self.element)
    }

    pub(crate) fn apply(&mut self, target: &mut A) -> Result<(), ApplyError> {
        self.delegate.apply(target, &self.element)
    }
}

impl<A> AddElement for AddElementOperation<A> {
    fn set_policy(&mut self, policy: ConflictPolicy) -> Result<&mut Self, ConfigurationError> {
        if !self.state.is_configurable() {
            return Err(ConfigurationError::ExecutionStarted {
                operation: self.name.clone(),
                state: self.state,
            });
        }
        self.policy = Some(policy);
        Ok(self)
    }

    fn policy(&self) -> Option<ConflictPolicy> {
        self.policy
    }
}

impl<A> fmt::Debug for AddElementOperation<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddElementOperation")
            .field("name", &self.name)
            .field("element", &self.element)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
