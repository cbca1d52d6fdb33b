//! Collaborator ports
//!
//! Per element kind, the pipeline supplies an [`ExistenceProbe`] (is the
//! element already there?) and a [`MutationDelegate`] (put it there).
//! Closures with matching signatures implement both.

use xform_artifact::ElementId;

use crate::error::{ApplyError, ProbeError};

/// Answers whether an element is already present in a target
///
/// Receives a shared borrow: probing cannot mutate the target.
pub trait ExistenceProbe<A> {
    /// Check presence of `element` in `target`
    ///
    /// # Errors
    /// Returns error if the target cannot be inspected
    fn probe(&self, target: &A, element: &ElementId) -> Result<bool, ProbeError>;
}

impl<A, F> ExistenceProbe<A> for F
where
    F: Fn(&A, &ElementId) -> Result<bool, ProbeError>,
{
    fn probe(&self, target: &A, element: &ElementId) -> Result<bool, ProbeError> {
        self(target, element)
    }
}

/// Performs the actual addition (or overwrite) of an element
pub trait MutationDelegate<A> {
    /// Add `element` to `target`, replacing any present copy
    ///
    /// # Errors
    /// Returns error if the mutation fails
    fn apply(&mut self, target: &mut A, element: &ElementId) -> Result<(), ApplyError>;
}

impl<A, F> MutationDelegate<A> for F
where
    F: FnMut(&mut A, &ElementId) -> Result<(), ApplyError>,
{
    fn apply(&mut self, target: &mut A, element: &ElementId) -> Result<(), ApplyError> {
        self(target, element)
    }
}
