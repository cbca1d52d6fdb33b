//! Add-element contract
//!
//! The uniform configuration surface every add-style operation exposes.

use crate::error::ConfigurationError;
use crate::policy::ConflictPolicy;

/// Operations that add an element and must decide what to do if it exists
///
/// Setters chain with `?` and the last one wins:
///
/// ```
/// use xform_ops::{AddElement, ConflictPolicy};
/// use xform_ops::ops::add_property;
///
/// # fn main() -> Result<(), xform_ops::ConfigurationError> {
/// let mut op = add_property("server.port", "8080");
/// op.fail_if_present()?.overwrite_if_present()?;
/// assert_eq!(op.policy(), Some(ConflictPolicy::Overwrite));
/// # Ok(())
/// # }
/// ```
///
/// Every setter fails with [`ConfigurationError::ExecutionStarted`] once the
/// operation has begun executing.
pub trait AddElement {
    /// Set the conflict policy
    ///
    /// # Errors
    /// Returns error if execution has already started
    fn set_policy(&mut self, policy: ConflictPolicy) -> Result<&mut Self, ConfigurationError>;

    /// Policy set on this operation, `None` if never configured
    fn policy(&self) -> Option<ConflictPolicy>;

    /// Error and do not add if present
    ///
    /// # Errors
    /// Returns error if execution has already started
    fn fail_if_present(&mut self) -> Result<&mut Self, ConfigurationError> {
        self.set_policy(ConflictPolicy::Fail)
    }

    /// Warn and do not add if present
    ///
    /// # Errors
    /// Returns error if execution has already started
    fn warn_not_add_if_present(&mut self) -> Result<&mut Self, ConfigurationError> {
        self.set_policy(ConflictPolicy::WarnNotAdd)
    }

    /// Warn, but add, if present
    ///
    /// # Errors
    /// Returns error if execution has already started
    fn warn_but_add_if_present(&mut self) -> Result<&mut Self, ConfigurationError> {
        self.set_policy(ConflictPolicy::WarnButAdd)
    }

    /// Do nothing (no add, no warning, no failure) if present
    ///
    /// # Errors
    /// Returns error if execution has already started
    fn no_op_if_present(&mut self) -> Result<&mut Self, ConfigurationError> {
        self.set_policy(ConflictPolicy::NoOp)
    }

    /// Overwrite without warning if present
    ///
    /// # Errors
    /// Returns error if execution has already started
    fn overwrite_if_present(&mut self) -> Result<&mut Self, ConfigurationError> {
        self.set_policy(ConflictPolicy::Overwrite)
    }
}
