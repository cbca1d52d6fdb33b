//! Conflict resolution
//!
//! The pure decision table mapping `(policy, present)` to whether the add is
//! performed, how the outcome is classified, and how it is worded.

use xform_artifact::ElementId;

use crate::policy::ConflictPolicy;
use crate::result::ResultType;

/// Outcome of resolving one `(policy, present)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Whether the mutation delegate runs
    pub perform_add: bool,

    /// Classification reported to the pipeline
    pub result_type: ResultType,

    /// Wording of the result message
    pub template: MessageTemplate,
}

impl Resolution {
    const fn new(perform_add: bool, result_type: ResultType, template: MessageTemplate) -> Self {
        Self {
            perform_add,
            result_type,
            template,
        }
    }
}

/// Result message wording, one per decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTemplate {
    /// Absent element was added
    Added,

    /// Present element rejected (Fail)
    Rejected,

    /// Present element left alone with a warning (WarnNotAdd)
    NotAdded,

    /// Present element overwritten with a warning (WarnButAdd)
    OverwrittenWithWarning,

    /// Present element left alone silently (NoOp)
    Skipped,

    /// Present element overwritten silently (Overwrite)
    Overwritten,
}

impl MessageTemplate {
    /// Render the audit message for an element and policy
    #[must_use]
    pub fn render(self, element: &ElementId, policy: ConflictPolicy) -> String {
        match self {
            Self::Added => format!("{element} added"),
            Self::Rejected => format!("{element} already present, failed per {policy} policy"),
            Self::NotAdded => format!("{element} already present, not added per {policy} policy"),
            Self::OverwrittenWithWarning => {
                format!("{element} already present, overwritten with warning per {policy} policy")
            }
            Self::Skipped => format!("{element} already present, skipped per {policy} policy"),
            Self::Overwritten => {
                format!("{element} already present, overwritten per {policy} policy")
            }
        }
    }
}

/// Decide what to do with an element given the policy and its presence
///
/// Total over both inputs. An absent element is always added with a
/// [`ResultType::Success`]; the policy only governs duplicates.
#[must_use]
pub const fn resolve(policy: ConflictPolicy, present: bool) -> Resolution {
    if !present {
        return Resolution::new(true, ResultType::Success, MessageTemplate::Added);
    }
    match policy {
        ConflictPolicy::Fail => {
            Resolution::new(false, ResultType::Error, MessageTemplate::Rejected)
        }
        ConflictPolicy::WarnNotAdd => {
            Resolution::new(false, ResultType::Warning, MessageTemplate::NotAdded)
        }
        ConflictPolicy::WarnButAdd => {
            Resolution::new(true, ResultType::Warning, MessageTemplate::OverwrittenWithWarning)
        }
        ConflictPolicy::NoOp => Resolution::new(false, ResultType::NoOp, MessageTemplate::Skipped),
        ConflictPolicy::Overwrite => {
            Resolution::new(true, ResultType::Success, MessageTemplate::Overwritten)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_always_adds() {
        for policy in ConflictPolicy::ALL {
            let r = resolve(policy, false);
            assert!(r.perform_add, "{policy} should add an absent element");
            assert_eq!(r.result_type, ResultType::Success);
            assert_eq!(r.template, MessageTemplate::Added);
        }
    }

    #[test]
    fn present_table() {
        let table = [
            (ConflictPolicy::Fail, false, ResultType::Error),
            (ConflictPolicy::WarnNotAdd, false, ResultType::Warning),
            (ConflictPolicy::WarnButAdd, true, ResultType::Warning),
            (ConflictPolicy::NoOp, false, ResultType::NoOp),
            (ConflictPolicy::Overwrite, true, ResultType::Success),
        ];
        for (policy, perform_add, result_type) in table {
            let r = resolve(policy, true);
            assert_eq!(r.perform_add, perform_add, "{policy}");
            assert_eq!(r.result_type, result_type, "{policy}");
        }
    }

    #[test]
    fn no_op_message_wording() {
        let r = resolve(ConflictPolicy::NoOp, true);
        let msg = r.template.render(&ElementId::new("prop.key"), ConflictPolicy::NoOp);
        assert_eq!(msg, "prop.key already present, skipped per NoOp policy");
    }

    #[test]
    fn present_messages_name_element_and_policy() {
        let element = ElementId::new("dep:coord:1.0");
        for policy in ConflictPolicy::ALL {
            let msg = resolve(policy, true).template.render(&element, policy);
            assert!(msg.contains("dep:coord:1.0"), "{msg}");
            assert!(msg.contains(policy.name()), "{msg}");
        }
    }
}
