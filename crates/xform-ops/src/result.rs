//! Execution result types
//!
//! [`ExecutionResult`] is the terminal record of one add-operation;
//! [`ExecutionReport`] collects them for a pipeline run.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use xform_artifact::ElementId;

use crate::error::ExecutionError;
use crate::policy::ConflictPolicy;

/// Outcome classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Operation failed
    Error,

    /// Operation completed but needs attention
    Warning,

    /// Operation deliberately did nothing
    NoOp,

    /// Operation completed
    Success,
}

impl ResultType {
    /// Severity rank, higher is worse
    #[inline]
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NoOp => 1,
            Self::Warning => 2,
            Self::Error => 3,
        }
    }

    /// Short lowercase label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::NoOp => "no-op",
            Self::Success => "success",
        }
    }
}

impl Display for ResultType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Terminal record of one add-operation
///
/// Immutable once built. Cheap to clone: the failure cause is shared.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    operation: String,
    element: ElementId,
    policy: Option<ConflictPolicy>,
    result_type: ResultType,
    message: String,
    cause: Option<Arc<ExecutionError>>,
}

impl ExecutionResult {
    /// Create result
    #[must_use]
    pub fn new(
        operation: impl Into<String>,
        element: ElementId,
        policy: Option<ConflictPolicy>,
        result_type: ResultType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            element,
            policy,
            result_type,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying failure
    #[must_use]
    pub fn with_cause(mut self, cause: ExecutionError) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Outcome classification
    #[inline]
    #[must_use]
    pub fn result_type(&self) -> ResultType {
        self.result_type
    }

    /// Human-readable message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying failure, if any
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&ExecutionError> {
        self.cause.as_deref()
    }

    /// Name of the operation that produced this result
    #[inline]
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Element the operation tried to add
    #[inline]
    #[must_use]
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Policy in effect (absent when execution failed before resolving one)
    #[inline]
    #[must_use]
    pub fn policy(&self) -> Option<ConflictPolicy> {
        self.policy
    }

    /// Check for [`ResultType::Error`]
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result_type == ResultType::Error
    }

    /// Check for [`ResultType::Success`]
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result_type == ResultType::Success
    }
}

impl Display for ExecutionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.result_type, self.operation, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, " ({cause})")?;
        }
        Ok(())
    }
}

/// Results of a sequence of operations
///
/// Aggregation only. Whether to stop on an error is the pipeline's call.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    results: Vec<ExecutionResult>,
}

impl ExecutionReport {
    /// Create empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result
    pub fn push(&mut self, result: ExecutionResult) {
        self.results.push(result);
    }

    /// All results in execution order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    /// Number of results of one type
    #[must_use]
    pub fn count(&self, result_type: ResultType) -> usize {
        self.results
            .iter()
            .filter(|r| r.result_type == result_type)
            .count()
    }

    /// Check whether any operation failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(ExecutionResult::is_error)
    }

    /// Most severe outcome, if any result was recorded
    #[must_use]
    pub fn worst(&self) -> Option<ResultType> {
        self.results
            .iter()
            .map(ExecutionResult::result_type)
            .max_by_key(|t| t.severity())
    }

    /// One-line tally, e.g. `3 success, 1 warning, 0 no-op, 0 error`
    #[must_use]
    pub fn summary(&self) -> String {
        [
            ResultType::Success,
            ResultType::Warning,
            ResultType::NoOp,
            ResultType::Error,
        ]
        .iter()
        .map(|t| format!("{} {}", self.count(*t), t.label()))
        .collect::<Vec<_>>()
        .join(", ")
    }
}

impl Extend<ExecutionResult> for ExecutionReport {
    fn extend<I: IntoIterator<Item = ExecutionResult>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplyError;

    fn result(t: ResultType) -> ExecutionResult {
        let policy = Some(ConflictPolicy::Fail);
        ExecutionResult::new("AddProperty", ElementId::new("k"), policy, t, "msg")
    }

    #[test]
    fn severity_orders_outcomes() {
        assert!(ResultType::Error.severity() > ResultType::Warning.severity());
        assert!(ResultType::Warning.severity() > ResultType::NoOp.severity());
        assert!(ResultType::NoOp.severity() > ResultType::Success.severity());
    }

    #[test]
    fn display_includes_cause() {
        let cause: ExecutionError = ApplyError::Rejected("read-only".into()).into();
        let r = result(ResultType::Error).with_cause(cause);
        assert_eq!(
            r.to_string(),
            "[error] AddProperty: msg (apply failed: rejected: read-only)"
        );
        assert!(r.cause().is_some_and(ExecutionError::is_apply));
    }

    #[test]
    fn report_tally() {
        let mut report = ExecutionReport::new();
        assert_eq!(report.worst(), None);

        report.extend([
            result(ResultType::Success),
            result(ResultType::Success),
            result(ResultType::NoOp),
            result(ResultType::Warning),
        ]);
        assert!(!report.has_errors());
        assert_eq!(report.worst(), Some(ResultType::Warning));

        report.push(result(ResultType::Error));
        assert!(report.has_errors());
        assert_eq!(report.count(ResultType::Success), 2);
        assert_eq!(report.summary(), "2 success, 1 warning, 1 no-op, 1 error");
        assert_eq!(report.results().len(), 5);
    }
}
