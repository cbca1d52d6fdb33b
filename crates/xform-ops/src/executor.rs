//! Operation executor
//!
//! Drives one add-operation end to end:
//!
//! ```text
//! policy check → ExistenceProbe → resolve → [MutationDelegate] → ExecutionResult
//! ```
//!
//! Configuration and probe failures are returned as errors; a failing
//! mutation is reported as an Error-typed result carrying the cause.

use xform_artifact::TargetArtifact;

use crate::config::EngineConfig;
use crate::contract::AddElement;
use crate::error::{ApplyError, ConfigurationError, ExecutionError};
use crate::operation::AddElementOperation;
use crate::policy::ConflictPolicy;
use crate::resolver::resolve;
use crate::result::{ExecutionResult, ResultType};
use crate::state::OperationState;

/// Executes add-operations against their targets
///
/// Stateless apart from its configuration; one executor can serve any
/// number of operations. No retries, no timeouts: a hung probe or delegate
/// blocks the caller.
#[derive(Debug, Clone, Default)]
pub struct OperationExecutor {
    config: EngineConfig,
}

impl OperationExecutor {
    /// Create executor
    #[inline]
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Execute one operation against its target
    ///
    /// The operation moves to [`OperationState::Finished`] whatever the
    /// outcome, and cannot be executed or configured again.
    ///
    /// # Errors
    /// - [`ExecutionError::Configuration`] if no policy applies, or the
    ///   operation was already executed
    /// - [`ExecutionError::Probe`] if the existence check failed; the
    ///   target was not mutated
    pub fn execute<A: TargetArtifact>(
        &self,
        op: &mut AddElementOperation<A>,
        target: &mut A,
    ) -> Result<ExecutionResult, ExecutionError> {
        let span = tracing::info_span!(
            "add_element",
            operation = %op.name(),
            element = %op.element(),
            kind = A::KIND,
            policy = tracing::field::Empty,
        );
        let _guard = span.enter();

        op.transition(OperationState::Executing)?;
        let outcome = self.execute_inner(op, target, &span);
        op.transition(OperationState::Finished)?;

        if let Err(e) = &outcome {
            tracing::error!(error = %e, "Operation aborted");
        }
        outcome
    }

    /// Execute, folding configuration and probe failures into an Error result
    ///
    /// For pipelines that want one result per operation regardless of how it
    /// failed.
    pub fn run<A: TargetArtifact>(
        &self,
        op: &mut AddElementOperation<A>,
        target: &mut A,
    ) -> ExecutionResult {
        let policy = self.config.effective_policy(op.policy());
        match self.execute(op, target) {
            Ok(result) => result,
            Err(e) => {
                let element = op.element();
                let message = match policy {
                    Some(policy) => {
                        format!("{element} could not be processed per {policy} policy: {e}")
                    }
                    None => format!("{element} could not be processed, no policy set: {e}"),
                };
                ExecutionResult::new(op.name(), element.clone(), policy, ResultType::Error, message)
                    .with_cause(e)
            }
        }
    }

    fn execute_inner<A: TargetArtifact>(
        &self,
        op: &mut AddElementOperation<A>,
        target: &mut A,
        span: &tracing::Span,
    ) -> Result<ExecutionResult, ExecutionError> {
        let policy = self.config.effective_policy(op.policy()).ok_or_else(|| {
            ConfigurationError::PolicyUnset {
                operation: op.name().to_string(),
            }
        })?;
        span.record("policy", policy.name());
        if op.policy().is_none() {
            tracing::debug!(%policy, "No policy set, using configured default");
        }

        // Taken before the probe, so adds pay for one full fingerprint too.
        let before = self.config.verify_untouched.then(|| target.fingerprint());

        let present = op.probe(target)?;
        let resolution = resolve(policy, present);
        tracing::debug!(
            present,
            perform_add = resolution.perform_add,
            result_type = %resolution.result_type,
            "Resolved conflict policy"
        );

        let message = resolution.template.render(op.element(), policy);
        let result = if resolution.perform_add {
            match op.apply(target) {
                Ok(()) => ExecutionResult::new(
                    op.name(),
                    op.element().clone(),
                    Some(policy),
                    resolution.result_type,
                    message,
                ),
                Err(e) => {
                    tracing::error!(error = %e, "Mutation failed");
                    ExecutionResult::new(
                        op.name(),
                        op.element().clone(),
                        Some(policy),
                        ResultType::Error,
                        apply_failure_message(op, policy, present, &e),
                    )
                    .with_cause(e.into())
                }
            }
        } else {
            if let Some(before) = before {
                let after = target.fingerprint();
                if before != after {
                    tracing::error!(
                        before = %before.short(),
                        after = %after.short(),
                        "Target changed although no mutation was performed"
                    );
                }
            }
            ExecutionResult::new(
                op.name(),
                op.element().clone(),
                Some(policy),
                resolution.result_type,
                message,
            )
        };

        log_result(&result);
        Ok(result)
    }
}

fn apply_failure_message<A>(
    op: &AddElementOperation<A>,
    policy: ConflictPolicy,
    present: bool,
    cause: &ApplyError,
) -> String {
    let element = op.element();
    if present {
        format!("{element} already present, overwrite per {policy} policy failed: {cause}")
    } else {
        format!("{element} could not be added per {policy} policy: {cause}")
    }
}

fn log_result(result: &ExecutionResult) {
    match result.result_type() {
        ResultType::Success => {
            tracing::info!(detail = result.message(), "Operation succeeded");
        }
        ResultType::Warning => tracing::warn!(detail = result.message(), "Operation warning"),
        ResultType::NoOp => tracing::warn!(detail = result.message(), "Operation skipped"),
        ResultType::Error => tracing::error!(detail = result.message(), "Operation failed"),
    }
}
