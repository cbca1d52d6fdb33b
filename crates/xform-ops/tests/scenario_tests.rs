use std::cell::Cell;

use pretty_assertions::assert_eq;
use xform_artifact::types::{BuildDescriptor, CoordinateSection, PropertiesFile};
use xform_artifact::{ContentHash, ElementId, Fingerprint, TargetArtifact};
use xform_ops::ops::{add_dependency, add_property};
use xform_ops::{
    resolve, AddElement, AddElementOperation, ConfigurationError, ConflictPolicy, EngineConfig,
    ExecutionError, OperationExecutor, OperationState, ProbeError, ResultType,
};
use xform_test_utils::{
    capture_logs, coordinate, descriptor_with_dependency, init_test_tracing, properties_with,
    scripted_op, CallCounter, CountingDelegate, FailingProbe,
};

const UNTOUCHED_VIOLATION: &str = "Target changed although no mutation was performed";

/// Target whose content changes every time it is probed
#[derive(Debug, Default)]
struct ReadCountingTarget {
    reads: Cell<u64>,
}

impl TargetArtifact for ReadCountingTarget {
    const KIND: &'static str = "read-counting";

    fn fingerprint(&self) -> ContentHash {
        let mut fp = Fingerprint::new(Self::KIND);
        fp.bytes(&self.reads.get().to_le_bytes());
        fp.finish()
    }
}

fn read_counting_op(calls: &CallCounter) -> AddElementOperation<ReadCountingTarget> {
    let mut op = AddElementOperation::new(
        "AddCounted",
        "counted",
        |target: &ReadCountingTarget, _: &ElementId| -> Result<bool, ProbeError> {
            target.reads.set(target.reads.get() + 1);
            Ok(true)
        },
        CountingDelegate::new(calls),
    );
    op.no_op_if_present().unwrap();
    op
}

#[test]
fn test_no_op_on_present_property() {
    init_test_tracing();
    let mut props = properties_with(&[("prop.key", "old")]);
    let before = props.fingerprint();
    let mut op = add_property("prop.key", "new");
    op.no_op_if_present().unwrap();

    let result = OperationExecutor::default().execute(&mut op, &mut props).unwrap();

    assert_eq!(result.result_type(), ResultType::NoOp);
    assert_eq!(result.message(), "prop.key already present, skipped per NoOp policy");
    assert!(result.cause().is_none());
    assert_eq!(props.fingerprint(), before);
}

#[test]
fn test_overwrite_present_dependency() {
    init_test_tracing();
    let mut pom = descriptor_with_dependency("dep:coord:0.9");
    let mut op = add_dependency(coordinate("dep:coord:1.0"));
    op.overwrite_if_present().unwrap();

    let result = OperationExecutor::default().execute(&mut op, &mut pom).unwrap();

    assert_eq!(result.result_type(), ResultType::Success);
    assert_eq!(
        pom.section(CoordinateSection::Dependencies),
        [coordinate("dep:coord:1.0")]
    );
}

#[test]
fn test_setter_after_execution_is_configuration_error() {
    let (mut op, _) = scripted_op(Some(ConflictPolicy::WarnButAdd), false);
    OperationExecutor::default()
        .execute(&mut op, &mut PropertiesFile::new())
        .unwrap();

    assert_eq!(op.state(), OperationState::Finished);
    for err in [
        op.fail_if_present().unwrap_err(),
        op.warn_not_add_if_present().unwrap_err(),
        op.warn_but_add_if_present().unwrap_err(),
        op.no_op_if_present().unwrap_err(),
        op.overwrite_if_present().unwrap_err(),
    ] {
        assert_eq!(
            err,
            ConfigurationError::ExecutionStarted {
                operation: "ScriptedAdd".to_string(),
                state: OperationState::Finished,
            }
        );
    }
    assert_eq!(op.policy(), Some(ConflictPolicy::WarnButAdd));
}

#[test]
fn test_strict_mode_rejects_unconfigured_operation() {
    let (mut op, calls) = scripted_op(None, true);
    let mut props = PropertiesFile::new();

    let err = OperationExecutor::new(EngineConfig::strict())
        .execute(&mut op, &mut props)
        .unwrap_err();

    assert!(err.is_configuration());
    assert!(matches!(
        err,
        ExecutionError::Configuration(ConfigurationError::PolicyUnset { ref operation })
            if operation == "ScriptedAdd"
    ));
    assert_eq!(calls.get(), 0);
    assert_eq!(op.state(), OperationState::Finished);
}

#[test]
fn test_unconfigured_operation_uses_default_policy() {
    let (mut op, calls) = scripted_op(None, true);
    let result = OperationExecutor::default()
        .execute(&mut op, &mut PropertiesFile::new())
        .unwrap();

    assert_eq!(result.result_type(), ResultType::Error);
    assert_eq!(result.policy(), Some(ConflictPolicy::Fail));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_probe_failure_leaves_target_untouched() {
    let calls = CallCounter::new();
    let mut op = AddElementOperation::new(
        "AddProperty",
        "prop.key",
        FailingProbe("permission denied".to_string()),
        CountingDelegate::new(&calls),
    );
    op.overwrite_if_present().unwrap();
    let mut props = properties_with(&[("prop.key", "old")]);
    let before = props.clone();

    let err = OperationExecutor::default().execute(&mut op, &mut props).unwrap_err();

    assert!(err.is_probe());
    assert!(err.to_string().contains("permission denied"));
    assert_eq!(calls.get(), 0);
    assert_eq!(props, before);
}

#[test]
fn test_config_from_toml_drives_executor() {
    let config = EngineConfig::from_toml_str(
        r#"
        default_policy = "no_op"
        verify_untouched = false
        "#,
    )
    .unwrap();
    let executor = OperationExecutor::new(config);
    let mut op = add_property("prop.key", "new");
    let mut props = properties_with(&[("prop.key", "old")]);

    let result = executor.execute(&mut op, &mut props).unwrap();

    assert_eq!(result.result_type(), ResultType::NoOp);
    assert_eq!(props.get("prop.key"), Some("old"));
}

#[test]
fn test_display_of_error_result() {
    let mut pom = BuildDescriptor::new().with(CoordinateSection::Dependencies, coordinate("g:a:1"));
    let mut op = add_dependency(coordinate("g:a:2"));
    op.fail_if_present().unwrap();

    let result = OperationExecutor::default().execute(&mut op, &mut pom).unwrap();

    assert_eq!(
        result.to_string(),
        "[error] AddDependency: g:a:2 already present, failed per Fail policy"
    );
}

#[test]
fn test_target_changed_on_non_add_path_is_logged() {
    let calls = CallCounter::new();
    let mut op = read_counting_op(&calls);
    let mut target = ReadCountingTarget::default();

    let (result, logs) =
        capture_logs(|| OperationExecutor::default().execute(&mut op, &mut target));
    let result = result.unwrap();

    assert_eq!(result.result_type(), ResultType::NoOp);
    assert_eq!(result.message(), "counted already present, skipped per NoOp policy");
    assert!(result.cause().is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(target.reads.get(), 1);
    let line = logs
        .lines()
        .find(|l| l.contains(UNTOUCHED_VIOLATION))
        .unwrap_or_else(|| panic!("no untouched violation in:\n{logs}"));
    assert!(line.contains("ERROR"));
}

#[test]
fn test_untouched_check_can_be_disabled() {
    let calls = CallCounter::new();
    let mut op = read_counting_op(&calls);
    let mut target = ReadCountingTarget::default();
    let executor = OperationExecutor::new(EngineConfig::new().with_verify_untouched(false));

    let (result, logs) = capture_logs(|| executor.execute(&mut op, &mut target));

    assert_eq!(result.unwrap().result_type(), ResultType::NoOp);
    assert_eq!(target.reads.get(), 1);
    assert!(!logs.contains(UNTOUCHED_VIOLATION));
}

#[test]
fn test_untouched_target_logs_no_violation() {
    let mut op = add_property("prop.key", "new");
    op.warn_not_add_if_present().unwrap();
    let mut props = properties_with(&[("prop.key", "old")]);

    let (result, logs) =
        capture_logs(|| OperationExecutor::default().execute(&mut op, &mut props));

    assert_eq!(result.unwrap().result_type(), ResultType::Warning);
    assert!(logs.contains("Operation warning"));
    assert!(!logs.contains(UNTOUCHED_VIOLATION));
}

#[test]
fn test_operations_run_on_worker_threads() {
    let handles: Vec<_> = ConflictPolicy::ALL
        .into_iter()
        .map(|policy| {
            let (mut op, calls) = scripted_op(Some(policy), true);
            std::thread::spawn(move || {
                let result = OperationExecutor::default()
                    .execute(&mut op, &mut PropertiesFile::new())
                    .unwrap();
                (policy, result.result_type(), calls.get())
            })
        })
        .collect();

    for handle in handles {
        let (policy, result_type, calls) = handle.join().unwrap();
        let expected = resolve(policy, true);
        assert_eq!(result_type, expected.result_type, "{policy}");
        assert_eq!(calls, usize::from(expected.perform_add), "{policy}");
    }
}
