//! Testing utilities for xform workspace
//!
//! Shared probes, delegates, fixtures, and tracing setup.

#![allow(missing_docs)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::EnvFilter;
use xform_artifact::types::{BuildDescriptor, CoordinateSection, PropertiesFile};
use xform_artifact::{Coordinate, ElementId};
use xform_ops::{
    AddElement, AddElementOperation, ApplyError, ConflictPolicy, ExistenceProbe, MutationDelegate,
    ProbeError,
};

/// Shared call counter, cloned into a delegate and read back by the test
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Probe with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct StaticProbe(pub bool);

impl<A> ExistenceProbe<A> for StaticProbe {
    fn probe(&self, _target: &A, _element: &ElementId) -> Result<bool, ProbeError> {
        Ok(self.0)
    }
}

/// Probe that always fails
#[derive(Debug, Clone)]
pub struct FailingProbe(pub String);

impl<A> ExistenceProbe<A> for FailingProbe {
    fn probe(&self, _target: &A, _element: &ElementId) -> Result<bool, ProbeError> {
        Err(ProbeError::Unreadable(self.0.clone()))
    }
}

/// Delegate that only counts its invocations
#[derive(Debug, Clone, Default)]
pub struct CountingDelegate {
    calls: CallCounter,
}

impl CountingDelegate {
    pub fn new(calls: &CallCounter) -> Self {
        Self { calls: calls.clone() }
    }
}

impl<A> MutationDelegate<A> for CountingDelegate {
    fn apply(&mut self, _target: &mut A, _element: &ElementId) -> Result<(), ApplyError> {
        self.calls.bump();
        Ok(())
    }
}

/// Delegate that counts, then rejects the change
#[derive(Debug, Clone)]
pub struct FailingDelegate {
    calls: CallCounter,
    reason: String,
}

impl FailingDelegate {
    pub fn new(calls: &CallCounter, reason: impl Into<String>) -> Self {
        Self {
            calls: calls.clone(),
            reason: reason.into(),
        }
    }
}

impl<A> MutationDelegate<A> for FailingDelegate {
    fn apply(&mut self, _target: &mut A, _element: &ElementId) -> Result<(), ApplyError> {
        self.calls.bump();
        Err(ApplyError::Rejected(self.reason.clone()))
    }
}

/// Operation on a properties file with a scripted probe and a counting delegate
pub fn scripted_op(
    policy: Option<ConflictPolicy>,
    present: bool,
) -> (AddElementOperation<PropertiesFile>, CallCounter) {
    let calls = CallCounter::new();
    let mut op = AddElementOperation::new(
        "ScriptedAdd",
        "prop.key",
        StaticProbe(present),
        CountingDelegate::new(&calls),
    );
    if let Some(policy) = policy {
        op.set_policy(policy).unwrap();
    }
    (op, calls)
}

pub fn properties_with(entries: &[(&str, &str)]) -> PropertiesFile {
    entries.iter().copied().collect()
}

pub fn coordinate(s: &str) -> Coordinate {
    s.parse().unwrap()
}

pub fn descriptor_with_dependency(coordinates: &str) -> BuildDescriptor {
    BuildDescriptor::new().with(CoordinateSection::Dependencies, coordinate(coordinates))
}

/// Install a test-writer subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local subscriber and return its formatted output
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_shared_across_clones() {
        let calls = CallCounter::new();
        let mut delegate = CountingDelegate::new(&calls);
        let mut props = PropertiesFile::new();
        MutationDelegate::apply(&mut delegate, &mut props, &ElementId::new("k")).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn capture_logs_records_events() {
        let (value, logs) = capture_logs(|| {
            tracing::error!(element = "prop.key", "Something broke");
            7
        });
        assert_eq!(value, 7);
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Something broke"));
        assert!(logs.contains("prop.key"));
    }

    #[test]
    fn scripted_op_carries_policy() {
        let (op, calls) = scripted_op(Some(ConflictPolicy::NoOp), true);
        assert_eq!(op.policy(), Some(ConflictPolicy::NoOp));
        assert_eq!(calls.get(), 0);
    }
}
