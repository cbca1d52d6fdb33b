//! xform Ops - conflict-policy engine for add-element operations
//!
//! Every transformation that adds an element (a property, a dependency, a
//! file) must decide what happens when that element is already there. This
//! crate makes that decision uniform:
//! - [`AddElement`] exposes the five policy setters on every add-operation
//! - [`resolve`] maps (policy, presence) to an action and a result type
//! - [`OperationExecutor`] probes, resolves, applies, and reports
//!
//! # Example
//!
//! ```rust
//! use xform_ops::{AddElement, OperationExecutor, ResultType};
//! use xform_ops::ops::add_property;
//! use xform_artifact::types::PropertiesFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut props: PropertiesFile = [("prop.key", "old")].into_iter().collect();
//!
//! let mut op = add_property("prop.key", "new");
//! op.no_op_if_present()?;
//!
//! let result = OperationExecutor::default().execute(&mut op, &mut props)?;
//! assert_eq!(result.result_type(), ResultType::NoOp);
//! assert_eq!(result.message(), "prop.key already present, skipped per NoOp policy");
//! assert_eq!(props.get("prop.key"), Some("old"));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
mod config;
mod contract;
mod delegate;
mod error;
mod executor;
mod operation;
mod policy;
mod resolver;
mod result;
mod state;

pub mod ops;

// Re-exports
pub use config::{EngineConfig, DEFAULT_POLICY};
pub use contract::AddElement;
pub use delegate::{ExistenceProbe, MutationDelegate};
pub use error::{ApplyError, BoxError, ConfigurationError, ExecutionError, ProbeError};
pub use executor::OperationExecutor;
pub use operation::AddElementOperation;
pub use policy::ConflictPolicy;
pub use resolver::{resolve, MessageTemplate, Resolution};
pub use result::{ExecutionReport, ExecutionResult, ResultType};
pub use state::OperationState;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and running add-operations
    pub use crate::{
        AddElement, AddElementOperation, ConflictPolicy, EngineConfig, ExecutionReport,
        ExecutionResult, OperationExecutor, ResultType,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
