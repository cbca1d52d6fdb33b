//! Engine configuration
//!
//! Controls the policy applied to operations that were never configured and
//! the audit performed on non-mutating outcomes.

use crate::error::ConfigurationError;
use crate::policy::ConflictPolicy;

/// Default policy for operations that were never configured
pub const DEFAULT_POLICY: ConflictPolicy = ConflictPolicy::Fail;

/// Executor configuration
///
/// # Example
/// ```
/// use xform_ops::{ConflictPolicy, EngineConfig};
///
/// let config = EngineConfig::from_toml_str(r#"
///     default_policy = "warn_not_add"
///     require_explicit_policy = false
/// "#).unwrap();
///
/// assert_eq!(config.default_policy, ConflictPolicy::WarnNotAdd);
/// assert!(config.verify_untouched);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Policy used when an operation never had one set
    pub default_policy: ConflictPolicy,

    /// Refuse to fall back to `default_policy`
    pub require_explicit_policy: bool,

    /// Fingerprint the target around non-mutating outcomes and log if it changed
    ///
    /// Costs one full fingerprint per execution, taken before the probe and
    /// so paid by adds as well, plus a second one on non-add outcomes.
    /// Turn off for large targets on hot paths.
    pub verify_untouched: bool,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict configuration: every operation must carry its own policy
    #[inline]
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_explicit_policy_required(true)
    }

    /// With default policy
    #[inline]
    #[must_use]
    pub fn with_default_policy(mut self, policy: ConflictPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// With explicit policies required
    #[inline]
    #[must_use]
    pub fn with_explicit_policy_required(mut self, required: bool) -> Self {
        self.require_explicit_policy = required;
        self
    }

    /// With untouched-target verification
    #[inline]
    #[must_use]
    pub fn with_verify_untouched(mut self, verify: bool) -> Self {
        self.verify_untouched = verify;
        self
    }

    /// Policy in effect for an operation whose own policy is `configured`
    #[must_use]
    pub fn effective_policy(&self, configured: Option<ConflictPolicy>) -> Option<ConflictPolicy> {
        match configured {
            Some(policy) => Some(policy),
            None if self.require_explicit_policy => None,
            None => Some(self.default_policy),
        }
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidConfig`] on malformed input or
    /// unknown keys
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(input).map_err(|e| ConfigurationError::InvalidConfig(e.to_string()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_policy: DEFAULT_POLICY,
            require_explicit_policy: false,
            verify_untouched: true,
        }
    }
}
