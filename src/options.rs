//! Configuration options for collection processing.

use serde::{Deserialize, Serialize};

/// What the iteration engine does after a callback fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Stop at the first fault; the report holds that fault
    FailFast,
    /// Attempt every element; the report holds the last fault
    Continue,
}

impl FaultPolicy {
    /// Check if iteration halts after the first fault
    pub fn is_fail_fast(&self) -> bool {
        matches!(self, Self::FailFast)
    }
}

impl Default for FaultPolicy {
    fn default() -> Self {
        Self::FailFast
    }
}

impl std::fmt::Display for FaultPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail_fast"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// Options controlling how operations drive caller callbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Fault policy for for_each, map, filter and group_by (default: fail-fast)
    #[serde(default)]
    pub fault_policy: FaultPolicy,

    /// Fault policy for zip (default: continue)
    #[serde(default = "default_zip_policy")]
    pub zip_policy: FaultPolicy,

    /// Convert callback panics into error reports (default: true)
    #[serde(default = "default_catch_panics")]
    pub catch_panics: bool,
}

fn default_zip_policy() -> FaultPolicy {
    FaultPolicy::Continue
}

fn default_catch_panics() -> bool {
    true
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            fault_policy: FaultPolicy::FailFast,
            zip_policy: default_zip_policy(),
            catch_panics: default_catch_panics(),
        }
    }
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the fault policy of the iterating operations
    pub fn fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }

    /// Builder pattern: set the fault policy of zip
    pub fn zip_policy(mut self, policy: FaultPolicy) -> Self {
        self.zip_policy = policy;
        self
    }

    /// Builder pattern: enable/disable panic capture
    pub fn catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Load options from a JSON document; missing fields take their defaults
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
