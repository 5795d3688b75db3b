//! Mesh construction options.
//!
//! Whether referential integrity is checked, and what happens to elements
//! without a value, are decided by the caller. `MeshOptions::from_env` is
//! the environment-driven policy used by the CLI and the request handler.

use std::env;

/// Environment variable enabling referential sanity checks (`"true"` only).
pub const SANITY_CHECK_ENV: &str = "SANITY_CHECK";
/// Environment variable selecting the [`MissingValuePolicy`].
pub const MISSING_VALUES_ENV: &str = "MESH_MISSING_VALUES";

/// What to do when an element has no value record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingValuePolicy {
    /// Fail mesh construction with [`MeshError::MissingValue`](crate::mesh_error::MeshError::MissingValue).
    #[default]
    Error,
    /// Substitute negative infinity. Deprecated permissive fallback; opt-in only.
    NegativeInfinity,
}

impl MissingValuePolicy {
    /// Parse the textual form used in the environment (`error`, `neg-infinity`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "neg-infinity" | "negative-infinity" => Some(Self::NegativeInfinity),
            _ => None,
        }
    }
}

/// Options for building a [`Mesh`](crate::topology::mesh::Mesh).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshOptions {
    /// Verify node references of elements and element references of values.
    pub sanity_check: bool,
    /// Handling of elements without a value record.
    pub missing_values: MissingValuePolicy,
}

impl MeshOptions {
    /// Options with every check enabled and fail-fast on missing values.
    pub fn strict() -> Self {
        Self {
            sanity_check: true,
            missing_values: MissingValuePolicy::Error,
        }
    }

    pub fn with_sanity_check(mut self, enabled: bool) -> Self {
        self.sanity_check = enabled;
        self
    }

    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    /// Read options from `SANITY_CHECK` and `MESH_MISSING_VALUES`.
    ///
    /// Unset variables keep the defaults. An unrecognised missing-value
    /// policy is logged and ignored.
    pub fn from_env() -> Self {
        let sanity_check = env::var(SANITY_CHECK_ENV).is_ok_and(|v| v == "true");
        let missing_values = match env::var(MISSING_VALUES_ENV) {
            Ok(raw) => MissingValuePolicy::parse(&raw).unwrap_or_else(|| {
                log::warn!(
                    "ignoring {MISSING_VALUES_ENV}={raw:?}; expected `error` or `neg-infinity`"
                );
                MissingValuePolicy::default()
            }),
            Err(_) => MissingValuePolicy::default(),
        };
        Self {
            sanity_check,
            missing_values,
        }
    }
}
