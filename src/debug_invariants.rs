//! Structural self-checks for the mesh arena and derived adjacency tables.
//!
//! Checks are cheap enough to run after every construction in debug builds;
//! release builds skip them unless `strict-invariants` or `check-invariants`
//! is enabled.

use crate::mesh_error::MeshError;

/// Types that can verify their own structural invariants.
pub trait DebugInvariants {
    /// Panic on a violated invariant when invariant checking is compiled in.
    fn debug_assert_invariants(&self);
    /// Return the first violated invariant, if any.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Turn a failed condition into [`MeshError::InvariantViolation`].
#[inline]
pub(crate) fn ensure(ok: bool, describe: impl FnOnce() -> String) -> Result<(), MeshError> {
    if ok {
        Ok(())
    } else {
        Err(MeshError::InvariantViolation(describe()))
    }
}

/// Run a fallible invariant check and panic with context on failure.
/// Expands to nothing unless invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
