//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (`RouteError`, `TurnError`) live next to the rules
//! they guard. This module only provides the shared severity classification
//! so callers can decide between aborting a battle and bouncing a bad input
//! back to the UI.
//!
//! # Classification
//!
//! - **Configuration** problems (missing oracle, empty roster, zero-sized grid)
//!   are [`ErrorSeverity::Fatal`]: no partial battle may run.
//! - **Invalid input** (destination outside the reachable set, skip outside
//!   the ready phase) is [`ErrorSeverity::Validation`] or
//!   [`ErrorSeverity::Recoverable`]; turn state is left unchanged.
//! - A route that exceeds its step bound is reported as a recoverable
//!   "path not found"; broken step invariants are [`ErrorSeverity::Internal`].

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or an alternative request.
    ///
    /// Examples: destination currently occupied, route guard tripped on a
    /// pathological layout.
    Recoverable,

    /// Validation error - invalid input that should be rejected without retry.
    ///
    /// Examples: destination outside the reachable set, skip requested while
    /// a move is not allowed.
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the battle cannot start or continue.
    ///
    /// Examples: empty roster, missing terrain oracle.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true for rejected input that left game state untouched.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error must abort battle initialization.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all battle errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; UIs and tests match on it
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
