//! Common error infrastructure for critter-core.
//!
//! Domain errors (`GridError`, `WorldError`, `MoveRejection`, ...) live next
//! to the code that raises them. This module holds what they share: a
//! severity classification and the [`SimError`] trait used by callers that
//! want to log or branch on errors uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the simulation carries on; the failing step is skipped
/// - **Validation**: caller supplied invalid input and should not retry unchanged
/// - **Fatal**: the value under construction cannot exist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the step is dropped and the simulation continues.
    ///
    /// Examples: destination occupied, destination outside the grid
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: coordinate outside the grid, unknown direction name
    Validation,

    /// Fatal error - construction cannot complete.
    ///
    /// Examples: unmapped map character, ragged map rows
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all critter-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return stable, upper-case codes from [`SimError::error_code`]
pub trait SimError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
