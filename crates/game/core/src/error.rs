//! Common error infrastructure for heroes-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `InitializationError`) are
//! defined next to the operations that produce them. This module provides the
//! shared classification used across all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **Rich Context**: Errors carry the offending position or value
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller may simply try something else (e.g., another move)
/// - **Validation**: Invalid input or data that should be fixed before retrying
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the game continues unchanged.
    ///
    /// Examples: destination off the map, destination is water
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty reward pool, hero placed outside the map
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all heroes-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
