//! Error types for the Sundry utilities.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Kind;

/// The main error type for Sundry operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a mixed kinds error.
    #[must_use]
    pub fn mixed_kinds(first: Kind, second: Kind) -> Self {
        Self::new(ErrorKind::MixedKinds { first, second })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had a different kind than the operation accepts.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected kind.
        expected: Kind,
        /// The actual kind encountered.
        actual: Kind,
    },

    /// Two inputs that must share a kind did not.
    #[error("mixed kinds: {first} and {second} cannot be combined")]
    MixedKinds {
        /// The kind seen first.
        first: Kind,
        /// The conflicting kind.
        second: Kind,
    },

    /// An argument was outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: Option<String>,
    /// Chain of callers, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  called from {frame}")?;
            }
        }
        Ok(())
    }
}
