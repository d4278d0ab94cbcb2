//! Core values, canonical keys, and error types for Sundry.
//!
//! This crate provides:
//! - [`Value`] - Dynamic scalar value (number, text, or boolean)
//! - [`Kind`] - Kind descriptors reported in errors
//! - [`CanonicalKey`] - String keys used as the uniqueness criterion
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod key;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use key::CanonicalKey;
pub use types::Kind;
pub use value::Value;

/// Result type alias using the Sundry error type.
pub type Result<T> = std::result::Result<T, Error>;
