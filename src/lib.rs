//! Sundry - small pure utilities
//!
//! This crate re-exports all layers of Sundry for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: sundry_stdlib      — unique, format_value, length, filters, pricing
//! Layer 1: sundry_records     — Person, Book, Item, User, Product
//! Layer 0: sundry_foundation  — Core types (Value, CanonicalKey, Error)
//! ```

pub use sundry_foundation as foundation;
pub use sundry_records as records;
pub use sundry_stdlib as stdlib;

pub use sundry_stdlib::unique;
