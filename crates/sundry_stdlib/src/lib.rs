//! Utility functions for Sundry.
//!
//! This crate provides pure, stateless functions organized by category:
//! - [`dedup`]: order-preserving deduplication of two sequences
//! - [`format`]: value formatting and length computation
//! - [`filter`]: predicate filters over catalog records
//! - [`pricing`]: price aggregation over products
//!
//! Thresholds and multipliers are read from [`Config`]. Every function has a
//! variant using [`Config::default`] and a `_with` variant taking a config.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dedup;
pub mod filter;
pub mod format;
pub mod pricing;

pub use config::Config;
pub use dedup::{unique, unique_values};
pub use filter::{filter_active_users, filter_by_rating, filter_by_rating_with};
pub use format::{Measure, format_value, format_value_with, length, value_length};
pub use pricing::{line_total, total_price, total_price_with};
