//! Integration tests for Layer 2: Stdlib
//!
//! Tests deduplication, formatting, filtering, and pricing through the
//! public surface.

mod dedup;
mod format;
mod pricing;
