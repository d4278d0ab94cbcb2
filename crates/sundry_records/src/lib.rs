//! Plain data records for Sundry.
//!
//! Records carry no behavior beyond construction and display. The
//! transformations that consume them live in `sundry_stdlib`.
//!
//! - [`Person`] and [`Book`] render a one-line summary via `details()`
//! - [`Item`] and [`User`] are inputs to the filters
//! - [`Product`] is the input to price aggregation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod book;
pub mod catalog;
pub mod person;

pub use book::Book;
pub use catalog::{Item, Product, User};
pub use person::Person;
