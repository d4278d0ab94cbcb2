//! Catalog records: rated items, user accounts, and priced products.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A titled item with a numeric rating.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Title of the item.
    pub title: String,
    /// Rating, conventionally on a 0 to 5 scale.
    pub rating: f64,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

/// A user account.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_active,
        }
    }
}

/// A product line: unit price, quantity, and an optional percentage discount.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Number of units.
    pub quantity: u32,
    /// Discount in percent. Only values in `(0, 100]` are honored when pricing.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub discount: Option<f64>,
}

impl Product {
    /// Creates a product without a discount.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            discount: None,
        }
    }

    /// Sets the discount percentage.
    #[must_use]
    pub fn with_discount(mut self, percent: f64) -> Self {
        self.discount = Some(percent);
        self
    }
}
