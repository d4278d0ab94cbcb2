//! Configuration for the utility functions.

use sundry_foundation::{Error, Result};

/// Thresholds and multipliers used by the formatting, filtering, and pricing
/// functions.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Inclusive minimum rating kept by [`filter_by_rating`](crate::filter_by_rating).
    pub min_rating: f64,

    /// Inclusive upper bound of an honored discount percentage.
    pub max_discount: f64,

    /// Multiplier applied to numbers by [`format_value`](crate::format_value).
    pub number_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_rating: 4.0,
            max_discount: 100.0,
            number_scale: 10.0,
        }
    }
}

impl Config {
    /// Creates a configuration that keeps only top-rated items and caps
    /// discounts at half price.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_rating: 4.5,
            max_discount: 50.0,
            ..Self::default()
        }
    }

    /// Builder method to set the minimum rating.
    #[must_use]
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Builder method to set the maximum honored discount.
    #[must_use]
    pub fn with_max_discount(mut self, percent: f64) -> Self {
        self.max_discount = percent;
        self
    }

    /// Builder method to set the number multiplier.
    #[must_use]
    pub fn with_number_scale(mut self, scale: f64) -> Self {
        self.number_scale = scale;
        self
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a field is not finite or if `max_discount`
    /// lies outside `(0, 100]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_rating", self.min_rating),
            ("max_discount", self.max_discount),
            ("number_scale", self.number_scale),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid_config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.max_discount <= 0.0 || self.max_discount > 100.0 {
            return Err(Error::invalid_config(format!(
                "max_discount must be in (0, 100], got {}",
                self.max_discount
            )));
        }
        Ok(())
    }
}
