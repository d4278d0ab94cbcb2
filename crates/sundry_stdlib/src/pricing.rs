//! Price aggregation.

use sundry_records::Product;
use tracing::debug;

use crate::config::Config;

/// Upper bound on any honored discount, whatever the config says.
const FULL_DISCOUNT: f64 = 100.0;

/// Returns `price * quantity`, reduced by the product's discount percentage
/// when it lies in `(0, config.max_discount]`. Other discounts are ignored.
///
/// Discounts above 100% are never honored, so a line total is never negative
/// even when `config` has not been validated.
#[must_use]
pub fn line_total(product: &Product, config: &Config) -> f64 {
    let base = product.price * f64::from(product.quantity);
    match product.discount {
        Some(percent)
            if percent > 0.0 && percent <= config.max_discount && percent <= FULL_DISCOUNT =>
        {
            base - base * percent / FULL_DISCOUNT
        }
        Some(percent) => {
            debug!(product = %product.name, percent, "ignoring out-of-range discount");
            base
        }
        None => base,
    }
}

/// Sums the line totals of all products with the default configuration.
#[must_use]
pub fn total_price(products: &[Product]) -> f64 {
    total_price_with(products, &Config::default())
}

/// Sums the line totals of all products.
#[must_use]
pub fn total_price_with(products: &[Product], config: &Config) -> f64 {
    products.iter().map(|p| line_total(p, config)).sum()
}
