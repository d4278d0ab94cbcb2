//! Integration tests for price aggregation

use sundry_records::Product;
use sundry_stdlib::{Config, total_price, total_price_with};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn cart_total() {
    let products = vec![
        Product::new("Pen", 10.0, 2),
        Product::new("Notebook", 25.0, 3).with_discount(10.0),
        Product::new("Bag", 50.0, 1).with_discount(20.0),
    ];
    assert!(approx(total_price(&products), 127.5));
}

#[test]
fn strict_config_ignores_large_discounts() {
    let products = vec![Product::new("Coat", 200.0, 1).with_discount(75.0)];
    assert!(approx(total_price(&products), 50.0));
    assert!(approx(total_price_with(&products, &Config::strict()), 200.0));
}

#[test]
fn validated_config_prices_normally() {
    let config = Config::default().with_max_discount(30.0);
    assert!(config.validate().is_ok());
    let products = vec![Product::new("Hat", 40.0, 1).with_discount(25.0)];
    assert!(approx(total_price_with(&products, &config), 30.0));
}

#[test]
fn totals_stay_non_negative_with_oversized_max_discount() {
    let config = Config::default().with_max_discount(150.0);
    let products = vec![
        Product::new("Pen", 10.0, 1).with_discount(150.0),
        Product::new("Ink", 4.0, 2).with_discount(50.0),
    ];
    assert!(approx(total_price_with(&products, &config), 14.0));
}
