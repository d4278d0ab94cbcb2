//! Integration tests for record summaries

use sundry_records::{Book, Item, Person, Product, User};

#[test]
fn person_summary_matches_display() {
    let person = Person::new("Alice", 25);
    assert_eq!(person.details(), "Name: Alice, Age: 25");
    assert_eq!(person.to_string(), person.details());
}

#[test]
fn book_summary() {
    let book = Book::new("Clean Code", "Robert C. Martin", 2008, true);
    assert_eq!(
        book.details(),
        "Title: Clean Code, Author: Robert C. Martin, Published: 2008, Available: Yes"
    );
    assert_eq!(format!("{book}"), book.details());
}

#[test]
fn book_before_common_era() {
    let book = Book::new("Odyssey", "Homer", -700, false);
    assert_eq!(
        book.details(),
        "Title: Odyssey, Author: Homer, Published: -700, Available: No"
    );
}

#[test]
fn records_are_cloneable_values() {
    let item = Item::new("Gadget", 4.2);
    assert_eq!(item.clone(), item);

    let user = User::new(9, "Sam", "sam@example.com", false);
    assert_eq!(user.clone(), user);

    let product = Product::new("Widget", 1.0, 1).with_discount(5.0);
    assert_eq!(product.clone(), product);
}
