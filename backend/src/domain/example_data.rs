//! Fixture records for optional startup seeding.
//!
//! Seeding is opt-in via `SEED_EXAMPLE_DATA=1` so tests and local
//! experiments start from empty stores by default.

use crate::domain::{Product, User};

/// Sample catalogue entries with ids 1..=3.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Trail runner shoes".into(),
            image: "/images/trail-runner.jpg".into(),
            description: "Lightweight shoes with a grippy outsole".into(),
            brand: "Summit".into(),
            category: "Footwear".into(),
            price: 89.99,
            count_in_stock: 12,
            rating: 4.5,
            num_reviews: 7,
        },
        Product {
            id: 2,
            name: "Wireless earbuds".into(),
            image: "/images/earbuds.jpg".into(),
            description: "Bluetooth earbuds with charging case".into(),
            brand: "Volt".into(),
            category: "Electronics".into(),
            price: 59.5,
            count_in_stock: 30,
            rating: 4.1,
            num_reviews: 21,
        },
        Product {
            id: 3,
            name: "Steel water bottle".into(),
            image: "/images/bottle.jpg".into(),
            description: "Insulated 750ml bottle".into(),
            brand: "Summit".into(),
            category: "Outdoors".into(),
            price: 19.0,
            count_in_stock: 0,
            rating: 4.8,
            num_reviews: 3,
        },
    ]
}

/// Sample accounts with ids 1..=2.
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            ci: 40_123_456,
            password: "analytical-engine".into(),
            is_admin: true,
        },
        User {
            id: 2,
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            ci: 51_987_654,
            password: "cobol-rules".into(),
            is_admin: false,
        },
    ]
}
