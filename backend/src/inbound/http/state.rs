//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data`, so tests can
//! construct an app around a fresh pair of stores without touching process
//! globals.

use crate::domain::example_data::{sample_products, sample_users};
use crate::domain::{Product, SharedStore, User};

/// Dependency bundle for HTTP handlers: one shared store per resource type.
#[derive(Clone)]
pub struct HttpState {
    /// The product collection.
    pub products: SharedStore<Product>,
    /// The user collection.
    pub users: SharedStore<User>,
}

impl HttpState {
    /// State with two empty collections.
    pub fn new() -> Self {
        Self {
            products: SharedStore::new(),
            users: SharedStore::new(),
        }
    }

    /// State pre-populated with the example fixtures.
    pub fn seeded() -> Self {
        Self {
            products: SharedStore::seeded(sample_products()),
            users: SharedStore::seeded(sample_users()),
        }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new()
    }
}
