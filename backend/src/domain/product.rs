//! Product resource: record, creation draft, and field patch.
//!
//! The wire format is camelCase JSON matching the published API contract
//! (`countInStock`, `numReviews`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::store::Resource;

/// One product in the catalogue collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, unique within the collection.
    #[schema(example = 1)]
    pub id: u64,
    /// Display name shown in listings.
    #[schema(example = "Trail runner shoes")]
    pub name: String,
    /// Image URL.
    #[schema(example = "/images/trail-runner.jpg")]
    pub image: String,
    /// Free-form description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Catalogue category.
    #[schema(example = "Footwear")]
    pub category: String,
    /// Unit price.
    #[schema(example = 89.99)]
    pub price: f64,
    /// Units currently in stock.
    pub count_in_stock: u32,
    /// Average review rating.
    #[schema(example = 4.5)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub num_reviews: u32,
}

/// Fields accepted when creating a product; the id is store-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name shown in listings.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Free-form description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Catalogue category.
    pub category: String,
    /// Unit price.
    pub price: f64,
    /// Units currently in stock.
    pub count_in_stock: u32,
    /// Average review rating.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub num_reviews: u32,
}

/// Partial overwrite for an update; absent fields keep their current value.
/// Only declared schema fields can be patched; anything else in the body is
/// ignored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    /// New display name, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New image URL, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// New description, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New brand, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// New category, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New unit price, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New stock count, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_in_stock: Option<u32>,
    /// New rating, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// New review count, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_reviews: Option<u32>,
}

impl Resource for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn from_draft(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image: draft.image,
            description: draft.description,
            brand: draft.brand,
            category: draft.category,
            price: draft.price,
            count_in_stock: draft.count_in_stock,
            rating: draft.rating,
            num_reviews: draft.num_reviews,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(count_in_stock) = patch.count_in_stock {
            self.count_in_stock = count_in_stock;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(num_reviews) = patch.num_reviews {
            self.num_reviews = num_reviews;
        }
    }
}
