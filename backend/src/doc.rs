//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the ten CRUD endpoints plus the health probes
//! - **Schemas**: the resource records, their drafts and patches, and the
//!   error payload
//!
//! The generated specification backs Swagger UI (debug builds) and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{
    Error, ErrorCode, Product, ProductDraft, ProductPatch, User, UserDraft, UserPatch,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "CRUD over in-memory product and user collections."
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Product,
        ProductDraft,
        ProductPatch,
        User,
        UserDraft,
        UserPatch,
        Error,
        ErrorCode
    )),
    tags(
        (name = "products", description = "Operations on the product collection"),
        (name = "users", description = "Operations on the user collection"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
