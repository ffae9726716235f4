//! Domain types and the in-memory store core.
//!
//! Purpose: Define the transport-agnostic resource types, the generic
//! collection store, and the error payload shared by every adapter. Inbound
//! adapters translate these into HTTP statuses and JSON bodies; nothing in
//! this module knows about Actix.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — API error payload with stable machine codes.
//! - `Product` / `User` — resource records with their `Draft` and `Patch`
//!   companions.
//! - `Resource`, `ResourceStore`, `SharedStore` — the collection core.

pub mod error;
pub mod example_data;
pub mod product;
pub mod store;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::product::{Product, ProductDraft, ProductPatch};
pub use self::store::{Resource, ResourceStore, SharedStore};
pub use self::user::{User, UserDraft, UserPatch};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use storefront::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such record"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
