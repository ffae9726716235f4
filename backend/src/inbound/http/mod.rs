//! HTTP adapters: CRUD handlers, health probes, error mapping, and shared
//! state.

pub mod error;
pub mod health;
pub mod products;
pub mod state;
pub mod users;

pub use crate::domain::ApiResult;
