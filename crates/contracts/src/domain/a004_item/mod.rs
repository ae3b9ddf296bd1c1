//! Legacy stock item API, used when the backend has no product endpoints.

pub mod aggregate;

pub use aggregate::{CreateItemRequest, ItemDto, ItemId};
