//! Wire types shared between the inventory backend and the browser client.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod usecases;
