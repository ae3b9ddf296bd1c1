pub mod aggregate;

pub use aggregate::{BomLineDto, UpsertBomLineRequest};
