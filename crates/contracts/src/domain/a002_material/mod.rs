pub mod aggregate;

pub use aggregate::{MaterialDto, MaterialFormFields, MaterialId, MaterialPayload, DEFAULT_COLOR};
