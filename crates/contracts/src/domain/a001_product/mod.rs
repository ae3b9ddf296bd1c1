pub mod aggregate;

pub use aggregate::{CreateProductRequest, MaterialUsage, ProductDto, ProductId, SetListedRequest};
