use crate::shared::api_utils::{get_json, patch_json, post_json, ClientConfig};
use crate::shared::error::ApiError;
use contracts::domain::a001_product::{CreateProductRequest, ProductDto, ProductId, SetListedRequest};

pub const PRODUCTS_ENDPOINT: &str = "/api/products";

pub fn listed_endpoint(id: ProductId) -> String {
    format!("{}/{}/listed", PRODUCTS_ENDPOINT, id)
}

pub async fn fetch_all(config: &ClientConfig) -> Result<Vec<ProductDto>, ApiError> {
    get_json(config, PRODUCTS_ENDPOINT).await
}

pub async fn create(config: &ClientConfig, request: &CreateProductRequest) -> Result<(), ApiError> {
    post_json(config, PRODUCTS_ENDPOINT, request).await
}

pub async fn set_listed(config: &ClientConfig, id: ProductId, is_listed: bool) -> Result<(), ApiError> {
    patch_json(config, &listed_endpoint(id), &SetListedRequest { is_listed }).await
}
