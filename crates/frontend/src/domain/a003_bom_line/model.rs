use crate::shared::api_utils::{delete, get_json, post_json, ClientConfig};
use crate::shared::error::ApiError;
use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_material::MaterialId;
use contracts::domain::a003_bom_line::{BomLineDto, UpsertBomLineRequest};

pub fn lines_endpoint(product_id: ProductId) -> String {
    format!("/api/products/{}/materials", product_id)
}

pub fn line_endpoint(product_id: ProductId, material_id: MaterialId) -> String {
    format!("{}/{}", lines_endpoint(product_id), material_id)
}

pub async fn fetch_lines(config: &ClientConfig, product_id: ProductId) -> Result<Vec<BomLineDto>, ApiError> {
    get_json(config, &lines_endpoint(product_id)).await
}

pub async fn upsert_line(
    config: &ClientConfig,
    product_id: ProductId,
    request: &UpsertBomLineRequest,
) -> Result<(), ApiError> {
    post_json(config, &lines_endpoint(product_id), request).await
}

pub async fn delete_line(
    config: &ClientConfig,
    product_id: ProductId,
    material_id: MaterialId,
) -> Result<(), ApiError> {
    delete(config, &line_endpoint(product_id, material_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(lines_endpoint(ProductId(1)), "/api/products/1/materials");
        assert_eq!(
            line_endpoint(ProductId(1), MaterialId(8)),
            "/api/products/1/materials/8"
        );
    }
}
