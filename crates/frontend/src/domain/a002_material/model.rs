use crate::shared::api_utils::{get_json, patch_json, post_json, ClientConfig};
use crate::shared::error::ApiError;
use contracts::domain::a002_material::{MaterialDto, MaterialId, MaterialPayload};

pub const MATERIALS_ENDPOINT: &str = "/api/materials";

pub fn material_endpoint(id: MaterialId) -> String {
    format!("{}/{}", MATERIALS_ENDPOINT, id)
}

pub async fn fetch_all(config: &ClientConfig) -> Result<Vec<MaterialDto>, ApiError> {
    get_json(config, MATERIALS_ENDPOINT).await
}

pub async fn create(config: &ClientConfig, payload: &MaterialPayload) -> Result<(), ApiError> {
    post_json(config, MATERIALS_ENDPOINT, payload).await
}

pub async fn update(config: &ClientConfig, id: MaterialId, payload: &MaterialPayload) -> Result<(), ApiError> {
    patch_json(config, &material_endpoint(id), payload).await
}
