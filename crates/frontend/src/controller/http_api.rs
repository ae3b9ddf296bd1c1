use super::ports::InventoryApi;
use crate::domain::{a001_product, a002_material, a003_bom_line, a004_item};
use crate::shared::api_utils::ClientConfig;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_product::{CreateProductRequest, ProductDto, ProductId};
use contracts::domain::a002_material::{MaterialDto, MaterialId, MaterialPayload};
use contracts::domain::a003_bom_line::{BomLineDto, UpsertBomLineRequest};
use contracts::domain::a004_item::{CreateItemRequest, ItemDto};
use contracts::projections::p900_low_stock::LowStockRowDto;
use contracts::projections::p901_sales_summary::SalesSummaryDto;
use contracts::usecases::u501_record_sale::RecordSaleRequest;
use contracts::usecases::u502_restock::RestockRequest;

/// `InventoryApi` over `fetch`, delegating to each domain's `model` module.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    config: ClientConfig,
}

impl HttpInventoryApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    async fn list_products(&self) -> Result<Vec<ProductDto>, ApiError> {
        a001_product::model::fetch_all(&self.config).await
    }

    async fn create_product(&self, request: &CreateProductRequest) -> Result<(), ApiError> {
        a001_product::model::create(&self.config, request).await
    }

    async fn set_product_listed(&self, id: ProductId, is_listed: bool) -> Result<(), ApiError> {
        a001_product::model::set_listed(&self.config, id, is_listed).await
    }

    async fn list_materials(&self) -> Result<Vec<MaterialDto>, ApiError> {
        a002_material::model::fetch_all(&self.config).await
    }

    async fn create_material(&self, payload: &MaterialPayload) -> Result<(), ApiError> {
        a002_material::model::create(&self.config, payload).await
    }

    async fn update_material(&self, id: MaterialId, payload: &MaterialPayload) -> Result<(), ApiError> {
        a002_material::model::update(&self.config, id, payload).await
    }

    async fn list_bom_lines(&self, product_id: ProductId) -> Result<Vec<BomLineDto>, ApiError> {
        a003_bom_line::model::fetch_lines(&self.config, product_id).await
    }

    async fn upsert_bom_line(
        &self,
        product_id: ProductId,
        request: &UpsertBomLineRequest,
    ) -> Result<(), ApiError> {
        a003_bom_line::model::upsert_line(&self.config, product_id, request).await
    }

    async fn delete_bom_line(&self, product_id: ProductId, material_id: MaterialId) -> Result<(), ApiError> {
        a003_bom_line::model::delete_line(&self.config, product_id, material_id).await
    }

    async fn list_items(&self) -> Result<Vec<ItemDto>, ApiError> {
        a004_item::model::fetch_all(&self.config).await
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<(), ApiError> {
        a004_item::model::create(&self.config, request).await
    }

    async fn record_sale(&self, request: &RecordSaleRequest) -> Result<(), ApiError> {
        a004_item::model::record_sale(&self.config, request).await
    }

    async fn record_restock(&self, request: &RestockRequest) -> Result<(), ApiError> {
        a004_item::model::record_restock(&self.config, request).await
    }

    async fn low_stock_report(&self) -> Result<Vec<LowStockRowDto>, ApiError> {
        a004_item::model::fetch_low_stock(&self.config).await
    }

    async fn sales_summary(&self) -> Result<SalesSummaryDto, ApiError> {
        a004_item::model::fetch_sales_summary(&self.config).await
    }
}
