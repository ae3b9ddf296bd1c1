//! Seams between the controller and the outside world.
//!
//! `InventoryApi` is the REST backend, `UiPort` is everything the browser
//! provides (rendering, alerts, localStorage, the address bar). The app wires
//! in `HttpInventoryApi` and `BrowserUi`; tests use in-memory fakes.

use crate::routes::ActiveView;
use crate::shared::error::ApiError;
use crate::shared::theme::Theme;
use crate::state::AppState;
use async_trait::async_trait;
use contracts::domain::a001_product::{CreateProductRequest, ProductDto, ProductId};
use contracts::domain::a002_material::{MaterialDto, MaterialId, MaterialPayload};
use contracts::domain::a003_bom_line::{BomLineDto, UpsertBomLineRequest};
use contracts::domain::a004_item::{CreateItemRequest, ItemDto};
use contracts::projections::p900_low_stock::LowStockRowDto;
use contracts::projections::p901_sales_summary::SalesSummaryDto;
use contracts::usecases::u501_record_sale::RecordSaleRequest;
use contracts::usecases::u502_restock::RestockRequest;

#[async_trait(?Send)]
pub trait InventoryApi {
    async fn list_products(&self) -> Result<Vec<ProductDto>, ApiError>;
    async fn create_product(&self, request: &CreateProductRequest) -> Result<(), ApiError>;
    async fn set_product_listed(&self, id: ProductId, is_listed: bool) -> Result<(), ApiError>;

    async fn list_materials(&self) -> Result<Vec<MaterialDto>, ApiError>;
    async fn create_material(&self, payload: &MaterialPayload) -> Result<(), ApiError>;
    async fn update_material(&self, id: MaterialId, payload: &MaterialPayload) -> Result<(), ApiError>;

    async fn list_bom_lines(&self, product_id: ProductId) -> Result<Vec<BomLineDto>, ApiError>;
    async fn upsert_bom_line(
        &self,
        product_id: ProductId,
        request: &UpsertBomLineRequest,
    ) -> Result<(), ApiError>;
    async fn delete_bom_line(&self, product_id: ProductId, material_id: MaterialId) -> Result<(), ApiError>;

    async fn list_items(&self) -> Result<Vec<ItemDto>, ApiError>;
    async fn create_item(&self, request: &CreateItemRequest) -> Result<(), ApiError>;
    async fn record_sale(&self, request: &RecordSaleRequest) -> Result<(), ApiError>;
    async fn record_restock(&self, request: &RestockRequest) -> Result<(), ApiError>;
    async fn low_stock_report(&self) -> Result<Vec<LowStockRowDto>, ApiError>;
    async fn sales_summary(&self) -> Result<SalesSummaryDto, ApiError>;
}

pub trait UiPort {
    /// Publish a new state to the view.
    fn render(&self, state: &AppState);

    /// Blocking, user-visible error message.
    fn alert(&self, message: &str);

    fn load_preference(&self, key: &str) -> Option<String>;
    fn store_preference(&self, key: &str, value: &str);
    fn remove_preference(&self, key: &str);

    fn apply_theme(&self, theme: Theme);

    /// Current `location.search`, used to pick the initial view.
    fn current_search(&self) -> String;

    /// Reflect the active view in the address bar without reloading.
    fn push_view(&self, view: ActiveView);
}
