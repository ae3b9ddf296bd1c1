use crate::shared::api_utils::{get_json, post_json, ClientConfig};
use crate::shared::error::ApiError;
use contracts::domain::a004_item::{CreateItemRequest, ItemDto};
use contracts::projections::p900_low_stock::LowStockRowDto;
use contracts::projections::p901_sales_summary::SalesSummaryDto;
use contracts::usecases::u501_record_sale::RecordSaleRequest;
use contracts::usecases::u502_restock::RestockRequest;

pub const ITEMS_ENDPOINT: &str = "/api/items";
pub const SALE_ENDPOINT: &str = "/api/transactions/sale";
pub const RESTOCK_ENDPOINT: &str = "/api/transactions/restock";
pub const LOW_STOCK_ENDPOINT: &str = "/api/reports/low-stock";
pub const SALES_SUMMARY_ENDPOINT: &str = "/api/reports/sales-summary";

pub async fn fetch_all(config: &ClientConfig) -> Result<Vec<ItemDto>, ApiError> {
    get_json(config, ITEMS_ENDPOINT).await
}

pub async fn create(config: &ClientConfig, request: &CreateItemRequest) -> Result<(), ApiError> {
    post_json(config, ITEMS_ENDPOINT, request).await
}

pub async fn record_sale(config: &ClientConfig, request: &RecordSaleRequest) -> Result<(), ApiError> {
    post_json(config, SALE_ENDPOINT, request).await
}

pub async fn record_restock(config: &ClientConfig, request: &RestockRequest) -> Result<(), ApiError> {
    post_json(config, RESTOCK_ENDPOINT, request).await
}

pub async fn fetch_low_stock(config: &ClientConfig) -> Result<Vec<LowStockRowDto>, ApiError> {
    get_json(config, LOW_STOCK_ENDPOINT).await
}

pub async fn fetch_sales_summary(config: &ClientConfig) -> Result<SalesSummaryDto, ApiError> {
    get_json(config, SALES_SUMMARY_ENDPOINT).await
}
