use crate::domain::a004_item::ItemId;
use crate::domain::common::format_number;
use crate::domain::common::lenient::{null_as_default, number_option};
use serde::{Deserialize, Serialize};

/// Row of `GET /api/reports/low-stock`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockRowDto {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "number_option")]
    pub quantity_in_stock: Option<f64>,
}

impl LowStockRowDto {
    pub fn quantity_display(&self) -> String {
        format_number(self.quantity_in_stock.unwrap_or(0.0))
    }
}
