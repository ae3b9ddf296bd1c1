use crate::domain::a004_item::ItemId;
use crate::domain::common::parse_number_or_zero;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/transactions/sale`. Stock sufficiency is checked by the
/// backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecordSaleRequest {
    pub item_id: ItemId,
    pub quantity: f64,
}

impl RecordSaleRequest {
    pub fn new(item_id: ItemId, quantity: &str) -> Self {
        Self {
            item_id,
            quantity: parse_number_or_zero(quantity),
        }
    }
}
