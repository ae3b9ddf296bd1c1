use crate::domain::a002_material::MaterialId;
use crate::domain::common::format_number;
use crate::domain::common::lenient::{null_as_default, number_or_zero};
use serde::{Deserialize, Serialize};

/// One bill-of-materials line of a product, as listed by
/// `GET /api/products/{id}/materials`.
///
/// The key is the (product, material) pair; the backend joins in the
/// material columns so the editor can show them without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BomLineDto {
    pub material_id: MaterialId,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub qty_per_unit: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl BomLineDto {
    pub fn qty_display(&self) -> String {
        format_number(self.qty_per_unit)
    }
}

/// Body of `POST /api/products/{id}/materials`. Creates the line or replaces
/// the quantity of an existing one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UpsertBomLineRequest {
    pub material_id: MaterialId,
    pub qty_per_unit: f64,
}
