use crate::domain::common::{format_number, non_blank, parse_number};
use crate::domain::common::lenient::{null_as_default, number_option};
use serde::{Deserialize, Serialize};

crate::integer_id!(
    /// Product identifier (aggregate a001)
    ProductId
);

/// Product as returned by `GET /api/products`.
///
/// `unit_cost` is computed by the backend from the product's BOM lines and
/// may be absent for products without a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDto {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "number_option")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "number_option")]
    pub unit_cost: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_listed: bool,
}

impl ProductDto {
    /// Label of the listed toggle button.
    pub fn listed_label(&self) -> &'static str {
        if self.is_listed {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn price_display(&self) -> String {
        self.price.map(format_number).unwrap_or_default()
    }

    /// Unit cost cell text, `"0"` when the backend sent none.
    pub fn unit_cost_display(&self) -> String {
        self.unit_cost
            .map(format_number)
            .unwrap_or_else(|| "0".to_string())
    }
}

/// Body of `POST /api/products`.
///
/// `price` is `None` (serialized as `null`) when the form value was not a
/// number; the backend rejects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProductRequest {
    pub sku: String,
    pub name: String,
    pub price: Option<f64>,
    pub materials_used: Vec<MaterialUsage>,
}

/// Initial recipe entry sent along with a new product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialUsage {
    pub material_id: i64,
    pub qty_per_unit: f64,
}

impl CreateProductRequest {
    /// Build the request from raw form fields. Recipes are edited after
    /// creation, so `materials_used` is always empty.
    pub fn from_form(sku: &str, name: &str, price: &str) -> Self {
        Self {
            sku: sku.trim().to_string(),
            name: non_blank(name).unwrap_or_default(),
            price: parse_number(price),
            materials_used: Vec::new(),
        }
    }
}

/// Body of `PATCH /api/products/{id}/listed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetListedRequest {
    pub is_listed: bool,
}
