use crate::domain::common::lenient::{null_as_default, number_option};
use crate::domain::common::{format_number, non_blank, parse_number, parse_number_or_zero};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::integer_id!(
    /// Stock item identifier (legacy aggregate a004)
    ItemId
);

/// Stock item of the legacy API (`GET /api/items`).
///
/// Predates the product/material split: an item is sold directly from stock
/// and has no recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDto {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "number_option")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "number_option")]
    pub quantity_in_stock: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ItemDto {
    pub fn unit_price_display(&self) -> String {
        self.unit_price.map(format_number).unwrap_or_default()
    }

    pub fn quantity_display(&self) -> String {
        format_number(self.quantity_in_stock.unwrap_or(0.0))
    }

    /// `created_at` as `YYYY-MM-DD HH:MM`; unparseable values are shown as sent.
    pub fn created_display(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
        raw.to_string()
    }
}

/// Body of `POST /api/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateItemRequest {
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity_in_stock: f64,
}

impl CreateItemRequest {
    pub fn from_form(
        sku: &str,
        name: &str,
        category: &str,
        unit_price: &str,
        quantity_in_stock: &str,
    ) -> Self {
        Self {
            sku: sku.trim().to_string(),
            name: name.trim().to_string(),
            category: non_blank(category),
            unit_price: parse_number(unit_price),
            quantity_in_stock: parse_number_or_zero(quantity_in_stock),
        }
    }
}
