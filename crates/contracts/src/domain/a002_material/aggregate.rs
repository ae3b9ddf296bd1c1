use crate::domain::common::lenient::{null_as_default, number_option};
use crate::domain::common::{format_number, non_blank, parse_number_or_zero};
use crate::enums::MaterialCategory;
use serde::{Deserialize, Serialize};

crate::integer_id!(
    /// Material identifier (aggregate a002)
    MaterialId
);

/// Color stored when the form leaves it blank.
pub const DEFAULT_COLOR: &str = "N/A";

/// Raw material as returned by `GET /api/materials`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialDto {
    pub id: MaterialId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: MaterialCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "number_option")]
    pub quantity_on_hand: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "number_option")]
    pub cost_per_unit: Option<f64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, rename = "type")]
    pub material_type: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
}

impl MaterialDto {
    /// Option label in the BOM editor selector: `CATEGORY — name (color)`.
    pub fn selector_label(&self) -> String {
        format!(
            "{} — {} ({})",
            self.category,
            self.name,
            self.color.as_deref().unwrap_or_default()
        )
    }

    pub fn quantity_display(&self) -> String {
        format_number(self.quantity_on_hand.unwrap_or(0.0))
    }

    pub fn cost_display(&self) -> String {
        self.cost_per_unit
            .map(format_number)
            .unwrap_or_else(|| "0".to_string())
    }
}

/// Body of `POST /api/materials` and `PATCH /api/materials/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialPayload {
    pub category: MaterialCategory,
    pub name: String,
    pub color: String,
    pub quantity_on_hand: f64,
    pub unit: String,
    pub cost_per_unit: f64,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub finish: Option<String>,
}

/// Raw text of the material form, one field per input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFormFields {
    pub category: String,
    pub name: String,
    pub color: String,
    pub quantity_on_hand: String,
    pub unit: String,
    pub cost_per_unit: String,
    pub brand: String,
    pub material_type: String,
    pub finish: String,
}

impl MaterialFormFields {
    /// Form defaults for create mode.
    pub fn blank() -> Self {
        Self {
            category: MaterialCategory::Other.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill the form from an existing material (edit mode).
    pub fn from_material(m: &MaterialDto) -> Self {
        Self {
            category: m.category.as_str().to_string(),
            name: m.name.clone(),
            color: m
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            quantity_on_hand: format_number(m.quantity_on_hand.unwrap_or(0.0)),
            unit: m.unit.clone().unwrap_or_default(),
            cost_per_unit: format_number(m.cost_per_unit.unwrap_or(0.0)),
            brand: m.brand.clone().unwrap_or_default(),
            material_type: m.material_type.clone().unwrap_or_default(),
            finish: m.finish.clone().unwrap_or_default(),
        }
    }

    /// Apply the defaulting rules and produce the request body.
    pub fn to_payload(&self) -> MaterialPayload {
        let category = MaterialCategory::from_input(&self.category);
        let unit = non_blank(&self.unit).unwrap_or_else(|| category.default_unit().to_string());
        MaterialPayload {
            name: self.name.trim().to_string(),
            color: non_blank(&self.color).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            quantity_on_hand: parse_number_or_zero(&self.quantity_on_hand),
            unit,
            cost_per_unit: parse_number_or_zero(&self.cost_per_unit),
            brand: non_blank(&self.brand),
            material_type: non_blank(&self.material_type),
            finish: non_blank(&self.finish),
            category,
        }
    }
}
