//! The single source of truth the UI renders from.

use super::forms::{
    ItemFormFields, MaterialFormState, ProductFormFields, TransactionFormFields,
};
use crate::routes::ActiveView;
use crate::shared::theme::Theme;
use contracts::domain::a001_product::{ProductDto, ProductId};
use contracts::domain::a002_material::{MaterialDto, MaterialId};
use contracts::domain::a003_bom_line::BomLineDto;
use contracts::domain::a004_item::ItemDto;
use contracts::projections::p900_low_stock::LowStockRowDto;
use contracts::projections::p901_sales_summary::SalesSummaryDto;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Backend flavour detected at start-up.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ApiVersion {
    /// Products, materials and recipes.
    #[default]
    V1,
    /// Items sold straight from stock, with transactions and reports.
    Legacy,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BomEditorPhase {
    /// Expansion requested, BOM lines and catalog still in flight.
    Loading,
    Ready,
}

/// Expanded recipe editor below one product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEditorState {
    /// Request generation this editor was opened with. Responses carrying
    /// another generation are stale and dropped.
    pub generation: u64,
    pub phase: BomEditorPhase,
    /// Catalog fetched when the editor opened.
    pub materials: Vec<MaterialDto>,
    pub lines: Vec<BomLineDto>,
    pub selected_material: Option<MaterialId>,
    pub qty_input: String,
}

impl BomEditorState {
    pub fn loading(generation: u64) -> Self {
        Self {
            generation,
            phase: BomEditorPhase::Loading,
            materials: Vec::new(),
            lines: Vec::new(),
            selected_material: None,
            qty_input: String::new(),
        }
    }

    pub fn open(&mut self, materials: Vec<MaterialDto>, lines: Vec<BomLineDto>) {
        self.materials = materials;
        self.phase = BomEditorPhase::Ready;
        self.show_lines(lines);
    }

    /// Replace the lines and reset the add form, as a fresh render would.
    pub fn show_lines(&mut self, lines: Vec<BomLineDto>) {
        self.lines = lines;
        self.selected_material = self.materials.first().map(|m| m.id);
        self.qty_input.clear();
    }

    pub fn is_ready(&self) -> bool {
        self.phase == BomEditorPhase::Ready
    }
}

/// Data for the legacy reports panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyReports {
    pub low_stock: Vec<LowStockRowDto>,
    pub sales_summary: Option<SalesSummaryDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub api_version: ApiVersion,
    pub view: ActiveView,
    pub theme: Theme,

    pub products: Vec<ProductDto>,
    pub product_form: ProductFormFields,
    pub bom_editors: BTreeMap<ProductId, BomEditorState>,

    pub materials: Vec<MaterialDto>,
    pub material_form: MaterialFormState,

    pub items: Vec<ItemDto>,
    pub item_form: ItemFormFields,
    pub transaction_form: TransactionFormFields,
    pub reports: LegacyReports,
}

impl AppState {
    pub fn product(&self, id: ProductId) -> Option<&ProductDto> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn bom_editor(&self, id: ProductId) -> Option<&BomEditorState> {
        self.bom_editors.get(&id)
    }

    pub fn is_bom_open(&self, id: ProductId) -> bool {
        self.bom_editors.contains_key(&id)
    }
}
