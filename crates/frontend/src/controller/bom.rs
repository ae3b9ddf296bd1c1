use super::{Controller, InventoryApi, UiPort};
use crate::state::BomEditorState;
use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_material::{MaterialDto, MaterialId};
use contracts::domain::a003_bom_line::{BomLineDto, UpsertBomLineRequest};
use contracts::domain::common::parse_number_or_zero;
use log::{debug, error, warn};

pub(super) const SAVE_LINE_FAILED: &str = "Failed to save material line.";
pub(super) const REMOVE_LINE_FAILED: &str = "Failed to remove line.";

impl<A: InventoryApi, U: UiPort> Controller<A, U> {
    /// Open the recipe editor below a product row, or close it if open.
    ///
    /// Opening fetches the BOM lines and the material catalog together. A
    /// click that closes the editor while those are in flight invalidates
    /// them: the responses carry the old generation and are dropped.
    pub async fn toggle_recipe(&self, product_id: ProductId) {
        if self.read(|s| s.is_bom_open(product_id)) {
            self.update(|s| {
                s.bom_editors.remove(&product_id);
            });
            return;
        }

        let generation = self.next_generation();
        self.update(|s| {
            s.bom_editors
                .insert(product_id, BomEditorState::loading(generation));
        });

        let (lines, materials) =
            futures::join!(self.fetch_bom_lines(product_id), self.fetch_catalog());

        if !self.is_current(product_id, generation) {
            debug!("Dropping stale recipe for product {}", product_id);
            return;
        }
        self.update(|s| {
            if let Some(editor) = s.bom_editors.get_mut(&product_id) {
                editor.open(materials, lines);
            }
        });
    }

    /// Add the selected material to the recipe, or change its quantity if
    /// the line exists.
    pub async fn upsert_bom_line(&self, product_id: ProductId) {
        let Some((generation, selected, qty_input)) = self.read(|s| {
            s.bom_editor(product_id)
                .filter(|e| e.is_ready())
                .map(|e| (e.generation, e.selected_material, e.qty_input.clone()))
        }) else {
            return;
        };
        let Some(material_id) = selected else {
            self.ui.alert(SAVE_LINE_FAILED);
            return;
        };

        let request = UpsertBomLineRequest {
            material_id,
            qty_per_unit: parse_number_or_zero(&qty_input),
        };
        if let Err(e) = self.api.upsert_bom_line(product_id, &request).await {
            warn!("Failed to save line {}:{}: {}", product_id, material_id, e);
            self.ui.alert(SAVE_LINE_FAILED);
            return;
        }
        self.after_bom_change(product_id, generation).await;
    }

    pub async fn remove_bom_line(&self, product_id: ProductId, material_id: MaterialId) {
        let Some(generation) = self.read(|s| s.bom_editor(product_id).map(|e| e.generation)) else {
            return;
        };
        if let Err(e) = self.api.delete_bom_line(product_id, material_id).await {
            warn!("Failed to remove line {}:{}: {}", product_id, material_id, e);
            self.ui.alert(REMOVE_LINE_FAILED);
            return;
        }
        self.after_bom_change(product_id, generation).await;
    }

    /// Re-render the editor from a fresh BOM and patch the row's unit cost.
    async fn after_bom_change(&self, product_id: ProductId, generation: u64) {
        let lines = self.fetch_bom_lines(product_id).await;
        if self.is_current(product_id, generation) {
            self.update(|s| {
                if let Some(editor) = s.bom_editors.get_mut(&product_id) {
                    editor.show_lines(lines);
                }
            });
        }
        self.refresh_unit_cost(product_id).await;
    }

    fn is_current(&self, product_id: ProductId, generation: u64) -> bool {
        self.read(|s| {
            s.bom_editor(product_id)
                .is_some_and(|e| e.generation == generation)
        })
    }

    async fn fetch_bom_lines(&self, product_id: ProductId) -> Vec<BomLineDto> {
        self.api
            .list_bom_lines(product_id)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to load recipe of product {}: {}", product_id, e);
                Vec::new()
            })
    }

    async fn fetch_catalog(&self) -> Vec<MaterialDto> {
        self.api.list_materials().await.unwrap_or_else(|e| {
            error!("Failed to load material catalog: {}", e);
            Vec::new()
        })
    }
}
