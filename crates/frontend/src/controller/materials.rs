use super::{Controller, InventoryApi, UiPort};
use crate::state::MaterialFormState;
use contracts::domain::a002_material::{MaterialFormFields, MaterialId};
use log::{error, warn};

pub(super) const EDIT_LOAD_FAILED: &str = "Failed to load materials for editing.";
pub(super) const MATERIAL_NOT_FOUND: &str = "Material not found.";
pub(super) const SAVE_MATERIAL_FAILED: &str = "Error creating material. Check required fields.";

impl<A: InventoryApi, U: UiPort> Controller<A, U> {
    pub async fn load_materials(&self) {
        match self.api.list_materials().await {
            Ok(materials) => self.update(|s| s.materials = materials),
            Err(e) if e.is_decode() => {
                error!("Failed to load materials: {}", e);
                self.update(|s| s.materials.clear());
            }
            Err(e) => error!("Failed to load materials: {}", e),
        }
    }

    /// Switch the form to edit mode for `material_id`, pre-filled from a
    /// fresh read of the catalog rather than the rendered row.
    pub async fn begin_edit_material(&self, material_id: MaterialId) {
        let materials = match self.api.list_materials().await {
            Ok(materials) => materials,
            Err(e) => {
                warn!("Failed to load materials for editing: {}", e);
                self.ui.alert(EDIT_LOAD_FAILED);
                return;
            }
        };
        let Some(material) = materials.iter().find(|m| m.id == material_id) else {
            self.ui.alert(MATERIAL_NOT_FOUND);
            return;
        };
        let fields = MaterialFormFields::from_material(material);
        self.update(|s| {
            s.material_form = MaterialFormState {
                fields,
                editing: Some(material_id),
            }
        });
    }

    pub fn cancel_material_edit(&self) {
        self.update(|s| s.material_form = MaterialFormState::default());
    }

    /// Create (POST) or update (PATCH) depending on the form mode. Returns
    /// whether the backend accepted it.
    pub async fn submit_material(&self) -> bool {
        let (editing, payload) = self.read(|s| {
            (
                s.material_form.editing,
                s.material_form.fields.to_payload(),
            )
        });
        let result = match editing {
            Some(id) => self.api.update_material(id, &payload).await,
            None => self.api.create_material(&payload).await,
        };
        if let Err(e) = result {
            warn!("Failed to save material {:?}: {}", payload.name, e);
            self.ui.alert(SAVE_MATERIAL_FAILED);
            return false;
        }
        self.update(|s| s.material_form = MaterialFormState::default());
        self.load_materials().await;
        true
    }
}
