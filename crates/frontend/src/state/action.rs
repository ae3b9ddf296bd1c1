use super::forms::{ItemField, MaterialField, ProductField, TransactionField, TransactionKind};
use crate::routes::ActiveView;
use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_material::MaterialId;

/// Every user interaction the controller handles.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleTheme,
    Navigate(ActiveView),
    /// The address bar changed under us (Back/Forward).
    RouteChanged,
    /// Reload the list behind the active view.
    Refresh,
    RefreshMaterials,

    ProductFieldChanged { field: ProductField, value: String },
    SubmitProduct,
    /// `is_listed` is the value shown on the clicked button.
    ToggleListed { product_id: ProductId, is_listed: bool },
    ToggleRecipe { product_id: ProductId },

    BomMaterialSelected { product_id: ProductId, material_id: MaterialId },
    BomQtyChanged { product_id: ProductId, value: String },
    BomUpsert { product_id: ProductId },
    BomRemove { product_id: ProductId, material_id: MaterialId },

    MaterialFieldChanged { field: MaterialField, value: String },
    EditMaterial { material_id: MaterialId },
    CancelMaterialEdit,
    SubmitMaterial,

    ItemFieldChanged { field: ItemField, value: String },
    SubmitItem,
    TransactionFieldChanged { field: TransactionField, value: String },
    SubmitTransaction(TransactionKind),
    LoadReports,
}
