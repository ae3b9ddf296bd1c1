//! View controller: owns `AppState`, turns `Action`s into backend calls and
//! publishes every new state through `UiPort::render`.
//!
//! Handlers live next to their domain:
//! - products.rs: product list, listed flag, create form
//! - bom.rs: recipe editor below a product row
//! - materials.rs: material list and create/edit form
//! - legacy.rs: item API fallback
//!
//! The controller is single-threaded. Handlers await only on `InventoryApi`
//! calls and never hold a state borrow across an await.

mod bom;
mod browser_ui;
mod context;
mod http_api;
mod legacy;
mod materials;
mod ports;
mod products;

#[cfg(test)]
mod fakes;

pub use browser_ui::BrowserUi;
pub use context::{provide_controller, use_controller, AppController, ControllerContext};
pub use http_api::HttpInventoryApi;
pub use ports::{InventoryApi, UiPort};

use crate::routes::ActiveView;
use crate::shared::theme::{Theme, THEME_STORAGE_KEY};
use crate::state::{Action, ApiVersion, AppState};
use log::info;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct Controller<A, U> {
    api: Rc<A>,
    ui: Rc<U>,
    state: Rc<RefCell<AppState>>,
    generation: Rc<Cell<u64>>,
}

impl<A, U> Clone for Controller<A, U> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            ui: Rc::clone(&self.ui),
            state: Rc::clone(&self.state),
            generation: Rc::clone(&self.generation),
        }
    }
}

impl<A: InventoryApi, U: UiPort> Controller<A, U> {
    pub fn new(api: A, ui: U) -> Self {
        Self {
            api: Rc::new(api),
            ui: Rc::new(ui),
            state: Rc::new(RefCell::new(AppState::default())),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Mutate the state and render the result.
    fn update(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.state.borrow_mut());
        let snapshot = self.snapshot();
        self.ui.render(&snapshot);
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    /// Page load: theme, view from the URL, backend detection, first fetch.
    pub async fn start(&self) {
        self.init_theme();
        let view = ActiveView::from_search(&self.ui.current_search());
        self.update(|s| s.view = view);
        self.detect_api_version().await;
    }

    /// Try `GET /api/products`. A 404 means the backend only speaks the
    /// legacy item API; any other outcome keeps the current one.
    async fn detect_api_version(&self) {
        match self.api.list_products().await {
            Err(e) if e.is_not_found() => {
                info!("Product API not found, falling back to legacy item API");
                self.update(|s| s.api_version = ApiVersion::Legacy);
                self.load_items().await;
                self.load_reports().await;
            }
            result => {
                self.update(|s| s.api_version = ApiVersion::V1);
                self.apply_products(result);
                if self.read(|s| s.view) == ActiveView::Materials {
                    self.load_materials().await;
                }
            }
        }
    }

    /// Apply an action that needs no backend call. Returns the action back
    /// when it still has to go through `handle`.
    pub fn apply_local(&self, action: Action) -> Option<Action> {
        match action {
            Action::ToggleTheme => self.toggle_theme(),
            Action::ProductFieldChanged { field, value } => {
                self.update(|s| s.product_form.set(field, value))
            }
            Action::MaterialFieldChanged { field, value } => {
                self.update(|s| s.material_form.set(field, value))
            }
            Action::CancelMaterialEdit => self.cancel_material_edit(),
            Action::BomMaterialSelected {
                product_id,
                material_id,
            } => self.update(|s| {
                if let Some(editor) = s.bom_editors.get_mut(&product_id) {
                    editor.selected_material = Some(material_id);
                }
            }),
            Action::BomQtyChanged { product_id, value } => self.update(|s| {
                if let Some(editor) = s.bom_editors.get_mut(&product_id) {
                    editor.qty_input = value;
                }
            }),
            Action::ItemFieldChanged { field, value } => {
                self.update(|s| s.item_form.set(field, value))
            }
            Action::TransactionFieldChanged { field, value } => {
                self.update(|s| s.transaction_form.set(field, value))
            }
            remote @ (Action::Navigate(_)
            | Action::RouteChanged
            | Action::Refresh
            | Action::RefreshMaterials
            | Action::SubmitProduct
            | Action::ToggleListed { .. }
            | Action::ToggleRecipe { .. }
            | Action::BomUpsert { .. }
            | Action::BomRemove { .. }
            | Action::EditMaterial { .. }
            | Action::SubmitMaterial
            | Action::SubmitItem
            | Action::SubmitTransaction(_)
            | Action::LoadReports) => return Some(remote),
        }
        None
    }

    pub async fn handle(&self, action: Action) {
        let Some(action) = self.apply_local(action) else {
            return;
        };
        match action {
            Action::Navigate(view) => self.navigate(view).await,
            Action::RouteChanged => self.sync_route().await,
            Action::Refresh => self.refresh_all().await,
            Action::RefreshMaterials => self.load_materials().await,
            Action::SubmitProduct => {
                self.create_product().await;
            }
            Action::ToggleListed {
                product_id,
                is_listed,
            } => self.toggle_listed(product_id, is_listed).await,
            Action::ToggleRecipe { product_id } => self.toggle_recipe(product_id).await,
            Action::BomUpsert { product_id } => self.upsert_bom_line(product_id).await,
            Action::BomRemove {
                product_id,
                material_id,
            } => self.remove_bom_line(product_id, material_id).await,
            Action::EditMaterial { material_id } => self.begin_edit_material(material_id).await,
            Action::SubmitMaterial => {
                self.submit_material().await;
            }
            Action::SubmitItem => {
                self.submit_item().await;
            }
            Action::SubmitTransaction(kind) => self.submit_transaction(kind).await,
            Action::LoadReports => self.load_reports().await,
            // Applied synchronously by apply_local.
            Action::ToggleTheme
            | Action::ProductFieldChanged { .. }
            | Action::MaterialFieldChanged { .. }
            | Action::CancelMaterialEdit
            | Action::BomMaterialSelected { .. }
            | Action::BomQtyChanged { .. }
            | Action::ItemFieldChanged { .. }
            | Action::TransactionFieldChanged { .. } => {}
        }
    }

    pub fn init_theme(&self) {
        let stored = self.ui.load_preference(THEME_STORAGE_KEY);
        let theme = Theme::from_preference(stored.as_deref());
        self.ui.apply_theme(theme);
        self.update(|s| s.theme = theme);
    }

    pub fn toggle_theme(&self) {
        let next = self.read(|s| s.theme).toggled();
        match next.preference_value() {
            Some(value) => self.ui.store_preference(THEME_STORAGE_KEY, value),
            None => self.ui.remove_preference(THEME_STORAGE_KEY),
        }
        self.ui.apply_theme(next);
        self.update(|s| s.theme = next);
    }

    pub async fn navigate(&self, view: ActiveView) {
        self.ui.push_view(view);
        self.update(|s| s.view = view);
        self.refresh_all().await;
    }

    /// Follow a history entry change: take the view from the URL again and
    /// reload it. History is left alone.
    pub async fn sync_route(&self) {
        let view = ActiveView::from_search(&self.ui.current_search());
        if self.read(|s| s.view) == view {
            return;
        }
        info!("Address bar moved to {} view", view.as_str());
        self.update(|s| s.view = view);
        self.refresh_all().await;
    }

    /// Reload whatever the active page shows.
    pub async fn refresh_all(&self) {
        let (version, view) = self.read(|s| (s.api_version, s.view));
        match (version, view) {
            (ApiVersion::Legacy, _) => self.load_items().await,
            (ApiVersion::V1, ActiveView::Products) => self.load_products().await,
            (ApiVersion::V1, ActiveView::Materials) => self.load_materials().await,
        }
    }
}
