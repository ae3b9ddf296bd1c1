use super::{Controller, InventoryApi, UiPort};
use crate::shared::error::ApiError;
use crate::state::ProductFormFields;
use contracts::domain::a001_product::{CreateProductRequest, ProductDto, ProductId};
use log::{error, warn};

pub(super) const LISTED_FAILED: &str = "Failed to update listed status.";
pub(super) const CREATE_PRODUCT_FAILED: &str = "Error creating product (check SKU uniqueness and price).";

impl<A: InventoryApi, U: UiPort> Controller<A, U> {
    pub async fn load_products(&self) {
        let result = self.api.list_products().await;
        self.apply_products(result);
    }

    /// Replace the product table with a fetch result. The table is rebuilt
    /// from scratch, so open recipe editors close with it. Failed reads keep
    /// the previous rows; an undecodable body renders an empty table.
    pub(super) fn apply_products(&self, result: Result<Vec<ProductDto>, ApiError>) {
        match result {
            Ok(products) => self.update(|s| {
                s.products = products;
                s.bom_editors.clear();
            }),
            Err(e) if e.is_decode() => {
                error!("Failed to load products: {}", e);
                self.update(|s| {
                    s.products.clear();
                    s.bom_editors.clear();
                });
            }
            Err(e) => error!("Failed to load products: {}", e),
        }
    }

    /// Flip `is_listed` on the backend, then reload the whole list.
    pub async fn toggle_listed(&self, product_id: ProductId, is_listed: bool) {
        if let Err(e) = self.api.set_product_listed(product_id, !is_listed).await {
            warn!("Failed to set listed flag of product {}: {}", product_id, e);
            self.ui.alert(LISTED_FAILED);
            return;
        }
        self.load_products().await;
    }

    /// Submit the create form. Returns whether the product was created.
    pub async fn create_product(&self) -> bool {
        let request = self.read(|s| {
            let f = &s.product_form;
            CreateProductRequest::from_form(&f.sku, &f.name, &f.price)
        });
        if let Err(e) = self.api.create_product(&request).await {
            warn!("Failed to create product {}: {}", request.sku, e);
            self.ui.alert(CREATE_PRODUCT_FAILED);
            return false;
        }
        self.update(|s| s.product_form = ProductFormFields::default());
        self.load_products().await;
        true
    }

    /// Re-read the product list and patch only the unit cost of one row.
    pub(super) async fn refresh_unit_cost(&self, product_id: ProductId) {
        let products = match self.api.list_products().await {
            Ok(products) => products,
            Err(e) => {
                warn!("Unit cost refresh for product {} failed: {}", product_id, e);
                return;
            }
        };
        let Some(fresh) = products.into_iter().find(|p| p.id == product_id) else {
            return;
        };
        self.update(|s| {
            if let Some(row) = s.products.iter_mut().find(|p| p.id == product_id) {
                row.unit_cost = fresh.unit_cost;
            }
        });
    }
}
