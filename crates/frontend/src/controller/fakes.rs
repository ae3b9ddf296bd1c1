//! In-memory ports for controller tests.

use super::ports::{InventoryApi, UiPort};
use crate::routes::ActiveView;
use crate::shared::error::ApiError;
use crate::shared::theme::Theme;
use crate::state::AppState;
use async_trait::async_trait;
use contracts::domain::a001_product::{CreateProductRequest, ProductDto, ProductId};
use contracts::domain::a002_material::{MaterialDto, MaterialId, MaterialPayload};
use contracts::domain::a003_bom_line::{BomLineDto, UpsertBomLineRequest};
use contracts::domain::a004_item::{CreateItemRequest, ItemDto, ItemId};
use contracts::projections::p900_low_stock::LowStockRowDto;
use contracts::projections::p901_sales_summary::SalesSummaryDto;
use contracts::usecases::u501_record_sale::RecordSaleRequest;
use contracts::usecases::u502_restock::RestockRequest;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

pub fn product(id: i64, sku: &str, price: f64, is_listed: bool) -> ProductDto {
    ProductDto {
        id: ProductId(id),
        sku: sku.to_string(),
        name: format!("Product {}", sku),
        price: Some(price),
        unit_cost: None,
        is_listed,
    }
}

pub fn material(id: i64, category: &str, name: &str, cost: f64) -> MaterialDto {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "category": category,
        "name": name,
        "color": "Black",
        "quantity_on_hand": 100,
        "unit": if category == "FILAMENT" { "g" } else { "pcs" },
        "cost_per_unit": cost,
    }))
    .unwrap()
}

#[derive(Default)]
struct ApiInner {
    products: Vec<ProductDto>,
    materials: Vec<MaterialDto>,
    bom: BTreeMap<(ProductId, MaterialId), f64>,
    items: Vec<ItemDto>,
    /// Operation name → error returned instead of the normal result.
    failures: HashMap<&'static str, ApiError>,
    calls: Vec<String>,
    bom_gate: Option<oneshot::Receiver<()>>,
    created_products: Vec<CreateProductRequest>,
    created_materials: Vec<MaterialPayload>,
    updated_materials: Vec<(MaterialId, MaterialPayload)>,
    sales: Vec<RecordSaleRequest>,
    restocks: Vec<RestockRequest>,
}

/// Backend double. Keeps products, materials and recipes in memory and
/// recomputes unit costs the way the real backend does.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Rc<RefCell<ApiInner>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<ProductDto>) -> Self {
        self.inner.borrow_mut().products = products;
        self
    }

    pub fn with_materials(self, materials: Vec<MaterialDto>) -> Self {
        self.inner.borrow_mut().materials = materials;
        self
    }

    pub fn with_line(self, product_id: i64, material_id: i64, qty: f64) -> Self {
        self.inner
            .borrow_mut()
            .bom
            .insert((ProductId(product_id), MaterialId(material_id)), qty);
        self.recompute_costs();
        self
    }

    pub fn with_items(self, items: Vec<ItemDto>) -> Self {
        self.inner.borrow_mut().items = items;
        self
    }

    pub fn fail(&self, operation: &'static str, error: ApiError) {
        self.inner.borrow_mut().failures.insert(operation, error);
    }

    /// The next `list_bom_lines` waits until the returned sender fires.
    pub fn hold_bom_lines(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().bom_gate = Some(rx);
        tx
    }

    pub fn count(&self, operation: &str) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|c| c.as_str() == operation)
            .count()
    }

    pub fn created_products(&self) -> Vec<CreateProductRequest> {
        self.inner.borrow().created_products.clone()
    }

    pub fn created_materials(&self) -> Vec<MaterialPayload> {
        self.inner.borrow().created_materials.clone()
    }

    pub fn updated_materials(&self) -> Vec<(MaterialId, MaterialPayload)> {
        self.inner.borrow().updated_materials.clone()
    }

    pub fn sales(&self) -> Vec<RecordSaleRequest> {
        self.inner.borrow().sales.clone()
    }

    pub fn restocks(&self) -> Vec<RestockRequest> {
        self.inner.borrow().restocks.clone()
    }

    pub fn product(&self, id: i64) -> Option<ProductDto> {
        self.inner
            .borrow()
            .products
            .iter()
            .find(|p| p.id == ProductId(id))
            .cloned()
    }

    fn enter(&self, operation: &'static str) -> Result<(), ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(operation.to_string());
        match inner.failures.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn recompute_costs(&self) {
        let mut inner = self.inner.borrow_mut();
        let costs: HashMap<MaterialId, f64> = inner
            .materials
            .iter()
            .map(|m| (m.id, m.cost_per_unit.unwrap_or(0.0)))
            .collect();
        let mut totals: HashMap<ProductId, f64> = HashMap::new();
        for ((pid, mid), qty) in &inner.bom {
            *totals.entry(*pid).or_default() += qty * costs.get(mid).copied().unwrap_or(0.0);
        }
        for p in inner.products.iter_mut() {
            p.unit_cost = totals.get(&p.id).copied();
        }
    }
}

#[async_trait(?Send)]
impl InventoryApi for FakeApi {
    async fn list_products(&self) -> Result<Vec<ProductDto>, ApiError> {
        self.enter("list_products")?;
        Ok(self.inner.borrow().products.clone())
    }

    async fn create_product(&self, request: &CreateProductRequest) -> Result<(), ApiError> {
        self.enter("create_product")?;
        let mut inner = self.inner.borrow_mut();
        let skus: HashSet<&str> = inner.products.iter().map(|p| p.sku.as_str()).collect();
        if skus.contains(request.sku.as_str()) || request.price.is_none() {
            return Err(ApiError::Status { status: 400 });
        }
        let id = inner.products.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        inner.products.push(ProductDto {
            id: ProductId(id),
            sku: request.sku.clone(),
            name: request.name.clone(),
            price: request.price,
            unit_cost: None,
            is_listed: false,
        });
        inner.created_products.push(request.clone());
        Ok(())
    }

    async fn set_product_listed(&self, id: ProductId, is_listed: bool) -> Result<(), ApiError> {
        self.enter("set_product_listed")?;
        let mut inner = self.inner.borrow_mut();
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ApiError::Status { status: 404 })?;
        product.is_listed = is_listed;
        Ok(())
    }

    async fn list_materials(&self) -> Result<Vec<MaterialDto>, ApiError> {
        self.enter("list_materials")?;
        Ok(self.inner.borrow().materials.clone())
    }

    async fn create_material(&self, payload: &MaterialPayload) -> Result<(), ApiError> {
        self.enter("create_material")?;
        self.inner.borrow_mut().created_materials.push(payload.clone());
        Ok(())
    }

    async fn update_material(&self, id: MaterialId, payload: &MaterialPayload) -> Result<(), ApiError> {
        self.enter("update_material")?;
        self.inner
            .borrow_mut()
            .updated_materials
            .push((id, payload.clone()));
        Ok(())
    }

    async fn list_bom_lines(&self, product_id: ProductId) -> Result<Vec<BomLineDto>, ApiError> {
        self.enter("list_bom_lines")?;
        let gate = self.inner.borrow_mut().bom_gate.take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let inner = self.inner.borrow();
        let lines = inner
            .bom
            .iter()
            .filter(|((pid, _), _)| *pid == product_id)
            .filter_map(|((_, mid), qty)| {
                let m = inner.materials.iter().find(|m| m.id == *mid)?;
                Some(BomLineDto {
                    material_id: *mid,
                    qty_per_unit: *qty,
                    category: m.category.to_string(),
                    name: m.name.clone(),
                    color: m.color.clone(),
                    unit: m.unit.clone(),
                })
            })
            .collect();
        Ok(lines)
    }

    async fn upsert_bom_line(
        &self,
        product_id: ProductId,
        request: &UpsertBomLineRequest,
    ) -> Result<(), ApiError> {
        self.enter("upsert_bom_line")?;
        self.inner
            .borrow_mut()
            .bom
            .insert((product_id, request.material_id), request.qty_per_unit);
        self.recompute_costs();
        Ok(())
    }

    async fn delete_bom_line(&self, product_id: ProductId, material_id: MaterialId) -> Result<(), ApiError> {
        self.enter("delete_bom_line")?;
        self.inner.borrow_mut().bom.remove(&(product_id, material_id));
        self.recompute_costs();
        Ok(())
    }

    async fn list_items(&self) -> Result<Vec<ItemDto>, ApiError> {
        self.enter("list_items")?;
        Ok(self.inner.borrow().items.clone())
    }

    async fn create_item(&self, request: &CreateItemRequest) -> Result<(), ApiError> {
        self.enter("create_item")?;
        let mut inner = self.inner.borrow_mut();
        let id = inner.items.iter().map(|i| i.id.0).max().unwrap_or(0) + 1;
        inner.items.push(ItemDto {
            id: ItemId(id),
            sku: request.sku.clone(),
            name: request.name.clone(),
            category: request.category.clone(),
            unit_price: request.unit_price,
            quantity_in_stock: Some(request.quantity_in_stock),
            created_at: None,
        });
        Ok(())
    }

    async fn record_sale(&self, request: &RecordSaleRequest) -> Result<(), ApiError> {
        self.enter("record_sale")?;
        let mut inner = self.inner.borrow_mut();
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == request.item_id)
            .ok_or(ApiError::Status { status: 404 })?;
        let stock = item.quantity_in_stock.unwrap_or(0.0);
        if stock < request.quantity {
            return Err(ApiError::Status { status: 409 });
        }
        item.quantity_in_stock = Some(stock - request.quantity);
        inner.sales.push(*request);
        Ok(())
    }

    async fn record_restock(&self, request: &RestockRequest) -> Result<(), ApiError> {
        self.enter("record_restock")?;
        let mut inner = self.inner.borrow_mut();
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == request.item_id)
            .ok_or(ApiError::Status { status: 404 })?;
        item.quantity_in_stock = Some(item.quantity_in_stock.unwrap_or(0.0) + request.quantity);
        inner.restocks.push(*request);
        Ok(())
    }

    async fn low_stock_report(&self) -> Result<Vec<LowStockRowDto>, ApiError> {
        self.enter("low_stock_report")?;
        let rows = self
            .inner
            .borrow()
            .items
            .iter()
            .filter(|i| i.quantity_in_stock.unwrap_or(0.0) < 5.0)
            .map(|i| LowStockRowDto {
                id: i.id,
                sku: i.sku.clone(),
                name: i.name.clone(),
                quantity_in_stock: i.quantity_in_stock,
            })
            .collect();
        Ok(rows)
    }

    async fn sales_summary(&self) -> Result<SalesSummaryDto, ApiError> {
        self.enter("sales_summary")?;
        let inner = self.inner.borrow();
        let units: f64 = inner.sales.iter().map(|s| s.quantity).sum();
        Ok(SalesSummaryDto {
            total_transactions: Some(inner.sales.len() as f64),
            total_units_sold: Some(units),
            total_revenue: None,
        })
    }
}

#[derive(Default)]
struct UiInner {
    last_render: Option<AppState>,
    alerts: Vec<String>,
    preferences: HashMap<String, String>,
    theme_attribute: Option<&'static str>,
    search: String,
    pushed: Vec<ActiveView>,
}

/// Browser double: records renders and alerts, keeps preferences in a map.
#[derive(Clone, Default)]
pub struct FakeUi {
    inner: Rc<RefCell<UiInner>>,
}

impl FakeUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: &str) -> Self {
        self.inner.borrow_mut().search = search.to_string();
        self
    }

    pub fn with_preference(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .preferences
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    pub fn preference(&self, key: &str) -> Option<String> {
        self.inner.borrow().preferences.get(key).cloned()
    }

    pub fn theme_attribute(&self) -> Option<&'static str> {
        self.inner.borrow().theme_attribute
    }

    pub fn last_render(&self) -> Option<AppState> {
        self.inner.borrow().last_render.clone()
    }

    pub fn pushed(&self) -> Vec<ActiveView> {
        self.inner.borrow().pushed.clone()
    }

    /// Move the address bar the way Back/Forward does: no push is recorded.
    pub fn go_to_search(&self, search: &str) {
        self.inner.borrow_mut().search = search.to_string();
    }
}

impl UiPort for FakeUi {
    fn render(&self, state: &AppState) {
        self.inner.borrow_mut().last_render = Some(state.clone());
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        self.preference(key)
    }

    fn store_preference(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .preferences
            .insert(key.to_string(), value.to_string());
    }

    fn remove_preference(&self, key: &str) {
        self.inner.borrow_mut().preferences.remove(key);
    }

    fn apply_theme(&self, theme: Theme) {
        self.inner.borrow_mut().theme_attribute = theme.data_attribute();
    }

    fn current_search(&self) -> String {
        self.inner.borrow().search.clone()
    }

    fn push_view(&self, view: ActiveView) {
        let mut inner = self.inner.borrow_mut();
        inner.search = view.to_search();
        inner.pushed.push(view);
    }
}
