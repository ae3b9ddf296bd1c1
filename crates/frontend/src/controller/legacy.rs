use super::{Controller, InventoryApi, UiPort};
use crate::state::{ItemFormFields, TransactionFormFields, TransactionKind};
use contracts::domain::a004_item::{CreateItemRequest, ItemId};
use contracts::domain::common::AggregateId;
use contracts::usecases::u501_record_sale::RecordSaleRequest;
use contracts::usecases::u502_restock::RestockRequest;
use log::{error, warn};

pub(super) const CREATE_ITEM_FAILED: &str = "Error creating item.";

impl<A: InventoryApi, U: UiPort> Controller<A, U> {
    pub async fn load_items(&self) {
        match self.api.list_items().await {
            Ok(items) => self.update(|s| s.items = items),
            Err(e) if e.is_decode() => {
                error!("Failed to load items: {}", e);
                self.update(|s| s.items.clear());
            }
            Err(e) => error!("Failed to load items: {}", e),
        }
    }

    pub async fn submit_item(&self) -> bool {
        let request = self.read(|s| {
            let f = &s.item_form;
            CreateItemRequest::from_form(
                &f.sku,
                &f.name,
                &f.category,
                &f.unit_price,
                &f.quantity_in_stock,
            )
        });
        if let Err(e) = self.api.create_item(&request).await {
            warn!("Failed to create item {}: {}", request.sku, e);
            self.ui.alert(CREATE_ITEM_FAILED);
            return false;
        }
        self.update(|s| s.item_form = ItemFormFields::default());
        self.load_items().await;
        true
    }

    /// Record a sale or restock, then reload stock and reports.
    pub async fn submit_transaction(&self, kind: TransactionKind) {
        let (item_id, quantity) = self.read(|s| {
            (
                s.transaction_form.item_id.clone(),
                s.transaction_form.quantity.clone(),
            )
        });
        let Ok(item_id) = ItemId::from_string(&item_id) else {
            self.ui.alert(kind.failure_message());
            return;
        };
        let result = match kind {
            TransactionKind::Sale => {
                self.api
                    .record_sale(&RecordSaleRequest::new(item_id, &quantity))
                    .await
            }
            TransactionKind::Restock => {
                self.api
                    .record_restock(&RestockRequest::new(item_id, &quantity))
                    .await
            }
        };
        if let Err(e) = result {
            warn!("{:?} of item {} failed: {}", kind, item_id, e);
            self.ui.alert(kind.failure_message());
            return;
        }
        self.update(|s| s.transaction_form = TransactionFormFields::default());
        self.load_items().await;
        self.load_reports().await;
    }

    pub async fn load_reports(&self) {
        let (low_stock, summary) =
            futures::join!(self.api.low_stock_report(), self.api.sales_summary());
        match low_stock {
            Ok(rows) => self.update(|s| s.reports.low_stock = rows),
            Err(e) => error!("Failed to load low-stock report: {}", e),
        }
        match summary {
            Ok(summary) => self.update(|s| s.reports.sales_summary = Some(summary)),
            Err(e) => error!("Failed to load sales summary: {}", e),
        }
    }
}
