use crate::controller::use_controller;
use contracts::domain::a004_item::{ItemDto, ItemId};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemRow {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price: String,
    pub quantity_in_stock: String,
    pub created_at: String,
}

impl From<&ItemDto> for ItemRow {
    fn from(i: &ItemDto) -> Self {
        Self {
            id: i.id,
            sku: i.sku.clone(),
            name: i.name.clone(),
            category: i.category.clone().unwrap_or_default(),
            unit_price: i.unit_price_display(),
            quantity_in_stock: i.quantity_display(),
            created_at: i.created_display(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ItemList() -> impl IntoView {
    let ctx = use_controller();
    let rows = Memo::new(move |_| {
        ctx.state
            .with(|s| s.items.iter().map(ItemRow::from).collect::<Vec<_>>())
    });

    view! {
        <table class="table" id="itemsTable">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"SKU"</th>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Unit Price"</th>
                    <th>"In Stock"</th>
                    <th>"Created"</th>
                </tr>
            </thead>
            <tbody id="itemsTbody">
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |row| view! {
                        <tr>
                            <td>{row.id.to_string()}</td>
                            <td>{row.sku}</td>
                            <td>{row.name}</td>
                            <td>{row.category}</td>
                            <td>{row.unit_price}</td>
                            <td>{row.quantity_in_stock}</td>
                            <td>{row.created_at}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}
