use crate::controller::use_controller;
use crate::domain::a003_bom_line::ui::editor::BomEditorRow;
use crate::shared::components::ui::Button;
use crate::state::Action;
use contracts::domain::a001_product::{ProductDto, ProductId};
use leptos::prelude::*;

/// Cells of one product row, in column order.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub price: String,
    pub unit_cost: String,
    pub is_listed: bool,
    pub listed_label: &'static str,
}

impl From<&ProductDto> for ProductRow {
    fn from(p: &ProductDto) -> Self {
        Self {
            id: p.id,
            sku: p.sku.clone(),
            name: p.name.clone(),
            price: p.price_display(),
            unit_cost: p.unit_cost_display(),
            is_listed: p.is_listed,
            listed_label: p.listed_label(),
        }
    }
}

#[cfg(test)]
impl ProductRow {
    /// Text of the data cells, the listed button label included.
    pub fn cells(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.sku.clone(),
            self.name.clone(),
            self.price.clone(),
            self.unit_cost.clone(),
            self.listed_label.to_string(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = use_controller();
    let ids = Memo::new(move |_| {
        ctx.state
            .with(|s| s.products.iter().map(|p| p.id).collect::<Vec<_>>())
    });

    view! {
        <table class="table" id="productsTable">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"SKU"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Unit Cost"</th>
                    <th>"Is Listed"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="productsTbody">
                <For
                    each=move || ids.get()
                    key=|id| *id
                    children=move |id| view! { <ProductRowView product_id=id /> }
                />
            </tbody>
        </table>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductRowView(product_id: ProductId) -> impl IntoView {
    let ctx = use_controller();
    let row = Memo::new(move |_| {
        ctx.state
            .with(|s| s.product(product_id).map(ProductRow::from))
    });
    let is_open = Memo::new(move |_| ctx.state.with(|s| s.is_bom_open(product_id)));
    let cell = move |f: fn(&ProductRow) -> String| {
        move || row.with(|r| r.as_ref().map(f).unwrap_or_default())
    };

    let toggle_listed = Callback::new(move |_| {
        if let Some(r) = row.get_untracked() {
            ctx.dispatch(Action::ToggleListed {
                product_id,
                is_listed: r.is_listed,
            });
        }
    });

    view! {
        <tr>
            <td>{cell(|r| r.id.to_string())}</td>
            <td>{cell(|r| r.sku.clone())}</td>
            <td>{cell(|r| r.name.clone())}</td>
            <td>{cell(|r| r.price.clone())}</td>
            <td class="unit-cost">{cell(|r| r.unit_cost.clone())}</td>
            <td>
                <Button variant="secondary" title="Click to toggle" on_click=toggle_listed>
                    {cell(|r| r.listed_label.to_string())}
                </Button>
            </td>
            <td>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| ctx.dispatch(Action::ToggleRecipe { product_id }))
                >
                    "Recipe"
                </Button>
            </td>
        </tr>
        <Show when=move || is_open.get()>
            <BomEditorRow product_id=product_id />
        </Show>
    }
}
