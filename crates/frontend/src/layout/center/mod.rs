//! Page sections. Both V1 pages stay mounted and are shown or hidden by the
//! active view; the legacy page replaces them when the backend has no
//! product API.

use crate::controller::use_controller;
use crate::domain::a001_product::ui::details::ProductCreateForm;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_material::ui::details::MaterialForm;
use crate::domain::a002_material::ui::list::MaterialList;
use crate::domain::a004_item::ui::details::ItemCreateForm;
use crate::domain::a004_item::ui::list::ItemList;
use crate::domain::a004_item::ui::transaction::TransactionForm;
use crate::projections::p900_low_stock::ui::LowStockReport;
use crate::projections::p901_sales_summary::ui::SalesSummaryReport;
use crate::routes::ActiveView;
use crate::shared::components::ui::Button;
use crate::state::{Action, ApiVersion};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Center() -> impl IntoView {
    let ctx = use_controller();
    let version = Memo::new(move |_| ctx.state.with(|s| s.api_version));

    view! {
        <main data-zone="center" class="center">
            <Show
                when=move || version.get() == ApiVersion::V1
                fallback=|| view! { <LegacyItemsPage /> }
            >
                <ProductsPage />
                <MaterialsPage />
            </Show>
        </main>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductsPage() -> impl IntoView {
    let ctx = use_controller();
    let display = move || ctx.state.with(|s| s.view.display_for(ActiveView::Products));

    view! {
        <section id="productsPage" class="page" style:display=display>
            <h2>"Add Product"</h2>
            <ProductCreateForm />
            <h2>"Products"</h2>
            <ProductList />
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn MaterialsPage() -> impl IntoView {
    let ctx = use_controller();
    let display = move || ctx.state.with(|s| s.view.display_for(ActiveView::Materials));

    view! {
        <section id="materialsPage" class="page" style:display=display>
            <h2>"Materials"</h2>
            <MaterialForm />
            <div class="row">
                <Button
                    id="refreshMaterialsBtn"
                    variant="secondary"
                    on_click=Callback::new(move |_| ctx.dispatch(Action::RefreshMaterials))
                >
                    "Refresh Materials"
                </Button>
            </div>
            <MaterialList />
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn LegacyItemsPage() -> impl IntoView {
    let ctx = use_controller();

    view! {
        <section id="itemsPage" class="page">
            <h2>"Add Item"</h2>
            <ItemCreateForm />
            <h2>"Items"</h2>
            <ItemList />
            <h2>"Record Transaction"</h2>
            <TransactionForm />
            <div class="row">
                <h2>"Reports"</h2>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| ctx.dispatch(Action::LoadReports))
                >
                    "Reload Reports"
                </Button>
            </div>
            <LowStockReport />
            <SalesSummaryReport />
        </section>
    }
}
