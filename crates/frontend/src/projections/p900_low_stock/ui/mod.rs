use crate::controller::use_controller;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn LowStockReport() -> impl IntoView {
    let ctx = use_controller();
    let rows = Memo::new(move |_| ctx.state.with(|s| s.reports.low_stock.clone()));

    view! {
        <section class="report" id="lowStockReport">
            <h3>"Low stock"</h3>
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=|| view! { <p class="small">"Nothing is running low."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"In Stock"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| view! {
                            <tr>
                                <td>{row.id.to_string()}</td>
                                <td>{row.sku.clone()}</td>
                                <td>{row.name.clone()}</td>
                                <td>{row.quantity_display()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
