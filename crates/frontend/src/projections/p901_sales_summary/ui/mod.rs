use crate::controller::use_controller;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn SalesSummaryReport() -> impl IntoView {
    let ctx = use_controller();
    let rows = Memo::new(move |_| {
        ctx.state
            .with(|s| s.reports.sales_summary.as_ref().map(|summary| summary.rows()))
    });

    view! {
        <section class="report" id="salesSummaryReport">
            <h3>"Sales summary"</h3>
            {move || match rows.get() {
                None => view! { <p class="small">"No data."</p> }.into_any(),
                Some(rows) => view! {
                    <dl class="summary">
                        {rows.into_iter().map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }).collect_view()}
                    </dl>
                }.into_any(),
            }}
        </section>
    }
}
