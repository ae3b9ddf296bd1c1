pub mod view_model;

use self::view_model::{render_bom_view, BomView, EDITOR_COLSPAN, LINES_COLSPAN};
use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input, Select};
use crate::state::Action;
use contracts::domain::a001_product::ProductId;
use contracts::domain::a002_material::MaterialId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Recipe editor row rendered below a product row while it is expanded.
#[component]
#[allow(non_snake_case)]
pub fn BomEditorRow(product_id: ProductId) -> impl IntoView {
    let ctx = use_controller();

    let view_model = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.bom_editor(product_id)
                .filter(|e| e.is_ready())
                .map(|e| render_bom_view(product_id, &e.materials, &e.lines))
        })
    });
    let selected = Signal::derive(move || {
        ctx.state.with(|s| {
            s.bom_editor(product_id)
                .and_then(|e| e.selected_material)
                .map(|id| id.to_string())
                .unwrap_or_default()
        })
    });
    let qty = Signal::derive(move || {
        ctx.state.with(|s| {
            s.bom_editor(product_id)
                .map(|e| e.qty_input.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <tr class="bom-row">
            <td colspan=EDITOR_COLSPAN>
                {move || match view_model.get() {
                    None => view! { <div class="small">"Loading…"</div> }.into_any(),
                    Some(bom) => view! { <BomEditor bom=bom selected=selected qty=qty /> }.into_any(),
                }}
            </td>
        </tr>
    }
}

#[component]
#[allow(non_snake_case)]
fn BomEditor(bom: BomView, selected: Signal<String>, qty: Signal<String>) -> impl IntoView {
    let ctx = use_controller();
    let product_id = bom.product_id;
    let placeholder = bom.placeholder();
    let options = bom.options;

    let on_select = Callback::new(move |value: String| {
        match MaterialId::from_string(&value) {
            Ok(material_id) => ctx.dispatch(Action::BomMaterialSelected {
                product_id,
                material_id,
            }),
            Err(e) => log::warn!("Ignoring material selection {:?}: {}", value, e),
        }
    });
    let on_qty = Callback::new(move |value: String| {
        ctx.dispatch(Action::BomQtyChanged { product_id, value })
    });

    view! {
        <div class="bom">
            <div class="row" style="align-items: end;">
                <Select
                    label="Add material"
                    name="material_id"
                    value=selected
                    options=Signal::stored(options)
                    on_change=on_select
                />
                <Input
                    label="Qty per unit"
                    name="qty_per_unit"
                    input_type="number"
                    step="0.01"
                    placeholder="e.g. 35"
                    class="bom__qty"
                    value=qty
                    on_input=on_qty
                />
                <Button on_click=Callback::new(move |_| ctx.dispatch(Action::BomUpsert { product_id }))>
                    "Add / Update"
                </Button>
            </div>

            <table class="table bom__lines">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Name"</th>
                        <th>"Color"</th>
                        <th>"Qty/Unit"</th>
                        <th>"Unit"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {placeholder.map(|text| view! {
                        <tr>
                            <td colspan=LINES_COLSPAN class="small">{text}</td>
                        </tr>
                    })}
                    {bom.rows.into_iter().map(|row| {
                        let material_id = row.material_id;
                        view! {
                            <tr>
                                <td>{row.category}</td>
                                <td>{row.name}</td>
                                <td>{row.color}</td>
                                <td>{row.qty}</td>
                                <td>{row.unit}</td>
                                <td>
                                    <Button
                                        variant="secondary"
                                        on_click=Callback::new(move |_| ctx.dispatch(Action::BomRemove {
                                            product_id,
                                            material_id,
                                        }))
                                    >
                                        "Remove"
                                    </Button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
