use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input, Select};
use crate::state::{Action, MaterialField};
use contracts::enums::MaterialCategory;
use leptos::prelude::*;

/// Category choices: the known categories plus whatever the form holds, so a
/// custom category loaded for editing stays selectable.
fn category_options(current: &str) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = MaterialCategory::known()
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect();
    let current = MaterialCategory::from_input(current);
    if !options.iter().any(|(value, _)| value == current.as_str()) {
        options.push((current.as_str().to_string(), current.as_str().to_string()));
    }
    options
}

/// One form for create and edit. In edit mode the submit button reads
/// "Save Changes" and a Cancel button returns to create mode.
#[component]
#[allow(non_snake_case)]
pub fn MaterialForm() -> impl IntoView {
    let ctx = use_controller();
    let value = move |field: MaterialField| {
        Signal::derive(move || ctx.state.with(|s| s.material_form.get(field).to_string()))
    };
    let on_input = move |field: MaterialField| {
        Callback::new(move |value: String| {
            ctx.dispatch(Action::MaterialFieldChanged { field, value })
        })
    };
    let editing = Memo::new(move |_| ctx.state.with(|s| s.material_form.editing.is_some()));
    let submit_label = Memo::new(move |_| ctx.state.with(|s| s.material_form.submit_label()));
    let categories = Signal::derive(move || {
        ctx.state
            .with(|s| category_options(&s.material_form.fields.category))
    });
    let selected_category = Signal::derive(move || {
        ctx.state
            .with(|s| MaterialCategory::from_input(&s.material_form.fields.category).to_string())
    });

    view! {
        <form
            id="addMaterialForm"
            class="form row"
            on:submit=move |ev| {
                ev.prevent_default();
                ctx.dispatch(Action::SubmitMaterial);
            }
        >
            <Select
                label="Category"
                name="category"
                value=selected_category
                options=categories
                on_change=on_input(MaterialField::Category)
            />
            <Input label="Name" name="name" value=value(MaterialField::Name) on_input=on_input(MaterialField::Name) required=true />
            <Input label="Color" name="color" placeholder="N/A" value=value(MaterialField::Color) on_input=on_input(MaterialField::Color) />
            <Input
                label="On hand"
                name="quantity_on_hand"
                input_type="number"
                step="0.01"
                value=value(MaterialField::QuantityOnHand)
                on_input=on_input(MaterialField::QuantityOnHand)
            />
            <Input label="Unit" name="unit" placeholder="g / pcs" value=value(MaterialField::Unit) on_input=on_input(MaterialField::Unit) />
            <Input
                label="Cost per unit"
                name="cost_per_unit"
                input_type="number"
                step="0.0001"
                value=value(MaterialField::CostPerUnit)
                on_input=on_input(MaterialField::CostPerUnit)
            />
            <Input label="Brand" name="brand" value=value(MaterialField::Brand) on_input=on_input(MaterialField::Brand) />
            <Input label="Type" name="type" value=value(MaterialField::Type) on_input=on_input(MaterialField::Type) />
            <Input label="Finish" name="finish" value=value(MaterialField::Finish) on_input=on_input(MaterialField::Finish) />

            <Button button_type="submit">{move || submit_label.get()}</Button>
            <Show when=move || editing.get()>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| ctx.dispatch(Action::CancelMaterialEdit))
                >
                    "Cancel"
                </Button>
            </Show>
        </form>
    }
}
