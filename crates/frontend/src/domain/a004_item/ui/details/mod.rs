use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input};
use crate::state::{Action, ItemField};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ItemCreateForm() -> impl IntoView {
    let ctx = use_controller();
    let value = move |field: ItemField| {
        Signal::derive(move || {
            ctx.state.with(|s| {
                let f = &s.item_form;
                match field {
                    ItemField::Sku => f.sku.clone(),
                    ItemField::Name => f.name.clone(),
                    ItemField::Category => f.category.clone(),
                    ItemField::UnitPrice => f.unit_price.clone(),
                    ItemField::QuantityInStock => f.quantity_in_stock.clone(),
                }
            })
        })
    };
    let on_input = move |field: ItemField| {
        Callback::new(move |value: String| ctx.dispatch(Action::ItemFieldChanged { field, value }))
    };

    view! {
        <form
            id="addItemForm"
            class="form row"
            on:submit=move |ev| {
                ev.prevent_default();
                ctx.dispatch(Action::SubmitItem);
            }
        >
            <Input label="SKU" name="sku" value=value(ItemField::Sku) on_input=on_input(ItemField::Sku) required=true />
            <Input label="Name" name="name" value=value(ItemField::Name) on_input=on_input(ItemField::Name) required=true />
            <Input label="Category" name="category" value=value(ItemField::Category) on_input=on_input(ItemField::Category) />
            <Input
                label="Unit price"
                name="unit_price"
                input_type="number"
                step="0.01"
                value=value(ItemField::UnitPrice)
                on_input=on_input(ItemField::UnitPrice)
            />
            <Input
                label="Quantity"
                name="quantity_in_stock"
                input_type="number"
                step="1"
                value=value(ItemField::QuantityInStock)
                on_input=on_input(ItemField::QuantityInStock)
            />
            <Button button_type="submit">"Add Item"</Button>
        </form>
    }
}
