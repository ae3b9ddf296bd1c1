use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input};
use crate::state::{Action, ProductField};
use leptos::prelude::*;

/// Create-product form. New products start with an empty recipe.
#[component]
#[allow(non_snake_case)]
pub fn ProductCreateForm() -> impl IntoView {
    let ctx = use_controller();
    let field = move |f: ProductField| {
        Signal::derive(move || {
            ctx.state.with(|s| {
                let form = &s.product_form;
                match f {
                    ProductField::Sku => form.sku.clone(),
                    ProductField::Name => form.name.clone(),
                    ProductField::Price => form.price.clone(),
                }
            })
        })
    };
    let on_input = move |field: ProductField| {
        Callback::new(move |value: String| {
            ctx.dispatch(Action::ProductFieldChanged { field, value })
        })
    };

    view! {
        <form
            id="addProductForm"
            class="form row"
            on:submit=move |ev| {
                ev.prevent_default();
                ctx.dispatch(Action::SubmitProduct);
            }
        >
            <Input label="SKU" name="sku" value=field(ProductField::Sku) on_input=on_input(ProductField::Sku) required=true />
            <Input label="Name" name="name" value=field(ProductField::Name) on_input=on_input(ProductField::Name) required=true />
            <Input
                label="Price"
                name="price"
                input_type="number"
                step="0.01"
                value=field(ProductField::Price)
                on_input=on_input(ProductField::Price)
            />
            <Button button_type="submit">"Add Product"</Button>
        </form>
    }
}
