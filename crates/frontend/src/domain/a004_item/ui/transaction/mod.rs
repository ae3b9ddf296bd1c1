use crate::controller::use_controller;
use crate::shared::components::ui::{Button, Input};
use crate::state::{Action, TransactionField, TransactionKind};
use leptos::prelude::*;

/// Item id + quantity, submitted as a sale or a restock.
#[component]
#[allow(non_snake_case)]
pub fn TransactionForm() -> impl IntoView {
    let ctx = use_controller();
    let item_id = Signal::derive(move || ctx.state.with(|s| s.transaction_form.item_id.clone()));
    let quantity = Signal::derive(move || ctx.state.with(|s| s.transaction_form.quantity.clone()));
    let on_input = move |field: TransactionField| {
        Callback::new(move |value: String| {
            ctx.dispatch(Action::TransactionFieldChanged { field, value })
        })
    };
    let submit = move |kind: TransactionKind| {
        view! {
            <Button
                variant=if kind == TransactionKind::Sale { "primary" } else { "secondary" }
                on_click=Callback::new(move |_| ctx.dispatch(Action::SubmitTransaction(kind)))
            >
                {kind.button_label()}
            </Button>
        }
    };

    view! {
        <div id="transactionForm" class="form row">
            <Input
                label="Item ID"
                name="item_id"
                input_type="number"
                step="1"
                value=item_id
                on_input=on_input(TransactionField::ItemId)
            />
            <Input
                label="Quantity"
                name="quantity"
                input_type="number"
                step="1"
                value=quantity
                on_input=on_input(TransactionField::Quantity)
            />
            {submit(TransactionKind::Sale)}
            {submit(TransactionKind::Restock)}
        </div>
    }
}
