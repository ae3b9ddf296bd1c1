use crate::controller::use_controller;
use crate::routes::ActiveView;
use crate::shared::components::ui::Button;
use crate::shared::theme::ThemeToggle;
use crate::state::{Action, ApiVersion};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
fn NavLink(view: ActiveView, label: &'static str) -> impl IntoView {
    let ctx = use_controller();
    let active = Memo::new(move |_| ctx.state.with(|s| s.view == view));

    view! {
        <button
            type="button"
            class="nav__link"
            class:active=move || active.get()
            data-view=view.as_str()
            on:click=move |_| ctx.dispatch(Action::Navigate(view))
        >
            {label}
        </button>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let ctx = use_controller();
    let is_v1 = Memo::new(move |_| ctx.state.with(|s| s.api_version == ApiVersion::V1));
    let refresh_label = Memo::new(move |_| ctx.state.with(|s| s.view.refresh_label()));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Inventory"</span>
                <Show when=move || is_v1.get()>
                    <nav class="nav">
                        <NavLink view=ActiveView::Products label="Products" />
                        <NavLink view=ActiveView::Materials label="Materials" />
                    </nav>
                </Show>
            </div>
            <div class="header__actions">
                <Button
                    id="refreshBtn"
                    variant="ghost"
                    on_click=Callback::new(move |_| ctx.dispatch(Action::Refresh))
                >
                    {move || refresh_label.get()}
                </Button>
                <ThemeToggle />
            </div>
        </header>
    }
}
