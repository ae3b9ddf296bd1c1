use crate::controller::provide_controller;
use crate::layout::{Center, Header};
use crate::shared::api_utils::ClientConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Controller context for the whole app; start() applies the theme,
    // reads ?view= and performs the first fetch.
    let ctx = provide_controller(ClientConfig::load());
    ctx.start();

    view! {
        <div class="app">
            <Header />
            <Center />
        </div>
    }
}
