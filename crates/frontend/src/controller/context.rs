use super::{BrowserUi, Controller, HttpInventoryApi};
use crate::shared::api_utils::ClientConfig;
use crate::state::{Action, AppState};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

pub type AppController = Controller<HttpInventoryApi, BrowserUi>;

/// What components get from context: the rendered state to read and a way to
/// dispatch actions.
#[derive(Clone, Copy)]
pub struct ControllerContext {
    pub state: RwSignal<AppState>,
    controller: StoredValue<AppController, LocalStorage>,
}

impl ControllerContext {
    fn new(config: ClientConfig) -> Self {
        let state = RwSignal::new(AppState::default());
        let controller = Controller::new(HttpInventoryApi::new(config), BrowserUi::new(state));
        Self {
            state,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run an action. Form edits apply immediately; anything that talks to
    /// the backend runs as a local task.
    pub fn dispatch(&self, action: Action) {
        let controller = self.controller.get_value();
        if let Some(action) = controller.apply_local(action) {
            wasm_bindgen_futures::spawn_local(async move {
                controller.handle(action).await;
            });
        }
    }

    /// Kick off the first load and follow Back/Forward navigation.
    pub fn start(&self) {
        let controller = self.controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            controller.start().await;
        });

        let ctx = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            ctx.dispatch(Action::RouteChanged);
        });
    }
}

pub fn provide_controller(config: ClientConfig) -> ControllerContext {
    let ctx = ControllerContext::new(config);
    provide_context(ctx);
    ctx
}

/// Hook to use the controller context.
pub fn use_controller() -> ControllerContext {
    use_context::<ControllerContext>()
        .expect("ControllerContext not found. Call provide_controller in App.")
}
