use super::ports::UiPort;
use crate::routes::ActiveView;
use crate::shared::theme::{apply_theme_attribute, Theme};
use crate::state::AppState;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `UiPort` backed by the real document. Rendering hands the state to the
/// Leptos signal the components read from.
#[derive(Clone, Copy)]
pub struct BrowserUi {
    state: RwSignal<AppState>,
}

impl BrowserUi {
    pub fn new(state: RwSignal<AppState>) -> Self {
        Self { state }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl UiPort for BrowserUi {
    fn render(&self, state: &AppState) {
        self.state.set(state.clone());
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn store_preference(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_preference(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn apply_theme(&self, theme: Theme) {
        apply_theme_attribute(theme);
    }

    fn current_search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn push_view(&self, view: ActiveView) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let url = view.to_search();
        if self.current_search() == url {
            return;
        }
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
        }
    }
}
