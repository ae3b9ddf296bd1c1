//! Theme management: dark (default) and light.
//!
//! The preference lives in localStorage under `theme`; only `"light"` is ever
//! stored, dark is the absence of the key. The applied theme is a
//! `data-theme="light"` attribute on the document root.

use crate::controller::use_controller;
use crate::state::Action;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "theme";

const LIGHT: &str = "light";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme for a stored preference value; anything but `"light"` is dark.
    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some(LIGHT) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Value to persist, `None` meaning the key is removed.
    pub fn preference_value(&self) -> Option<&'static str> {
        match self {
            Theme::Light => Some(LIGHT),
            Theme::Dark => None,
        }
    }

    /// Value of the `data-theme` attribute, `None` meaning no attribute.
    pub fn data_attribute(&self) -> Option<&'static str> {
        self.preference_value()
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Toggle button text: names the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

/// Set or clear `data-theme` on `<html>`. Setting the same value again
/// leaves the document unchanged.
pub fn apply_theme_attribute(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match theme.data_attribute() {
        Some(value) => {
            let _ = root.set_attribute("data-theme", value);
        }
        None => {
            let _ = root.remove_attribute("data-theme");
        }
    }
}

/// Theme toggle button for the header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_controller();
    let label = Memo::new(move |_| ctx.state.with(|s| s.theme.toggle_label()));

    view! {
        <button
            id="themeToggle"
            type="button"
            class="button button--ghost"
            on:click=move |_| ctx.dispatch(Action::ToggleTheme)
        >
            {move || label.get()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_preference() {
        assert_eq!(Theme::from_preference(Some("light")), Theme::Light);
        assert_eq!(Theme::from_preference(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_preference(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_labels_and_persisted_value() {
        assert_eq!(Theme::Dark.toggle_label(), "Light mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
        assert_eq!(Theme::Light.preference_value(), Some("light"));
        assert_eq!(Theme::Dark.preference_value(), None);
        assert_eq!(Theme::Dark.data_attribute(), None);
    }
}
