//! Active page selection from the `view` query parameter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ActiveView {
    #[default]
    Products,
    Materials,
}

impl ActiveView {
    /// Parse `location.search` (with or without the leading `?`).
    /// Matching is case-insensitive; unknown or missing values mean products.
    pub fn from_search(search: &str) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("view").map(|v| v.trim().to_lowercase()).as_deref() {
            Some("materials") => ActiveView::Materials,
            _ => ActiveView::Products,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Products => "products",
            ActiveView::Materials => "materials",
        }
    }

    /// Query string written to the address bar on navigation.
    pub fn to_search(&self) -> String {
        let query = serde_qs::to_string(&HashMap::from([("view", self.as_str())]))
            .unwrap_or_default();
        format!("?{}", query)
    }

    pub fn refresh_label(&self) -> &'static str {
        match self {
            ActiveView::Products => "Refresh Products",
            ActiveView::Materials => "Refresh",
        }
    }

    /// CSS `display` value of the page section for `page`.
    pub fn display_for(&self, page: ActiveView) -> &'static str {
        if *self == page {
            "block"
        } else {
            "none"
        }
    }
}
