use serde::{Deserialize, Serialize};

/// Category of a raw material.
///
/// The backend stores the category as an upper-case string. `FILAMENT` and
/// `OTHER` are the values the client knows about; anything else is kept
/// verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum MaterialCategory {
    Filament,
    #[default]
    Other,
    Custom(String),
}

impl MaterialCategory {
    /// Normalise a form value: trimmed, upper-cased, blank means `OTHER`.
    pub fn from_input(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "" | "OTHER" => MaterialCategory::Other,
            "FILAMENT" => MaterialCategory::Filament,
            _ => MaterialCategory::Custom(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MaterialCategory::Filament => "FILAMENT",
            MaterialCategory::Other => "OTHER",
            MaterialCategory::Custom(s) => s,
        }
    }

    /// Unit used when the form leaves the unit blank.
    pub fn default_unit(&self) -> &'static str {
        match self {
            MaterialCategory::Filament => "g",
            _ => "pcs",
        }
    }

    /// Categories offered in the material form selector.
    pub fn known() -> [MaterialCategory; 2] {
        [MaterialCategory::Filament, MaterialCategory::Other]
    }
}

impl From<String> for MaterialCategory {
    fn from(value: String) -> Self {
        MaterialCategory::from_input(&value)
    }
}

impl From<MaterialCategory> for String {
    fn from(value: MaterialCategory) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
