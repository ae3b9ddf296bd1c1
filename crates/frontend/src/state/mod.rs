pub mod action;
pub mod app_state;
pub mod forms;

pub use action::Action;
pub use app_state::{ApiVersion, AppState, BomEditorPhase, BomEditorState, LegacyReports};
pub use forms::{
    ItemField, ItemFormFields, MaterialField, MaterialFormState, ProductField, ProductFormFields,
    TransactionField, TransactionFormFields, TransactionKind,
};
