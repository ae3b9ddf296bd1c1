//! Raw text of every form on the page.
//!
//! Inputs write into these structs through `*FieldChanged` actions; submit
//! handlers build request bodies from them, never from the DOM.

use contracts::domain::a002_material::{MaterialFormFields, MaterialId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ProductField {
    Sku,
    Name,
    Price,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormFields {
    pub sku: String,
    pub name: String,
    pub price: String,
}

impl ProductFormFields {
    pub fn set(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Sku => self.sku = value,
            ProductField::Name => self.name = value,
            ProductField::Price => self.price = value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MaterialField {
    Category,
    Name,
    Color,
    QuantityOnHand,
    Unit,
    CostPerUnit,
    Brand,
    Type,
    Finish,
}

/// Material form: the field texts plus the id being edited, if any.
/// `editing == None` is create mode (POST), `Some` is update mode (PATCH).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFormState {
    pub fields: MaterialFormFields,
    pub editing: Option<MaterialId>,
}

impl Default for MaterialFormState {
    fn default() -> Self {
        Self {
            fields: MaterialFormFields::blank(),
            editing: None,
        }
    }
}

impl MaterialFormState {
    pub fn set(&mut self, field: MaterialField, value: String) {
        let f = &mut self.fields;
        match field {
            MaterialField::Category => f.category = value,
            MaterialField::Name => f.name = value,
            MaterialField::Color => f.color = value,
            MaterialField::QuantityOnHand => f.quantity_on_hand = value,
            MaterialField::Unit => f.unit = value,
            MaterialField::CostPerUnit => f.cost_per_unit = value,
            MaterialField::Brand => f.brand = value,
            MaterialField::Type => f.material_type = value,
            MaterialField::Finish => f.finish = value,
        }
    }

    pub fn get(&self, field: MaterialField) -> &str {
        let f = &self.fields;
        match field {
            MaterialField::Category => &f.category,
            MaterialField::Name => &f.name,
            MaterialField::Color => &f.color,
            MaterialField::QuantityOnHand => &f.quantity_on_hand,
            MaterialField::Unit => &f.unit,
            MaterialField::CostPerUnit => &f.cost_per_unit,
            MaterialField::Brand => &f.brand,
            MaterialField::Type => &f.material_type,
            MaterialField::Finish => &f.finish,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Save Changes"
        } else {
            "Add Material"
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ItemField {
    Sku,
    Name,
    Category,
    UnitPrice,
    QuantityInStock,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFormFields {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price: String,
    pub quantity_in_stock: String,
}

impl ItemFormFields {
    pub fn set(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Sku => self.sku = value,
            ItemField::Name => self.name = value,
            ItemField::Category => self.category = value,
            ItemField::UnitPrice => self.unit_price = value,
            ItemField::QuantityInStock => self.quantity_in_stock = value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransactionKind {
    Sale,
    Restock,
}

impl TransactionKind {
    pub fn failure_message(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "Failed to record sale.",
            TransactionKind::Restock => "Failed to record restock.",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "Record Sale",
            TransactionKind::Restock => "Restock",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransactionField {
    ItemId,
    Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFormFields {
    pub item_id: String,
    pub quantity: String,
}

impl TransactionFormFields {
    pub fn set(&mut self, field: TransactionField, value: String) {
        match field {
            TransactionField::ItemId => self.item_id = value,
            TransactionField::Quantity => self.quantity = value,
        }
    }
}
