pub mod a001_product;
pub mod a002_material;
pub mod a003_bom_line;
pub mod a004_item;
pub mod common;
