pub mod material_category;

pub use material_category::MaterialCategory;
