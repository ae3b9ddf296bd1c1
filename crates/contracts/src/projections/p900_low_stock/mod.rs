pub mod dto;

pub use dto::LowStockRowDto;
