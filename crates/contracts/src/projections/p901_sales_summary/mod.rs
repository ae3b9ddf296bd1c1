pub mod dto;

pub use dto::SalesSummaryDto;
