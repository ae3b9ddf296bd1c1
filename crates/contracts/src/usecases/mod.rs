pub mod u501_record_sale;
pub mod u502_restock;
