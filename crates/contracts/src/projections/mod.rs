pub mod p900_low_stock;
pub mod p901_sales_summary;
