pub mod request;

pub use request::RecordSaleRequest;
