//! Common types shared by all aggregates

pub mod aggregate_id;
pub mod form_value;
pub mod lenient;

pub use aggregate_id::AggregateId;
pub use form_value::{format_number, non_blank, parse_number, parse_number_or_zero};
