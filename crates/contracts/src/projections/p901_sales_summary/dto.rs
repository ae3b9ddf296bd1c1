use crate::domain::common::format_number;
use crate::domain::common::lenient::number_option;
use serde::{Deserialize, Serialize};

/// Response of `GET /api/reports/sales-summary`.
///
/// Every field is optional; a backend that omits one shows it as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalesSummaryDto {
    #[serde(default, deserialize_with = "number_option")]
    pub total_transactions: Option<f64>,
    #[serde(default, deserialize_with = "number_option")]
    pub total_units_sold: Option<f64>,
    #[serde(default, deserialize_with = "number_option")]
    pub total_revenue: Option<f64>,
}

impl SalesSummaryDto {
    /// (label, value) pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Transactions", format_number(self.total_transactions.unwrap_or(0.0))),
            ("Units sold", format_number(self.total_units_sold.unwrap_or(0.0))),
            ("Revenue", format!("{:.2}", self.total_revenue.unwrap_or(0.0))),
        ]
    }
}
