//! Report rows produced by the reporting queries

use serde::{Deserialize, Serialize};

/// Number of products returned by the top-products report
pub const TOP_PRODUCTS_LIMIT: usize = 3;

/// Total quantity of items sold across every invoice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalQuantity {
    pub total_quantity: i64,
}

/// Revenue for one calendar month
///
/// `month` is `YYYY-MM`. It is `None` only for stored documents that carry
/// no usable `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub month: Option<String>,
    pub total_revenue: f64,
    pub total_invoices: i64,
}

/// Quantity sold for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    pub product_name: Option<String>,
    pub total_quantity: i64,
}

/// Sales total for one employee, named from the employee directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEmployee {
    pub employee_id: String,
    pub employee_name: String,
    pub total_sales: f64,
}

/// Format a `(year, month)` pair as `YYYY-MM`
pub fn month_label(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}
