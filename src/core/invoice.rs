//! Invoice and employee records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single line on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,

    /// Per-item amount, stored as given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl LineItem {
    pub fn new(product_id: impl Into<String>, product_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            price: None,
        }
    }
}

/// A persisted point-of-sale invoice ("order")
///
/// `id` is assigned once at creation and is the only key usable for
/// deletion. Monetary fields are stored exactly as submitted; no
/// arithmetic relationship between them is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_code: String,
    pub created_at: DateTime<Utc>,
    pub employee_id: String,
    pub employee_name: String,
    pub items: Vec<LineItem>,

    // Absent payment fields are left out of responses and stored documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_paid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

impl Invoice {
    /// Sum of item quantities on this invoice
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Employee record owned by another system, read only for the sales join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
}

impl Employee {
    pub fn new(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
        }
    }
}
