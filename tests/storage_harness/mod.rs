//! Shared test harness for invoice store backends
//!
//! Provides invoice and employee fixtures plus two test-suite macros:
//!
//! - `invoice_store_tests!` exercises an `InvoiceStore` directly
//! - `rest_integration_tests!` drives the same store through the HTTP routes
//!
//! Both take the path of an async factory `fn(Vec<Employee>) -> impl InvoiceStore`
//! that returns a store with an empty invoice collection and the given
//! employee directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! invoice_store_tests!(make_store);
//! rest_integration_tests!(make_store);
//! ```

#![allow(dead_code)]


#[macro_use]
pub mod rest_tests;

use chrono::{DateTime, Utc};
use salesbook::core::{Employee, Invoice, LineItem};
use serde_json::{Value, json};
use uuid::Uuid;

/// Employee directory used by the join tests: E1 Lan, E2 Minh
pub fn directory() -> Vec<Employee> {
    vec![Employee::new("E1", "Lan"), Employee::new("E2", "Minh")]
}

pub fn item(product_id: &str, product_name: &str, quantity: u32) -> LineItem {
    LineItem::new(product_id, product_name, quantity)
}

/// Build an invoice with a fresh id
///
/// `employee_name` on the invoice deliberately differs from the directory
/// so tests can tell which one a report used.
pub fn invoice(
    created_at: &str,
    employee_id: &str,
    total_amount: Option<f64>,
    items: Vec<LineItem>,
) -> Invoice {
    let id = Uuid::new_v4();
    Invoice {
        id,
        invoice_code: format!("HD-{}", &id.simple().to_string()[..8]),
        created_at: created_at
            .parse::<DateTime<Utc>>()
            .expect("fixture timestamp should be RFC 3339"),
        employee_id: employee_id.to_string(),
        employee_name: format!("cashier {employee_id}"),
        items,
        total_amount,
        payment_method: Some("cash".to_string()),
        customer_paid: total_amount,
        change: total_amount.map(|_| 0.0),
    }
}

/// A valid `POST /orders` body
pub fn create_body(invoice_code: &str, created_at: &str, employee_id: &str, total: f64) -> Value {
    json!({
        "invoiceCode": invoice_code,
        "createdAt": created_at,
        "employeeId": employee_id,
        "employeeName": format!("cashier {employee_id}"),
        "items": [
            { "productId": "P1", "productName": "Coffee", "quantity": 2 }
        ],
        "totalAmount": total,
        "paymentMethod": "cash",
        "customerPaid": total,
        "change": 0.0
    })
}

/// A body with the given line items and no payment fields
pub fn create_body_with_items(invoice_code: &str, items: Value) -> Value {
    json!({
        "invoiceCode": invoice_code,
        "createdAt": "2024-01-15T08:30:00Z",
        "employeeId": "E1",
        "employeeName": "cashier E1",
        "items": items
    })
}
