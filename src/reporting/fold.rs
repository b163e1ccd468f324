//! In-process report aggregation

use crate::core::invoice::{Employee, Invoice};
use crate::core::report::{MonthlyRevenue, TopEmployee, TopProduct, TotalQuantity, month_label};
use chrono::Datelike;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Flatten every invoice's items and sum their quantities
pub fn total_quantity(invoices: &[Invoice]) -> TotalQuantity {
    let total: u64 = invoices.iter().map(Invoice::total_quantity).sum();
    TotalQuantity {
        total_quantity: i64::try_from(total).unwrap_or(i64::MAX),
    }
}

/// Group invoices by the UTC `(year, month)` of `createdAt`
///
/// Invoices without a `totalAmount` count towards `totalInvoices` but add
/// nothing to `totalRevenue`.
pub fn monthly_revenue(invoices: &[Invoice]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<String, (f64, i64)> = BTreeMap::new();

    for invoice in invoices {
        let label = month_label(invoice.created_at.year(), invoice.created_at.month());
        let entry = months.entry(label).or_insert((0.0, 0));
        entry.0 += invoice.total_amount.unwrap_or(0.0);
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|(month, (total_revenue, total_invoices))| MonthlyRevenue {
            month: Some(month),
            total_revenue,
            total_invoices,
        })
        .collect()
}

/// Group flattened items by `productId` and keep the `limit` largest
///
/// `productName` comes from the first item seen for each product. Equal
/// quantities keep first-seen order.
pub fn top_products(invoices: &[Invoice], limit: usize) -> Vec<TopProduct> {
    let mut products: IndexMap<&str, TopProduct> = IndexMap::new();

    for item in invoices.iter().flat_map(|invoice| invoice.items.iter()) {
        products
            .entry(item.product_id.as_str())
            .or_insert_with(|| TopProduct {
                product_id: item.product_id.clone(),
                product_name: Some(item.product_name.clone()),
                total_quantity: 0,
            })
            .total_quantity += i64::from(item.quantity);
    }

    let mut ranked: Vec<TopProduct> = products.into_values().collect();
    ranked.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    ranked.truncate(limit);
    ranked
}

/// Sum `totalAmount` per employee and join to the employee directory
///
/// Inner join: an employee id with no directory record produces no row,
/// and one with several records produces one row per record.
pub fn top_employees(invoices: &[Invoice], employees: &[Employee]) -> Vec<TopEmployee> {
    let mut sales: IndexMap<&str, f64> = IndexMap::new();

    for invoice in invoices {
        *sales.entry(invoice.employee_id.as_str()).or_insert(0.0) +=
            invoice.total_amount.unwrap_or(0.0);
    }

    let mut ranked: Vec<TopEmployee> = sales
        .into_iter()
        .flat_map(|(employee_id, total_sales)| {
            employees
                .iter()
                .filter(move |e| e.employee_id == employee_id)
                .map(move |e| TopEmployee {
                    employee_id: employee_id.to_string(),
                    employee_name: e.name.clone(),
                    total_sales,
                })
        })
        .collect();

    ranked.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    ranked
}
