//! Storage trait for invoices and their reports

use crate::core::error::OrderResult;
use crate::core::invoice::Invoice;
use crate::core::report::{MonthlyRevenue, TopEmployee, TopProduct, TotalQuantity};
use async_trait::async_trait;
use uuid::Uuid;

/// Backend operations over the invoice collection
///
/// Implementations map every driver failure to
/// [`StoreError`](crate::core::error::StoreError). The reporting queries are
/// read-only and either return a complete result or fail; there are no
/// partial results.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Persist a new invoice and return the stored version
    async fn insert(&self, invoice: Invoice) -> OrderResult<Invoice>;

    /// Every stored invoice, in the backend's natural order
    async fn list(&self) -> OrderResult<Vec<Invoice>>;

    /// Remove an invoice
    ///
    /// Returns `OrderError::NotFound` if no invoice has this id.
    async fn delete(&self, id: &Uuid) -> OrderResult<()>;

    /// Sum of item quantities across all invoices (0 when empty)
    async fn total_quantity(&self) -> OrderResult<TotalQuantity>;

    /// Revenue and invoice count per `YYYY-MM`, ascending by month
    async fn monthly_revenue(&self) -> OrderResult<Vec<MonthlyRevenue>>;

    /// The `limit` products with the highest quantity sold, descending
    async fn top_products(&self, limit: usize) -> OrderResult<Vec<TopProduct>>;

    /// Sales per employee joined to the employee directory, descending
    ///
    /// Employees without a directory record are left out.
    async fn top_employees(&self) -> OrderResult<Vec<TopEmployee>>;
}
