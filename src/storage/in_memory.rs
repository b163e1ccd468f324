//! In-memory implementation of InvoiceStore for testing and development

use crate::core::error::{OrderError, OrderResult, StoreError};
use crate::core::invoice::{Employee, Invoice};
use crate::core::report::{MonthlyRevenue, TopEmployee, TopProduct, TotalQuantity};
use crate::core::service::InvoiceStore;
use crate::reporting::fold;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

/// In-memory invoice store
///
/// Invoices are kept in insertion order, which is the order `list` returns.
/// The employee directory used by the top-employees join is seeded with
/// [`with_employees`](Self::with_employees) or [`add_employee`](Self::add_employee).
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<Vec<Invoice>>>,
    employees: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryInvoiceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a pre-populated employee directory
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            invoices: Arc::default(),
            employees: Arc::new(RwLock::new(employees.into_iter().collect())),
        }
    }

    /// Add an employee directory record
    pub fn add_employee(&self, employee: Employee) -> OrderResult<()> {
        self.employees
            .write()
            .map_err(|e| lock_error("write", e))?
            .push(employee);
        Ok(())
    }

    fn read(&self) -> OrderResult<RwLockReadGuard<'_, Vec<Invoice>>> {
        Ok(self.invoices.read().map_err(|e| lock_error("read", e))?)
    }

    fn write(&self) -> OrderResult<RwLockWriteGuard<'_, Vec<Invoice>>> {
        Ok(self.invoices.write().map_err(|e| lock_error("write", e))?)
    }
}

fn lock_error(kind: &str, err: impl std::fmt::Display) -> StoreError {
    StoreError::query(BACKEND, format!("Failed to acquire {} lock: {}", kind, err))
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: Invoice) -> OrderResult<Invoice> {
        self.write()?.push(invoice.clone());
        Ok(invoice)
    }

    async fn list(&self) -> OrderResult<Vec<Invoice>> {
        Ok(self.read()?.clone())
    }

    async fn delete(&self, id: &Uuid) -> OrderResult<()> {
        let mut invoices = self.write()?;
        let position = invoices
            .iter()
            .position(|invoice| &invoice.id == id)
            .ok_or_else(|| OrderError::not_found(id.to_string()))?;
        invoices.remove(position);
        Ok(())
    }

    async fn total_quantity(&self) -> OrderResult<TotalQuantity> {
        Ok(fold::total_quantity(&self.read()?))
    }

    async fn monthly_revenue(&self) -> OrderResult<Vec<MonthlyRevenue>> {
        Ok(fold::monthly_revenue(&self.read()?))
    }

    async fn top_products(&self, limit: usize) -> OrderResult<Vec<TopProduct>> {
        Ok(fold::top_products(&self.read()?, limit))
    }

    async fn top_employees(&self) -> OrderResult<Vec<TopEmployee>> {
        let employees = self
            .employees
            .read()
            .map_err(|e| lock_error("read", e))?;
        Ok(fold::top_employees(&self.read()?, &employees))
    }
}
