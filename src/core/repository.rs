//! Invoice repository: validation, id assignment and report delegation

use crate::core::error::{OrderError, OrderResult};
use crate::core::invoice::Invoice;
use crate::core::report::{
    MonthlyRevenue, TOP_PRODUCTS_LIMIT, TopEmployee, TopProduct, TotalQuantity,
};
use crate::core::service::InvoiceStore;
use crate::core::validation::CreateInvoiceRequest;
use std::sync::Arc;
use uuid::Uuid;

/// Entry point for every invoice operation
///
/// Holds an injected [`InvoiceStore`]; there is no ambient connection.
#[derive(Clone)]
pub struct InvoiceRepository {
    store: Arc<dyn InvoiceStore>,
}

impl InvoiceRepository {
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self { store }
    }

    /// Validate the request, assign an id and persist the invoice
    ///
    /// Nothing is written when validation fails.
    pub async fn create(&self, request: CreateInvoiceRequest) -> OrderResult<Invoice> {
        let invoice = request.into_invoice(Uuid::new_v4())?;
        let stored = self.store.insert(invoice).await?;

        tracing::info!(
            id = %stored.id,
            invoice_code = %stored.invoice_code,
            items = stored.items.len(),
            "invoice created"
        );

        Ok(stored)
    }

    pub async fn list_all(&self) -> OrderResult<Vec<Invoice>> {
        self.store.list().await
    }

    /// Delete by the id assigned at creation
    ///
    /// A value that is not a UUID cannot name a stored invoice and is
    /// reported as not found.
    pub async fn delete_by_id(&self, id: &str) -> OrderResult<()> {
        let uuid = Uuid::parse_str(id).map_err(|_| OrderError::not_found(id))?;
        self.store.delete(&uuid).await?;

        tracing::info!(%uuid, "invoice deleted");
        Ok(())
    }

    pub async fn total_quantity(&self) -> OrderResult<TotalQuantity> {
        self.store.total_quantity().await
    }

    pub async fn monthly_revenue(&self) -> OrderResult<Vec<MonthlyRevenue>> {
        self.store.monthly_revenue().await
    }

    pub async fn top_products(&self) -> OrderResult<Vec<TopProduct>> {
        self.store.top_products(TOP_PRODUCTS_LIMIT).await
    }

    pub async fn top_employees(&self) -> OrderResult<Vec<TopEmployee>> {
        self.store.top_employees().await
    }
}
