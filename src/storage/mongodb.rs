//! MongoDB storage backend using the official MongoDB async driver.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! salesbook = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Invoices live in one collection (default `orders`). The employee
//! directory is a separate collection (default `employees`) owned by another
//! system; it is only read, through `$lookup`, by the top-employees report.
//!
//! # Serialization strategy
//!
//! Invoices are serialized via `serde_json::Value` as an intermediate format,
//! then converted to BSON documents. Two fields are adjusted on the way:
//! `id` is mapped to MongoDB's `_id` and `createdAt` is stored as a native
//! BSON date so that `$year`/`$month` can bucket it.

use crate::config::MongoConfig;
use crate::core::error::{OrderError, OrderResult, StoreError};
use crate::core::invoice::Invoice;
use crate::core::report::{MonthlyRevenue, TopEmployee, TopProduct, TotalQuantity};
use crate::core::service::InvoiceStore;
use crate::reporting::pipeline;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::error::ErrorKind;
use mongodb::{Client, Database};
use serde::de::DeserializeOwned;
use uuid::Uuid;

const BACKEND: &str = "MongoDB";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a serde_json::Value (expected to be an Object) into a BSON Document,
/// renaming `id` → `_id` for MongoDB convention.
fn json_to_document(json: serde_json::Value) -> Result<Document, StoreError> {
    let bson_val = bson::to_bson(&json)
        .map_err(|e| StoreError::serialization(format!("Failed to convert JSON to BSON: {}", e)))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => {
            return Err(StoreError::serialization(
                "Expected BSON document, got non-object",
            ));
        }
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value,
/// renaming `_id` → `id` for domain convention.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

fn invoice_to_document(invoice: &Invoice) -> Result<Document, StoreError> {
    let json = serde_json::to_value(invoice)?;
    let mut doc = json_to_document(json)?;
    doc.insert(
        "createdAt",
        Bson::DateTime(bson::DateTime::from_millis(
            invoice.created_at.timestamp_millis(),
        )),
    );
    Ok(doc)
}

fn document_to_invoice(mut doc: Document) -> Result<Invoice, StoreError> {
    if let Some(Bson::DateTime(stored)) = doc.get("createdAt").cloned() {
        let created_at = DateTime::<Utc>::from_timestamp_millis(stored.timestamp_millis())
            .ok_or_else(|| StoreError::serialization("createdAt out of range"))?;
        doc.insert("createdAt", created_at.to_rfc3339());
    }

    Ok(serde_json::from_value(document_to_json(doc))?)
}

/// Decode an aggregation result row
fn document_to_row<T: DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(document_to_json(doc))?)
}

/// Convert a UUID to its BSON string representation for queries.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

/// Map a driver error, separating unreachable-server failures from query failures
fn driver_error(context: &str, err: mongodb::error::Error) -> StoreError {
    let message = format!("{}: {}", context, err);
    match *err.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => StoreError::Connection {
            backend: BACKEND.to_string(),
            message,
        },
        _ => StoreError::query(BACKEND, message),
    }
}

// ---------------------------------------------------------------------------
// Connection lifecycle
// ---------------------------------------------------------------------------

/// Open a client and build a store from configuration
///
/// The returned [`Client`] is owned by the caller, which must call
/// `Client::shutdown` once the server has stopped.
pub async fn connect(config: &MongoConfig) -> Result<(Client, MongoInvoiceStore), StoreError> {
    let client = Client::with_uri_str(&config.uri)
        .await
        .map_err(|e| driver_error("Failed to create client", e))?;

    let store = MongoInvoiceStore::new(client.database(&config.database)).with_collections(
        config.invoices_collection.clone(),
        config.employees_collection.clone(),
    );

    Ok((client, store))
}

// ---------------------------------------------------------------------------
// MongoInvoiceStore
// ---------------------------------------------------------------------------

/// Invoice storage backed by MongoDB
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use salesbook::storage::MongoInvoiceStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoInvoiceStore::new(client.database("salesbook"))
///     .with_collections("orders", "NhanVien");
/// store.ensure_indexes().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoInvoiceStore {
    database: Database,
    invoices_collection: String,
    employees_collection: String,
}

impl MongoInvoiceStore {
    /// Create a store using the default `orders` and `employees` collections
    pub fn new(database: Database) -> Self {
        Self {
            database,
            invoices_collection: "orders".to_string(),
            employees_collection: "employees".to_string(),
        }
    }

    /// Override the collection names
    pub fn with_collections(
        mut self,
        invoices: impl Into<String>,
        employees: impl Into<String>,
    ) -> Self {
        self.invoices_collection = invoices.into();
        self.employees_collection = employees.into();
        self
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(&self.invoices_collection)
    }

    /// Create indexes used by the reports
    ///
    /// - `createdAt: 1` for monthly bucketing
    /// - `employeeId: 1` for per-employee grouping
    ///
    /// Idempotent, safe to call on every startup.
    pub async fn ensure_indexes(&self) -> OrderResult<()> {
        use mongodb::IndexModel;

        let indexes = vec![
            IndexModel::builder().keys(doc! { "createdAt": 1 }).build(),
            IndexModel::builder().keys(doc! { "employeeId": 1 }).build(),
        ];

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(|e| driver_error("Failed to create indexes on invoices collection", e))?;

        Ok(())
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> OrderResult<Vec<Document>> {
        let cursor = self
            .collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| driver_error("Failed to run aggregation", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| driver_error("Failed to collect aggregation results", e))?;

        Ok(docs)
    }

    async fn aggregate_rows<T: DeserializeOwned>(
        &self,
        pipeline: Vec<Document>,
    ) -> OrderResult<Vec<T>> {
        let rows = self
            .aggregate(pipeline)
            .await?
            .into_iter()
            .map(document_to_row)
            .collect::<Result<Vec<T>, StoreError>>()?;
        Ok(rows)
    }
}

#[async_trait]
impl InvoiceStore for MongoInvoiceStore {
    /// Insert the invoice and read it back to return the stored version.
    async fn insert(&self, invoice: Invoice) -> OrderResult<Invoice> {
        let doc = invoice_to_document(&invoice)?;
        let id_bson = uuid_bson(&invoice.id);

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| driver_error("Failed to create invoice", e))?;

        let stored = self
            .collection()
            .find_one(doc! { "_id": id_bson })
            .await
            .map_err(|e| driver_error("Failed to read back created invoice", e))?
            .ok_or_else(|| StoreError::query(BACKEND, "Invoice not found after insert"))?;

        Ok(document_to_invoice(stored)?)
    }

    /// List every invoice in natural order.
    ///
    /// Every document must decode as an [`Invoice`]: a string UUID `_id` and
    /// a BSON date `createdAt`. A single document written outside this
    /// service (an ObjectId `_id`, a missing `createdAt`) fails the whole
    /// listing with [`StoreError::Serialization`].
    async fn list(&self) -> OrderResult<Vec<Invoice>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| driver_error("Failed to list invoices", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| driver_error("Failed to collect invoices", e))?;

        let invoices = docs
            .into_iter()
            .map(document_to_invoice)
            .collect::<Result<Vec<_>, StoreError>>()?;
        Ok(invoices)
    }

    async fn delete(&self, id: &Uuid) -> OrderResult<()> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| driver_error("Failed to delete invoice", e))?;

        if result.deleted_count == 0 {
            return Err(OrderError::not_found(id.to_string()));
        }

        Ok(())
    }

    async fn total_quantity(&self) -> OrderResult<TotalQuantity> {
        let rows: Vec<TotalQuantity> = self
            .aggregate_rows(pipeline::total_quantity_pipeline())
            .await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn monthly_revenue(&self) -> OrderResult<Vec<MonthlyRevenue>> {
        self.aggregate_rows(pipeline::monthly_revenue_pipeline())
            .await
    }

    async fn top_products(&self, limit: usize) -> OrderResult<Vec<TopProduct>> {
        self.aggregate_rows(pipeline::top_products_pipeline(limit))
            .await
    }

    async fn top_employees(&self) -> OrderResult<Vec<TopEmployee>> {
        self.aggregate_rows(pipeline::top_employees_pipeline(&self.employees_collection))
            .await
    }
}
