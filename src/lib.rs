//! # Salesbook
//!
//! A small HTTP service that records point-of-sale invoices ("orders") and
//! computes sales reports from them.
//!
//! ## Features
//!
//! - **Invoice CRUD**: create, list and delete invoices over REST
//! - **Sales Reports**: total quantity sold, monthly revenue, top products, top employees
//! - **Pluggable Storage**: in-memory store for development, MongoDB for production
//! - **Typed Errors**: validation, not-found and store failures map to 400/404/500
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesbook::prelude::*;
//!
//! let store = InMemoryInvoiceStore::with_employees([Employee::new("E1", "Lan")]);
//!
//! ServerBuilder::new()
//!     .with_store(store)
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod reporting;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CreateInvoiceRequest, Employee, Invoice, InvoiceRepository, InvoiceStore, LineItem,
        MonthlyRevenue, OrderError, OrderResult, StoreError, TopEmployee, TopProduct,
        TotalQuantity, ValidationError,
    };

    // === Storage ===
    pub use crate::storage::InMemoryInvoiceStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoInvoiceStore;

    // === Config ===
    pub use crate::config::{AppConfig, Backend, MongoConfig};

    // === Server ===
    pub use crate::server::{ApiError, AppState, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
