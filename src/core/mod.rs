//! Core module containing the domain types and traits of the service

pub mod error;
pub mod invoice;
pub mod report;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{FieldValidationError, OrderError, OrderResult, StoreError, ValidationError};
pub use invoice::{Employee, Invoice, LineItem};
pub use report::{MonthlyRevenue, TopEmployee, TopProduct, TotalQuantity};
pub use repository::InvoiceRepository;
pub use service::InvoiceStore;
pub use validation::CreateInvoiceRequest;
