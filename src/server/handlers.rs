//! HTTP handlers for invoice and report endpoints

use crate::core::invoice::Invoice;
use crate::core::report::{MonthlyRevenue, TopEmployee, TopProduct, TotalQuantity};
use crate::core::repository::InvoiceRepository;
use crate::core::validation::CreateInvoiceRequest;
use crate::server::error::ApiError;
use crate::server::extract::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: InvoiceRepository,
}

/// Response for invoice creation
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub message: &'static str,
    pub order: Invoice,
}

/// Confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create an invoice
///
/// POST /orders
///
/// The only endpoint that echoes the store's error message on failure.
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), ApiError> {
    let order = state
        .repository
        .create(request)
        .await
        .map_err(|e| ApiError::new(e, "Server error.").with_detail())?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Invoice created successfully.",
            order,
        }),
    ))
}

/// List every invoice
///
/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Invoice>>, ApiError> {
    let orders = state
        .repository
        .list_all()
        .await
        .map_err(|e| ApiError::new(e, "An error occurred while fetching orders."))?;

    tracing::debug!(count = orders.len(), "listed orders");
    Ok(Json(orders))
}

/// Total quantity of items sold
///
/// GET /orders/total
pub async fn total_sale(State(state): State<AppState>) -> Result<Json<TotalQuantity>, ApiError> {
    let total = state
        .repository
        .total_quantity()
        .await
        .map_err(|e| ApiError::new(e, "server error"))?;

    Ok(Json(total))
}

/// Delete an invoice by id
///
/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .repository
        .delete_by_id(&id)
        .await
        .map_err(|e| ApiError::new(e, "An error occurred while deleting the order."))?;

    Ok(Json(MessageResponse {
        message: "order deleted successfully.",
    }))
}

/// Revenue per month
///
/// GET /orders/reports/monthly-revenue
pub async fn monthly_revenue(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyRevenue>>, ApiError> {
    let rows = state
        .repository
        .monthly_revenue()
        .await
        .map_err(|e| ApiError::new(e, "An error occurred while getting monthly revenue."))?;

    Ok(Json(rows))
}

/// Three best-selling products by quantity
///
/// GET /orders/reports/top-products
pub async fn top_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopProduct>>, ApiError> {
    let rows = state
        .repository
        .top_products()
        .await
        .map_err(|e| ApiError::new(e, "An error occurred while getting top products."))?;

    Ok(Json(rows))
}

/// Employees ranked by sales
///
/// GET /orders/reports/top-employees
pub async fn top_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<TopEmployee>>, ApiError> {
    let rows = state
        .repository
        .top_employees()
        .await
        .map_err(|e| ApiError::new(e, "An error occurred while getting top employees."))?;

    Ok(Json(rows))
}
