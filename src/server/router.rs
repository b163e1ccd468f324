//! Route table for invoice and report endpoints

use crate::server::handlers::{
    AppState, create_order, delete_order, list_orders, monthly_revenue, top_employees,
    top_products, total_sale,
};
use axum::{
    Json, Router,
    routing::{delete, get},
};
use serde_json::{Value, json};

/// Build the order routes
///
/// - POST   /orders                           - Create an invoice
/// - GET    /orders                           - List all invoices
/// - GET    /orders/total                     - Total quantity sold
/// - DELETE /orders/{id}                      - Delete an invoice
/// - GET    /orders/reports/monthly-revenue   - Revenue per month
/// - GET    /orders/reports/top-products      - Top 3 products by quantity
/// - GET    /orders/reports/top-employees     - Employees ranked by sales
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/total", get(total_sale))
        .route("/orders/{id}", delete(delete_order))
        .route("/orders/reports/monthly-revenue", get(monthly_revenue))
        .route("/orders/reports/top-products", get(top_products))
        .route("/orders/reports/top-employees", get(top_employees))
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "salesbook"
    }))
}
