//! REST integration test macro for invoice store backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! a store through the full router built by `ServerBuilder`:
//! JSON → HTTP request → handler → InvoiceRepository → InvoiceStore → JSON.
//!
//! # Generated Tests
//!
//! ## Invoices
//! - `test_rest_create`: POST 201, then GET lists it
//! - `test_rest_create_missing_field`: 400 per required field, nothing stored
//! - `test_rest_create_empty_items` / `test_rest_create_malformed_body`: 400
//! - `test_rest_delete`: 200, then 404 on repeat
//! - `test_rest_delete_unknown`: unknown and non-UUID ids → 404
//!
//! ## Reports
//! - `/orders/total`, `/orders/reports/monthly-revenue`,
//!   `/orders/reports/top-products`, `/orders/reports/top-employees`

/// Generate a REST integration test suite for a store backend
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:path) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use salesbook::server::ServerBuilder;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $factory(directory()).await;
                let router = ServerBuilder::new()
                    .with_store(store)
                    .build()
                    .unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn post_order(server: &TestServer, body: &Value) -> Value {
                let response = server.post("/orders").json(body).await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["order"].clone()
            }

            // ==============================================================
            // Health
            // ==============================================================

            #[tokio::test]
            async fn test_rest_health() {
                let server = make_server().await;
                let response = server.get("/health").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>()["status"], "ok");
            }

            // ==============================================================
            // Create / list
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&create_body("HD001", "2024-01-15T08:30:00Z", "E1", 40.0))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["message"], "Invoice created successfully.");

                let order = &body["order"];
                assert_eq!(order["invoiceCode"], "HD001");
                assert_eq!(order["employeeId"], "E1");
                assert_eq!(order["items"][0]["productId"], "P1");
                assert_eq!(order["items"][0]["quantity"], 2);
                assert_eq!(order["totalAmount"], 40.0);
                uuid::Uuid::parse_str(order["id"].as_str().unwrap()).unwrap();

                let listed: Value = server.get("/orders").await.json();
                let listed = listed.as_array().unwrap();
                assert_eq!(listed.len(), 1);
                assert_eq!(listed[0]["id"], order["id"]);
                assert_eq!(listed[0]["invoiceCode"], "HD001");
            }

            #[tokio::test]
            async fn test_rest_create_created_at_forms() {
                let server = make_server().await;
                let cases = [
                    (json!("2024-01-15T08:30:00.000Z"), "2024-01-15T08:30:00Z"),
                    (json!("2024-01-15T08:30:00"), "2024-01-15T08:30:00Z"),
                    (json!("2024-01-15"), "2024-01-15T00:00:00Z"),
                    (json!(1705307400000_i64), "2024-01-15T08:30:00Z"),
                ];

                for (index, (created_at, expected)) in cases.into_iter().enumerate() {
                    let mut body = create_body(&format!("HD-TS{index}"), "unused", "E1", 10.0);
                    body["createdAt"] = created_at.clone();

                    let response = server.post("/orders").json(&body).await;
                    response.assert_status(StatusCode::CREATED);

                    let order = &response.json::<Value>()["order"];
                    let stored: chrono::DateTime<chrono::Utc> =
                        order["createdAt"].as_str().unwrap().parse().unwrap();
                    let expected: chrono::DateTime<chrono::Utc> = expected.parse().unwrap();
                    assert_eq!(stored, expected, "createdAt {created_at}");
                }

                let response = server
                    .post("/orders")
                    .json(&create_body("HD-TS-BAD", "not a date", "E1", 10.0))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_rest_absent_optional_fields_omitted() {
                let server = make_server().await;
                let order = post_order(
                    &server,
                    &create_body_with_items(
                        "HD-OPT",
                        json!([{ "productId": "P1", "productName": "Coffee", "quantity": 1 }]),
                    ),
                )
                .await;

                for field in ["totalAmount", "paymentMethod", "customerPaid", "change"] {
                    assert!(order.get(field).is_none(), "{field} should be omitted");
                }
                assert!(order["items"][0].get("price").is_none());

                let listed: Value = server.get("/orders").await.json();
                assert!(listed[0].get("paymentMethod").is_none());
            }

            #[tokio::test]
            async fn test_rest_list_empty() {
                let server = make_server().await;
                let response = server.get("/orders").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>(), json!([]));
            }

            #[tokio::test]
            async fn test_rest_create_missing_field() {
                let server = make_server().await;

                for field in ["invoiceCode", "createdAt", "employeeId", "employeeName", "items"] {
                    let mut body = create_body("HD002", "2024-01-15T08:30:00Z", "E1", 10.0);
                    body.as_object_mut().unwrap().remove(field);

                    let response = server.post("/orders").json(&body).await;
                    response.assert_status(StatusCode::BAD_REQUEST);

                    let error: Value = response.json();
                    assert_eq!(error["code"], "VALIDATION_ERROR");
                    assert_eq!(error["fields"][0]["field"], field, "missing {field}");
                }

                let listed: Value = server.get("/orders").await.json();
                assert_eq!(listed, json!([]), "rejected requests must not be stored");
            }

            #[tokio::test]
            async fn test_rest_create_empty_items() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&create_body_with_items("HD003", json!([])))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let error: Value = response.json();
                assert_eq!(error["fields"][0]["field"], "items");
            }

            #[tokio::test]
            async fn test_rest_create_malformed_body() {
                let server = make_server().await;

                let response = server.post("/orders").text("{ not json").await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let response = server
                    .post("/orders")
                    .json(&create_body_with_items(
                        "HD004",
                        json!([{ "productId": "P1", "productName": "Coffee", "quantity": -1 }]),
                    ))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
            }

            // ==============================================================
            // Delete
            // ==============================================================

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let order = post_order(
                    &server,
                    &create_body("HD005", "2024-01-15T08:30:00Z", "E1", 10.0),
                )
                .await;
                let id = order["id"].as_str().unwrap();

                let response = server.delete(&format!("/orders/{id}")).await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>()["message"],
                    "order deleted successfully."
                );

                let listed: Value = server.get("/orders").await.json();
                assert_eq!(listed, json!([]));

                let response = server.delete(&format!("/orders/{id}")).await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["message"], "order not found.");
            }

            #[tokio::test]
            async fn test_rest_delete_unknown() {
                let server = make_server().await;

                let response = server
                    .delete(&format!("/orders/{}", uuid::Uuid::new_v4()))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);

                let response = server.delete("/orders/not-a-uuid").await;
                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(response.json::<Value>()["code"], "ORDER_NOT_FOUND");
            }

            // ==============================================================
            // Reports
            // ==============================================================

            #[tokio::test]
            async fn test_rest_total() {
                let server = make_server().await;

                let response = server.get("/orders/total").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>(), json!({ "totalQuantity": 0 }));

                post_order(
                    &server,
                    &create_body_with_items(
                        "HD006",
                        json!([
                            { "productId": "P1", "productName": "Coffee", "quantity": 2 },
                            { "productId": "P2", "productName": "Tea", "quantity": 3 }
                        ]),
                    ),
                )
                .await;
                post_order(
                    &server,
                    &create_body_with_items(
                        "HD007",
                        json!([{ "productId": "P1", "productName": "Coffee", "quantity": 5 }]),
                    ),
                )
                .await;

                let total: Value = server.get("/orders/total").await.json();
                assert_eq!(total["totalQuantity"], 10);
            }

            #[tokio::test]
            async fn test_rest_monthly_revenue() {
                let server = make_server().await;
                post_order(&server, &create_body("HD008", "2024-01-05T09:00:00Z", "E1", 100.0)).await;
                post_order(&server, &create_body("HD009", "2024-01-20T18:00:00Z", "E2", 50.0)).await;
                post_order(&server, &create_body("HD010", "2024-02-10T09:00:00Z", "E1", 70.0)).await;

                let response = server.get("/orders/reports/monthly-revenue").await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>(),
                    json!([
                        { "month": "2024-01", "totalRevenue": 150.0, "totalInvoices": 2 },
                        { "month": "2024-02", "totalRevenue": 70.0, "totalInvoices": 1 }
                    ])
                );
            }

            #[tokio::test]
            async fn test_rest_top_products() {
                let server = make_server().await;
                post_order(
                    &server,
                    &create_body_with_items(
                        "HD011",
                        json!([
                            { "productId": "A", "productName": "Americano", "quantity": 10 },
                            { "productId": "B", "productName": "Bagel", "quantity": 7 }
                        ]),
                    ),
                )
                .await;
                post_order(
                    &server,
                    &create_body_with_items(
                        "HD012",
                        json!([
                            { "productId": "C", "productName": "Cake", "quantity": 5 },
                            { "productId": "D", "productName": "Donut", "quantity": 1 }
                        ]),
                    ),
                )
                .await;

                let rows: Value = server.get("/orders/reports/top-products").await.json();
                let ids: Vec<&str> = rows
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|r| r["productId"].as_str().unwrap())
                    .collect();
                assert_eq!(ids, vec!["A", "B", "C"]);
                assert_eq!(rows[0]["totalQuantity"], 10);
                assert_eq!(rows[0]["productName"], "Americano");
            }

            #[tokio::test]
            async fn test_rest_top_employees() {
                let server = make_server().await;
                post_order(&server, &create_body("HD013", "2024-01-05T09:00:00Z", "E1", 100.0)).await;
                post_order(&server, &create_body("HD014", "2024-01-06T09:00:00Z", "E2", 30.0)).await;
                post_order(&server, &create_body("HD015", "2024-01-07T09:00:00Z", "E9", 500.0)).await;

                let response = server.get("/orders/reports/top-employees").await;
                response.assert_status_ok();
                assert_eq!(
                    response.json::<Value>(),
                    json!([
                        { "employeeId": "E1", "employeeName": "Lan", "totalSales": 100.0 },
                        { "employeeId": "E2", "employeeName": "Minh", "totalSales": 30.0 }
                    ])
                );
            }
        }
    };
}
