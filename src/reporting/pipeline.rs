//! MongoDB aggregation pipelines for the sales reports
//!
//! Each builder is a pure function returning the pipeline stages, so the
//! stage structure can be tested without a running server. Field names are
//! the camelCase names invoices are stored with.

use mongodb::bson::{Document, doc};

/// `$unwind` items, then sum `items.quantity` into a single row
///
/// An empty collection yields no row at all; the caller substitutes zero.
pub fn total_quantity_pipeline() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$items" },
        doc! {
            "$group": {
                "_id": null,
                "totalQuantity": { "$sum": "$items.quantity" },
            }
        },
        doc! { "$project": { "_id": 0, "totalQuantity": 1 } },
    ]
}

/// Group by `(year, month)` of `createdAt`, label as `YYYY-MM`, sort ascending
pub fn monthly_revenue_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": {
                    "year": { "$year": "$createdAt" },
                    "month": { "$month": "$createdAt" },
                },
                "totalRevenue": { "$sum": "$totalAmount" },
                "totalInvoices": { "$sum": 1 },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "month": {
                    "$concat": [
                        { "$toString": "$_id.year" },
                        "-",
                        {
                            "$cond": [
                                { "$lt": ["$_id.month", 10] },
                                { "$concat": ["0", { "$toString": "$_id.month" }] },
                                { "$toString": "$_id.month" },
                            ]
                        },
                    ]
                },
                "totalRevenue": 1,
                "totalInvoices": 1,
            }
        },
        doc! { "$sort": { "month": 1 } },
    ]
}

/// `$unwind` items, group by `productId`, keep the `limit` largest quantities
pub fn top_products_pipeline(limit: usize) -> Vec<Document> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    vec![
        doc! { "$unwind": "$items" },
        doc! {
            "$group": {
                "_id": "$items.productId",
                "productName": { "$first": "$items.productName" },
                "totalQuantity": { "$sum": "$items.quantity" },
            }
        },
        doc! { "$sort": { "totalQuantity": -1 } },
        doc! { "$limit": limit },
        doc! {
            "$project": {
                "_id": 0,
                "productId": "$_id",
                "productName": 1,
                "totalQuantity": 1,
            }
        },
    ]
}

/// Sum `totalAmount` per `employeeId` and join `employees_collection`
///
/// `$unwind` without `preserveNullAndEmptyArrays` drops groups that matched
/// no employee record.
pub fn top_employees_pipeline(employees_collection: &str) -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$employeeId",
                "totalSales": { "$sum": "$totalAmount" },
            }
        },
        doc! {
            "$lookup": {
                "from": employees_collection,
                "localField": "_id",
                "foreignField": "employeeId",
                "as": "employeeDetails",
            }
        },
        doc! { "$unwind": "$employeeDetails" },
        doc! {
            "$project": {
                "_id": 0,
                "employeeId": "$_id",
                "totalSales": 1,
                "employeeName": "$employeeDetails.name",
            }
        },
        doc! { "$sort": { "totalSales": -1 } },
    ]
}
