//! Request schema and required-field validation for invoice creation

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::invoice::{Invoice, LineItem};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /orders`
///
/// Required fields are modelled as `Option` so that absence is reported as
/// a validation error listing every missing field, instead of a generic
/// deserialization failure on the first one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateInvoiceRequest {
    #[validate(required, length(min = 1))]
    pub invoice_code: Option<String>,

    #[validate(required)]
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[validate(required, length(min = 1))]
    pub employee_id: Option<String>,

    #[validate(required, length(min = 1))]
    pub employee_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub items: Option<Vec<LineItem>>,

    pub total_amount: Option<f64>,
    pub payment_method: Option<String>,
    pub customer_paid: Option<f64>,
    pub change: Option<f64>,
}

impl CreateInvoiceRequest {
    /// Check required fields and build the invoice to persist
    pub fn into_invoice(self, id: Uuid) -> Result<Invoice, ValidationError> {
        if let Err(errors) = self.validate() {
            return Err(missing_fields(&errors));
        }

        match self {
            CreateInvoiceRequest {
                invoice_code: Some(invoice_code),
                created_at: Some(created_at),
                employee_id: Some(employee_id),
                employee_name: Some(employee_name),
                items: Some(items),
                total_amount,
                payment_method,
                customer_paid,
                change,
            } => Ok(Invoice {
                id,
                invoice_code,
                created_at,
                employee_id,
                employee_name,
                items,
                total_amount,
                payment_method,
                customer_paid,
                change,
            }),
            // validate() already rejected every absent field
            _ => Err(ValidationError::MissingFields(Vec::new())),
        }
    }
}

/// A `createdAt` value as clients send it
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    EpochMillis(i64),
    Text(String),
}

/// Accept RFC 3339, `YYYY-MM-DD` (UTC midnight), an offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC) or integer epoch milliseconds
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let Some(raw) = Option::<RawTimestamp>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let parsed = match raw {
        RawTimestamp::EpochMillis(millis) => DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| D::Error::custom(format!("timestamp {millis} is out of range")))?,
        RawTimestamp::Text(text) => parse_timestamp(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{text}'")))?,
    };

    Ok(Some(parsed))
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn missing_fields(errors: &validator::ValidationErrors) -> ValidationError {
    let mut fields: Vec<FieldValidationError> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| FieldValidationError {
            field: camel_case(field),
            message: errs
                .first()
                .map(|e| match &*e.code {
                    "length" => "must not be empty".to_string(),
                    code => code.to_string(),
                })
                .unwrap_or_else(|| "invalid".to_string()),
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    ValidationError::MissingFields(fields)
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
