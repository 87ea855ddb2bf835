//! Response assembly.
//!
//! Pure functions shaping repository results into the JSON envelope
//! contract:
//!
//! ```text
//! { "success": true,  "data": ... }                      detail operations
//! { "success": true,  "data": [...], "count": n }        surah list
//! { "success": true,  "data": [...], "pagination": {..} } verse list
//! { "success": false, "error": "...", "details": "..." }  failures
//! ```
//!
//! `details` appears only when the validator produced field-level reasons.
//! Pagination metadata echoes the validated query (`page`, `limit`) plus
//! the filtered total and `totalPages = ceil(total / limit)`.

use serde::Serialize;
use serde_json::{Value, json};

/// Pagination metadata for the verse list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Derive the page count from the filtered total. An empty result set
    /// has zero pages.
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        // `i64::div_ceil` is still unstable (`int_roundings`); this is the
        // same rounding-toward-positive-infinity division.
        let limit_i64 = i64::from(limit);
        let quotient = total / limit_i64;
        let remainder = total % limit_i64;
        let total_pages = if (remainder > 0 && limit_i64 > 0) || (remainder < 0 && limit_i64 < 0) {
            quotient + 1
        } else {
            quotient
        };
        Pagination {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// `{ success: true, data }`.
pub fn success<T: Serialize>(data: &T) -> Value {
    json!({ "success": true, "data": data })
}

/// `{ success: true, data, count }` with `count` equal to the result size.
pub fn success_with_count<T: Serialize>(data: &[T]) -> Value {
    json!({ "success": true, "data": data, "count": data.len() })
}

/// `{ success: true, data, pagination }`.
pub fn success_with_pagination<T: Serialize>(data: &[T], pagination: Pagination) -> Value {
    json!({ "success": true, "data": data, "pagination": pagination })
}

/// `{ success: false, error }`.
pub fn failure(error: &str) -> Value {
    json!({ "success": false, "error": error })
}

/// `{ success: false, error, details }`.
pub fn failure_with_details(error: &str, details: &str) -> Value {
    json!({ "success": false, "error": error, "details": details })
}
