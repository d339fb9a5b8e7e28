//! Request validation for `POST /api/generate-response`.
//!
//! Fields are checked in a fixed order and the first failure is reported.
//! "Missing" covers absent, `null`, `false`, `0` and empty strings; the name
//! and review are also missing when they are only whitespace.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::review::ReviewRequest;

pub const REQUIRED_FIELDS: [&str; 4] = ["businessName", "businessType", "reviewText", "rating"];

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

/// Validates a raw JSON body into a `ReviewRequest`.
pub fn validate_review_request(body: &Value) -> Result<ReviewRequest, AppError> {
    let fields = body.as_object().ok_or_else(|| {
        AppError::Validation("Request body must be a JSON object".to_string())
    })?;

    for field in REQUIRED_FIELDS {
        if fields.get(field).map_or(true, is_blank) {
            return Err(missing(field));
        }
    }

    let business_name = required_text(fields, "businessName", true)?;
    let business_type = required_text(fields, "businessType", false)?;
    let review_text = required_text(fields, "reviewText", true)?;
    let rating = coerce_rating(&fields["rating"])?;

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    Ok(ReviewRequest {
        business_name,
        business_type,
        review_text,
        // In range per the check above.
        rating: rating as u8,
    })
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("Missing required field: {field}"))
}

/// True for values a client would consider "not filled in".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn required_text(fields: &Map<String, Value>, field: &str, trim: bool) -> Result<String, AppError> {
    let text = fields[field]
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("Field must be a string: {field}")))?;
    let text = if trim { text.trim() } else { text };
    if text.is_empty() {
        return Err(missing(field));
    }
    Ok(text.to_string())
}

/// Coerces a rating to an integer. Floats truncate toward zero; strings must
/// hold a whole number.
fn coerce_rating(value: &Value) -> Result<i64, AppError> {
    let not_whole = || AppError::Validation("Rating must be a whole number".to_string());

    match value {
        Value::Bool(true) => Ok(1),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
                    .ok_or_else(not_whole)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| not_whole()),
        _ => Err(not_whole()),
    }
}
