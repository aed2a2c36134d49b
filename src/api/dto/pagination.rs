//! Pagination query parameters.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Default page when none is requested.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when none is requested.
pub const DEFAULT_LIMIT: i64 = 10;

/// Integer input that also accepts numeric strings.
///
/// Query strings carry every value as text, and JSON clients often send
/// `"2"` instead of `2`. Integral floats such as `2.0` count as integers.
/// Anything that does not read as an integer is kept in
/// [`IntegerInput::Invalid`] so validation can report it against the field
/// name instead of failing deserialization as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Valid(i64),
    Invalid(String),
}

impl IntegerInput {
    pub fn value(&self) -> Option<i64> {
        match self {
            IntegerInput::Valid(v) => Some(*v),
            IntegerInput::Invalid(_) => None,
        }
    }
}

/// Reads an `f64` as `i64` when it has no fractional part and fits.
fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64)
        .then_some(f as i64)
}

impl<'de> Deserialize<'de> for IntegerInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Number(n) => match n.as_i64().or_else(|| n.as_f64().and_then(integral)) {
                Some(v) => IntegerInput::Valid(v),
                None => IntegerInput::Invalid(n.to_string()),
            },
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
                {
                    Some(v) => IntegerInput::Valid(v),
                    None => IntegerInput::Invalid(s),
                }
            }
            other => IntegerInput::Invalid(other.to_string()),
        })
    }
}

/// Page/limit pair accepted by list endpoints, in the body or the query.
///
/// Both fields are optional integers. Values below 1 are accepted and clamped
/// when resolved.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaginationRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_integer"))]
    pub page: Option<IntegerInput>,

    #[serde(default)]
    #[validate(custom(function = "validate_integer"))]
    pub limit: Option<IntegerInput>,
}

impl PaginationRequest {
    /// Resolved `(page, limit)`, falling back to the defaults.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    ///
    /// Both are raised to at least 1.
    pub fn page_and_limit(&self) -> (i64, i64) {
        let page = self
            .page
            .as_ref()
            .and_then(IntegerInput::value)
            .unwrap_or(DEFAULT_PAGE);
        let limit = self
            .limit
            .as_ref()
            .and_then(IntegerInput::value)
            .unwrap_or(DEFAULT_LIMIT);
        (page.max(1), limit.max(1))
    }

    /// `(offset, limit)` tuple for SQL queries.
    pub fn offset_and_limit(&self) -> (i64, i64) {
        let (page, limit) = self.page_and_limit();
        ((page - 1).saturating_mul(limit), limit)
    }
}

fn validate_integer(input: &IntegerInput) -> Result<(), ValidationError> {
    match input {
        IntegerInput::Invalid(_) => {
            Err(ValidationError::new("integer").with_message("must be an integer".into()))
        }
        IntegerInput::Valid(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn parse(json: &str) -> PaginationRequest {
        serde_json::from_str(json).unwrap()
    }

    fn validation_message(request: &PaginationRequest) -> String {
        let errors = request.validate().unwrap_err();
        AppError::from_validation::<PaginationRequest>(&errors).resolve().1
    }

    #[test]
    fn test_defaults() {
        let request = parse("{}");
        assert!(request.validate().is_ok());
        assert_eq!(request.page_and_limit(), (1, 10));
        assert_eq!(request.offset_and_limit(), (0, 10));
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let request = parse(r#"{"page": "3", "limit": 25}"#);
        assert!(request.validate().is_ok());
        assert_eq!(request.page_and_limit(), (3, 25));
        assert_eq!(request.offset_and_limit(), (50, 25));
    }

    #[test]
    fn test_integral_floats_are_integers() {
        let request = parse(r#"{"page": 2.0, "limit": "5.0"}"#);
        assert!(request.validate().is_ok());
        assert_eq!(request.page_and_limit(), (2, 5));
    }

    #[test]
    fn test_null_is_absent() {
        let request = parse(r#"{"page": null}"#);
        assert!(request.validate().is_ok());
        assert_eq!(request.page_and_limit(), (1, 10));
    }

    #[test]
    fn test_zero_and_negative_are_clamped() {
        let request = parse(r#"{"page": 0, "limit": -5}"#);
        assert!(request.validate().is_ok());
        assert_eq!(request.page_and_limit(), (1, 1));
        assert_eq!(request.offset_and_limit(), (0, 1));
    }

    #[test]
    fn test_non_integer_page() {
        let request = parse(r#"{"page": "abc"}"#);
        assert_eq!(validation_message(&request), "page: must be an integer");
    }

    #[test]
    fn test_fractional_and_boolean_values_are_rejected() {
        assert_eq!(
            validation_message(&parse(r#"{"limit": 2.5}"#)),
            "limit: must be an integer"
        );
        assert_eq!(
            validation_message(&parse(r#"{"limit": true}"#)),
            "limit: must be an integer"
        );
    }

    #[test]
    fn test_both_fields_invalid_in_declaration_order() {
        let request = parse(r#"{"limit": "y", "page": "x"}"#);
        assert_eq!(
            validation_message(&request),
            "page: must be an integer; limit: must be an integer"
        );
    }

    #[test]
    fn test_string_encoded_values() {
        let request: PaginationRequest = serde_json::from_value(serde_json::json!({
            "page": "2",
            "limit": "5"
        }))
        .unwrap();
        assert_eq!(request.offset_and_limit(), (5, 5));
    }

    #[test]
    fn test_serializes_as_raw_value() {
        assert_eq!(serde_json::to_value(IntegerInput::Valid(3)).unwrap(), 3);
        assert_eq!(
            serde_json::to_value(IntegerInput::Invalid("abc".into())).unwrap(),
            "abc"
        );
    }
}
