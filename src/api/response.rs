//! JSON envelopes shared by every API endpoint
//!
//! Success: `{"success": true, "data": ...}`
//! Failure: `{"success": false, "errors": {"<field>": "<message>"}}`

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::MSG_PAYLOAD_TOO_LARGE;
use crate::{AdvisorError, Result};

/// Key used for errors that are not tied to an input field
pub const GENERAL_FIELD: &str = "general";

#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    success: bool,
    data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn json(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

#[derive(Debug, Serialize)]
struct ApiFailure<'a> {
    success: bool,
    errors: &'a BTreeMap<String, String>,
}

/// Field-scoped validation messages, collected before responding
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    /// Record the error of `result` under `field`, if any.
    pub fn check<T>(&mut self, field: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.insert(field, err.user_message());
                None
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

/// Error response of an API handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    errors: FieldErrors,
}

impl ApiError {
    /// 400 with all collected field errors
    #[must_use]
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            errors,
        }
    }

    /// 413 for a body over the size limit
    #[must_use]
    pub fn payload_too_large() -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(GENERAL_FIELD, MSG_PAYLOAD_TOO_LARGE);
        Self {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            errors,
        }
    }

    /// Report a domain error under a specific field
    #[must_use]
    pub fn for_field(field: &str, err: &AdvisorError) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field, err.user_message());
        Self {
            status: err.status_code(),
            errors,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        Self::for_field(GENERAL_FIELD, &err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiFailure {
            success: false,
            errors: &self.errors.0,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_PROVIDER_EMPTY;

    #[test]
    fn test_field_errors_collect_all() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.check("a", Ok::<_, AdvisorError>(1)), Some(1));
        assert_eq!(errors.check::<f64>("b", Err(AdvisorError::invalid_number())), None);
        assert_eq!(errors.check::<f64>("c", Err(AdvisorError::invalid_number())), None);

        assert!(!errors.is_empty());
        assert_eq!(errors.get("a"), None);
        assert_eq!(errors.get("b"), Some("请输入有效的数字"));
        assert_eq!(errors.get("c"), Some("请输入有效的数字"));
    }

    #[test]
    fn test_domain_error_maps_to_general() {
        let err: ApiError = AdvisorError::provider_data_empty().into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.errors().get(GENERAL_FIELD), Some(MSG_PROVIDER_EMPTY));
    }

    #[test]
    fn test_failure_body_shape() {
        let mut errors = FieldErrors::new();
        errors.insert("weather", "请输入天气描述");
        let body = ApiFailure {
            success: false,
            errors: &errors.0,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"success": false, "errors": {"weather": "请输入天气描述"}})
        );
    }
}
