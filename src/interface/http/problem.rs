use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::{application::dto::FieldViolation, domain::errors::DomainError};

pub type ApiResult<T> = Result<T, ApiProblem>;

/// RFC-7807 problem response carrying the translated domain error.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    title: &'static str,
    detail: String,
    kind: &'static str,
    violations: Vec<FieldViolation>,
    correlation_id: String,
}

impl ApiProblem {
    pub fn from_domain(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(detail) => Self::new(
                StatusCode::NOT_FOUND,
                "Not found",
                "https://addressbook.dev/problems/not-found",
                detail,
            ),
            DomainError::InvalidArgument(detail) => Self::new(
                StatusCode::BAD_REQUEST,
                "Invalid argument",
                "https://addressbook.dev/problems/invalid-argument",
                detail,
            ),
            DomainError::Storage(detail) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Storage error",
                "https://addressbook.dev/problems/storage",
                detail,
            ),
        }
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let mut problem = Self::new(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            "https://addressbook.dev/problems/validation",
            "request body failed validation",
        );
        problem.violations = violations;
        problem
    }

    fn new(
        status: StatusCode,
        title: &'static str,
        kind: &'static str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title,
            detail: detail.into(),
            kind,
            violations: Vec::new(),
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    status: u16,
    detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<FieldViolation>,
    correlation_id: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        let payload = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            violations: self.violations,
            correlation_id: self.correlation_id,
        };

        let mut response = (self.status, Json(payload)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );

        response
    }
}
