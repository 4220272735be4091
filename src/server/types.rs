use crate::predict::{FieldError, Status};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "AI Voice Detection API";
pub const API_VERSION: &str = "1.0.0";
pub const DOCS_PATH: &str = "/docs";
pub const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            detail: detail.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(detail: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            errors,
            ..Self::new(detail)
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR_DETAIL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub docs: String,
    pub version: String,
}
