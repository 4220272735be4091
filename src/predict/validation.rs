use super::types::{UrlRequest, VoiceRequest};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MESSAGE_MAX_LEN: usize = 500;
pub const AUDIO_URL_MIN_LEN: usize = 5;

/// A single structural constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub constraint: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Structural validation of a request.
///
/// The primary audio field's presence is checked by `predict` itself, so
/// implementations only report the remaining presence and length bounds.
pub trait Validate {
    fn validate(&self) -> Vec<FieldError>;
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: Option<usize>,
) {
    let Some(value) = value else {
        errors.push(FieldError::new(field, "field required"));
        return;
    };

    let len = value.chars().count();
    if len < min {
        errors.push(FieldError::new(
            field,
            format!("must be at least {} characters", min),
        ));
    } else if let Some(max) = max.filter(|max| len > *max) {
        errors.push(FieldError::new(
            field,
            format!("must be at most {} characters", max),
        ));
    }
}

impl Validate for VoiceRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_length(&mut errors, "language", self.language.as_deref(), 1, None);
        check_length(
            &mut errors,
            "audioFormat",
            self.audio_format.as_deref(),
            1,
            None,
        );
        errors
    }
}

impl Validate for UrlRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_length(
            &mut errors,
            "message",
            self.message.as_deref(),
            1,
            Some(MESSAGE_MAX_LEN),
        );
        check_length(
            &mut errors,
            "audio_url",
            self.audio_url.as_deref(),
            AUDIO_URL_MIN_LEN,
            None,
        );
        errors
    }
}
