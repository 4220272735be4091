mod policy;
mod types;
mod validation;

pub use policy::{PlaceholderPolicy, URL_POLICY, VOICE_POLICY};
pub use types::*;
pub use validation::{AUDIO_URL_MIN_LEN, FieldError, MESSAGE_MAX_LEN, Validate};

use crate::{Error, Result};
use tracing::debug;

const URL_LANGUAGE: &str = "English";

/// A request shape that `predict` can classify.
pub trait PredictionRequest: Validate {
    /// Wire name of the field carrying the audio.
    fn primary_field(&self) -> &'static str;

    fn primary_audio(&self) -> Option<&str>;

    fn policy(&self) -> &'static PlaceholderPolicy;

    fn response_language(&self) -> String;

    /// Extra checks on the primary field, run after structural validation.
    fn check_primary(&self, _audio: &str) -> Result<()> {
        Ok(())
    }
}

impl PredictionRequest for VoiceRequest {
    fn primary_field(&self) -> &'static str {
        "audioBase64"
    }

    fn primary_audio(&self) -> Option<&str> {
        self.audio_base64.as_deref()
    }

    fn policy(&self) -> &'static PlaceholderPolicy {
        &VOICE_POLICY
    }

    fn response_language(&self) -> String {
        self.language.clone().unwrap_or_default()
    }
}

impl PredictionRequest for UrlRequest {
    fn primary_field(&self) -> &'static str {
        "audio_url"
    }

    fn primary_audio(&self) -> Option<&str> {
        self.audio_url.as_deref()
    }

    fn policy(&self) -> &'static PlaceholderPolicy {
        &URL_POLICY
    }

    fn response_language(&self) -> String {
        URL_LANGUAGE.to_string()
    }

    fn check_primary(&self, audio: &str) -> Result<()> {
        // The URL is only inspected, never fetched.
        if audio.starts_with("http://") || audio.starts_with("https://") {
            Ok(())
        } else {
            Err(Error::bad_request("audio_url must be a valid HTTP/HTTPS URL"))
        }
    }
}

/// Validates `request` and produces the placeholder classification.
///
/// Checks run in order and the first failure is returned: primary field
/// presence, structural validation, then variant-specific primary checks.
pub fn predict<R: PredictionRequest>(request: &R) -> Result<PredictionResponse> {
    let field = request.primary_field();
    let audio = match request.primary_audio() {
        Some(audio) if !audio.trim().is_empty() => audio,
        _ => {
            return Err(Error::bad_request(format!(
                "{} is required and cannot be empty",
                field
            )));
        }
    };

    let errors = request.validate();
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    request.check_primary(audio)?;

    let policy = request.policy();
    let (prediction, confidence) = policy.classify(audio);
    debug!(
        "Classified {} of {} chars as {:?} ({})",
        field,
        audio.chars().count(),
        prediction,
        confidence
    );

    Ok(PredictionResponse {
        status: Status::Success,
        prediction,
        confidence,
        language: request.response_language(),
        note: policy.note.to_string(),
    })
}
