use serde::{Deserialize, Serialize};

/// Inline audio request: the `voice` variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceRequest {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "audioFormat")]
    pub audio_format: Option<String>,
    #[serde(default, rename = "audioBase64")]
    pub audio_base64: Option<String>,
}

impl VoiceRequest {
    pub fn new(
        language: impl Into<String>,
        audio_format: impl Into<String>,
        audio_base64: impl Into<String>,
    ) -> Self {
        Self {
            language: Some(language.into()),
            audio_format: Some(audio_format.into()),
            audio_base64: Some(audio_base64.into()),
        }
    }
}

/// Remote audio request: the `url` variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

impl UrlRequest {
    pub fn new(message: impl Into<String>, audio_url: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            audio_url: Some(audio_url.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "AI-generated")]
    AiGenerated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub status: Status,
    pub prediction: Prediction,
    pub confidence: f64,
    pub language: String,
    pub note: String,
}
