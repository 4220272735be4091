use super::types::Prediction;

/// Fixed stand-in for model inference: the label depends only on whether the
/// sample's character count is even or odd.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderPolicy {
    pub even_confidence: f64,
    pub odd_confidence: f64,
    pub note: &'static str,
}

pub const VOICE_POLICY: PlaceholderPolicy = PlaceholderPolicy {
    even_confidence: 0.85,
    odd_confidence: 0.82,
    note: "Endpoint validated successfully",
};

pub const URL_POLICY: PlaceholderPolicy = PlaceholderPolicy {
    even_confidence: 0.75,
    odd_confidence: 0.82,
    note: "This is a dummy prediction. Real ML model not yet implemented.",
};

impl PlaceholderPolicy {
    pub fn classify(&self, sample: &str) -> (Prediction, f64) {
        if sample.chars().count() % 2 == 0 {
            (Prediction::AiGenerated, self.even_confidence)
        } else {
            (Prediction::Human, self.odd_confidence)
        }
    }
}
