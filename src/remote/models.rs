//! Wire models for the remote PII detection service

use crate::detection::models::{MatchSource, PiiCategory, PiiMatch};
use serde::{Deserialize, Serialize};

/// Response body of `POST /detect_pii`
///
/// The same shape is embedded as `piiDetection` in voice-processing
/// responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDetection {
    #[serde(default)]
    pub has_redactions: bool,

    #[serde(default)]
    pub redacted_content: String,

    /// Category labels reported by the service (NER-style)
    #[serde(default)]
    pub detected_fields: Vec<String>,

    #[serde(default)]
    pub detection_details: Vec<RemoteDetectionDetail>,
}

/// One detection reported by the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteDetectionDetail {
    /// Category label (e.g. "PHONE", "NAME", "LOCATION")
    #[serde(rename = "type")]
    pub kind: String,

    /// The matched text as the service saw it
    pub original: String,

    /// Service-side confidence in [0, 1]
    pub confidence: f32,

    /// [start, end) byte offsets into the submitted text
    pub position: [usize; 2],
}

/// Response body of `POST /api/process_voice`
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceDetection {
    /// Transcript produced by the service's speech-to-text stage
    #[serde(rename = "transcribed_text", alias = "transcription")]
    pub transcribed_text: String,

    /// Detection payload for the transcript, when the service ran one
    #[serde(rename = "piiDetection", default)]
    pub pii_detection: Option<RemoteDetection>,
}

impl RemoteDetection {
    /// Convert the payload into engine matches against `original_text`.
    ///
    /// Details are validated individually: labels with no engine category
    /// and positions that fall outside the text (or off char boundaries)
    /// are dropped with a warning rather than failing the whole payload.
    /// The match text is re-sliced from the original text; the service's
    /// `original` field is advisory.
    pub fn to_matches(&self, original_text: &str) -> Vec<PiiMatch> {
        self.detection_details
            .iter()
            .filter_map(|detail| {
                let Some(category) = PiiCategory::parse_label(&detail.kind) else {
                    tracing::warn!(
                        kind = %detail.kind,
                        "Dropping remote detection with unmapped category label"
                    );
                    return None;
                };

                let [start, end] = detail.position;
                if start >= end
                    || end > original_text.len()
                    || !original_text.is_char_boundary(start)
                    || !original_text.is_char_boundary(end)
                {
                    tracing::warn!(
                        start,
                        end,
                        text_len = original_text.len(),
                        "Dropping remote detection with invalid span"
                    );
                    return None;
                }

                Some(PiiMatch::new(
                    category,
                    &original_text[start..end],
                    start,
                    end,
                    detail.confidence,
                    MatchSource::Remote,
                ))
            })
            .collect()
    }
}
