//! Structured-output contract between the advisory flows and the service.
//!
//! Every decoder here is total: whatever text the service returns, the caller
//! gets a displayable value. Decode failures are logged and replaced by the
//! named fallback values below, never propagated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Reasoning used when the advice response omits it or cannot be decoded.
pub const FALLBACK_REASONING: &str = "Based on standard agricultural practices.";

/// Confidence used when the advice response omits it or cannot be decoded.
pub const FALLBACK_ADVICE_CONFIDENCE: i64 = 85;

/// Diagnosis used when a pest scan response cannot be decoded.
pub const FALLBACK_DIAGNOSIS: &str = "Unknown";

/// Treatment used when a pest scan response cannot be decoded.
pub const FALLBACK_TREATMENT: &str = "Unable to process";

/// Confidence used when a pest scan response cannot be decoded.
pub const FALLBACK_PEST_CONFIDENCE: f64 = 0.0;

/// Outcome of a conversational advice request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResult {
    /// The advice itself.
    pub advice: String,
    /// Why the advisor gave this advice.
    pub reasoning: String,
    /// Whole-number confidence percentage. Not clamped.
    pub confidence: i64,
}

impl AdviceResult {
    /// The degraded result built from the raw response text.
    pub fn fallback(raw: &str) -> Self {
        Self {
            advice: raw.to_string(),
            reasoning: FALLBACK_REASONING.to_string(),
            confidence: FALLBACK_ADVICE_CONFIDENCE,
        }
    }

    /// Decode raw service output.
    ///
    /// A JSON object with a string `advice` decodes; a missing or blank
    /// `reasoning` and a missing or non-numeric `confidence` take their
    /// fallback values. Anything else yields [`AdviceResult::fallback`].
    pub fn decode(raw: &str) -> Self {
        let Some(object) = parse_object(raw) else {
            warn!(bytes = raw.len(), "Advice response is not a JSON object, using fallback");
            return Self::fallback(raw);
        };

        let Some(advice) = object.get("advice").and_then(Value::as_str) else {
            warn!("Advice response has no advice field, using fallback");
            return Self::fallback(raw);
        };

        let reasoning = object
            .get("reasoning")
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(FALLBACK_REASONING)
            .to_string();

        let confidence = object
            .get("confidence")
            .and_then(whole_number)
            .unwrap_or(FALLBACK_ADVICE_CONFIDENCE);

        debug!(confidence, "Decoded advice response");

        Self {
            advice: advice.to_string(),
            reasoning,
            confidence,
        }
    }

    /// Whether the confidence lies within 0..=100.
    pub fn confidence_in_range(&self) -> bool {
        (0..=100).contains(&self.confidence)
    }

    /// Fill level of a confidence meter, clamped to 0.0..=1.0.
    pub fn meter_fraction(&self) -> f64 {
        meter_fraction(self.confidence as f64)
    }
}

/// Outcome of a crop research lookup. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropResearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pests: Option<String>,
    #[serde(rename = "yield", default, skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<String>,
}

impl CropResearchResult {
    /// Decode raw service output.
    ///
    /// There is no fallback object: unparseable output yields the all-absent
    /// result. Non-string scalars are rendered as text.
    pub fn decode(raw: &str) -> Self {
        let Some(object) = parse_object(raw) else {
            warn!(bytes = raw.len(), "Crop research response is not a JSON object");
            return Self::default();
        };

        Self {
            climate: scalar_text(object.get("climate")),
            soil: scalar_text(object.get("soil")),
            pests: scalar_text(object.get("pests")),
            expected_yield: scalar_text(object.get("yield")),
        }
    }

    /// True when no field was returned.
    pub fn is_empty(&self) -> bool {
        self.climate.is_none()
            && self.soil.is_none()
            && self.pests.is_none()
            && self.expected_yield.is_none()
    }
}

/// Outcome of a pest or disease image scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestDiagnosis {
    pub diagnosis: String,
    pub treatment: String,
    /// Confidence percentage as returned. Not clamped.
    pub confidence: f64,
}

impl PestDiagnosis {
    /// The degraded result for an undecodable scan.
    pub fn fallback() -> Self {
        Self {
            diagnosis: FALLBACK_DIAGNOSIS.to_string(),
            treatment: FALLBACK_TREATMENT.to_string(),
            confidence: FALLBACK_PEST_CONFIDENCE,
        }
    }

    /// Decode raw service output.
    ///
    /// All three fields are required; a missing or mistyped field is a
    /// decode failure and yields [`PestDiagnosis::fallback`].
    pub fn decode(raw: &str) -> Self {
        let decoded = parse_object(raw).and_then(|object| {
            Some(Self {
                diagnosis: object.get("diagnosis")?.as_str()?.to_string(),
                treatment: object.get("treatment")?.as_str()?.to_string(),
                confidence: object.get("confidence")?.as_f64()?,
            })
        });

        decoded.unwrap_or_else(|| {
            warn!(bytes = raw.len(), "Pest diagnosis response failed to decode, using fallback");
            Self::fallback()
        })
    }

    /// Whether this is the decode-failure fallback.
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Whether the confidence lies within 0..=100.
    pub fn confidence_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.confidence)
    }

    /// Fill level of a confidence meter, clamped to 0.0..=1.0.
    pub fn meter_fraction(&self) -> f64 {
        meter_fraction(self.confidence)
    }
}

fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    if raw.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => Some(object),
        Ok(_) => None,
        Err(err) => {
            debug!("Response is not JSON: {}", err);
            None
        }
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|number| number.round() as i64))
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn meter_fraction(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    (confidence / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALFORMED: &[&str] = &[
        "",
        "   ",
        "Panda mahindi mapema msimu wa mvua.",
        "{\"advice\": \"truncated",
        "[1, 2, 3]",
        "42",
        "```json\n{\"advice\":\"x\"}\n```",
    ];

    #[test]
    fn test_advice_fallback_for_malformed_text() {
        for raw in MALFORMED {
            let result = AdviceResult::decode(raw);
            assert_eq!(
                result,
                AdviceResult {
                    advice: raw.to_string(),
                    reasoning: "Based on standard agricultural practices.".to_string(),
                    confidence: 85,
                },
                "input: {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_advice_valid_json_unchanged() {
        let raw = r#"{"advice":"Tumia DAP wakati wa kupanda","reasoning":"Fosforasi husaidia mizizi","confidence":92}"#;
        let result = AdviceResult::decode(raw);

        assert_eq!(result.advice, "Tumia DAP wakati wa kupanda");
        assert_eq!(result.reasoning, "Fosforasi husaidia mizizi");
        assert_eq!(result.confidence, 92);
    }

    #[test]
    fn test_advice_out_of_range_confidence_passes_through() {
        let result = AdviceResult::decode(r#"{"advice":"a","reasoning":"b","confidence":140}"#);
        assert_eq!(result.confidence, 140);
        assert!(!result.confidence_in_range());
        assert_eq!(result.meter_fraction(), 1.0);

        let result = AdviceResult::decode(r#"{"advice":"a","reasoning":"b","confidence":-3}"#);
        assert_eq!(result.confidence, -3);
        assert_eq!(result.meter_fraction(), 0.0);
    }

    #[test]
    fn test_advice_partial_object_fills_defaults() {
        let result = AdviceResult::decode(r#"{"advice":"Mwagilia asubuhi"}"#);
        assert_eq!(result.advice, "Mwagilia asubuhi");
        assert_eq!(result.reasoning, FALLBACK_REASONING);
        assert_eq!(result.confidence, FALLBACK_ADVICE_CONFIDENCE);

        let result = AdviceResult::decode(r#"{"advice":"a","reasoning":"  ","confidence":"high"}"#);
        assert_eq!(result.reasoning, FALLBACK_REASONING);
        assert_eq!(result.confidence, FALLBACK_ADVICE_CONFIDENCE);
    }

    #[test]
    fn test_advice_fractional_confidence_rounds() {
        let result = AdviceResult::decode(r#"{"advice":"a","reasoning":"b","confidence":87.6}"#);
        assert_eq!(result.confidence, 88);
    }

    #[test]
    fn test_advice_missing_advice_uses_raw_text() {
        let raw = r#"{"reasoning":"b","confidence":50}"#;
        assert_eq!(AdviceResult::decode(raw), AdviceResult::fallback(raw));
    }

    #[test]
    fn test_crop_research_decodes_all_fields() {
        let raw = r#"{"climate":"18-30C","soil":"Tifutifu","pests":"Viwavijeshi","yield":"2.5 t/ha"}"#;
        let result = CropResearchResult::decode(raw);

        assert_eq!(result.climate.as_deref(), Some("18-30C"));
        assert_eq!(result.soil.as_deref(), Some("Tifutifu"));
        assert_eq!(result.pests.as_deref(), Some("Viwavijeshi"));
        assert_eq!(result.expected_yield.as_deref(), Some("2.5 t/ha"));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_crop_research_missing_fields_are_absent() {
        let result = CropResearchResult::decode(r#"{"soil":"Loam","yield":3.2,"pests":null}"#);
        assert!(result.climate.is_none());
        assert!(result.pests.is_none());
        assert_eq!(result.soil.as_deref(), Some("Loam"));
        assert_eq!(result.expected_yield.as_deref(), Some("3.2"));
    }

    #[test]
    fn test_crop_research_malformed_is_empty() {
        for raw in MALFORMED {
            assert!(CropResearchResult::decode(raw).is_empty(), "input: {:?}", raw);
        }
    }

    #[test]
    fn test_crop_research_serializes_yield_key() {
        let result = CropResearchResult {
            expected_yield: Some("4 t/ha".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "yield": "4 t/ha" }));
    }

    #[test]
    fn test_pest_fallback_for_malformed_text() {
        for raw in MALFORMED {
            let result = PestDiagnosis::decode(raw);
            assert_eq!(result.diagnosis, "Unknown");
            assert_eq!(result.treatment, "Unable to process");
            assert_eq!(result.confidence, 0.0);
            assert!(result.is_fallback());
        }
    }

    #[test]
    fn test_pest_valid_json_unchanged() {
        let raw = r#"{"diagnosis":"Fall armyworm","treatment":"Neem extract spray","confidence":78.5}"#;
        let result = PestDiagnosis::decode(raw);

        assert_eq!(result.diagnosis, "Fall armyworm");
        assert_eq!(result.treatment, "Neem extract spray");
        assert_eq!(result.confidence, 78.5);
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_pest_missing_required_field_falls_back() {
        let result = PestDiagnosis::decode(r#"{"diagnosis":"Blight","treatment":"Copper"}"#);
        assert!(result.is_fallback());

        let result =
            PestDiagnosis::decode(r#"{"diagnosis":"Blight","treatment":"Copper","confidence":"90"}"#);
        assert!(result.is_fallback());
    }

    #[test]
    fn test_pest_out_of_range_confidence_passes_through() {
        let result =
            PestDiagnosis::decode(r#"{"diagnosis":"Rust","treatment":"Fungicide","confidence":250}"#);
        assert_eq!(result.confidence, 250.0);
        assert!(!result.confidence_in_range());
        assert_eq!(result.meter_fraction(), 1.0);
    }
}
