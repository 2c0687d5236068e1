//! Self-recognition entry point
//!
//! A perception collaborator reports that the agent may have recognized
//! itself. The report is routed to one of three triggers by confidence and
//! context, and the result is packaged as a [`SelfRecognitionEvent`] for an
//! external memory store. The event's field names are a stable contract.

use crate::engine::AffectEngine;
use crate::state::EmotionalState;
use chrono::{DateTime, Utc};
use neucogar_core::triggers::{normalize_key, MIRROR_TEST, SELF_AWARENESS, SELF_RECOGNITION};
use serde::{Deserialize, Serialize};

pub const EVENT_TYPE: &str = "self_recognition";
const MIRROR_CONTEXT: &str = "mirror";

const MIRROR_TEST_IMPLICATIONS: &[&str] = &[
    "Recognizes own reflection as self",
    "Distinguishes self from other agents",
    "Holds a persistent model of own body",
    "Can direct attention to itself",
];

const SELF_RECOGNITION_IMPLICATIONS: &[&str] = &[
    "Recognizes own likeness outside a mirror",
    "Holds a persistent model of own body",
    "Can direct attention to itself",
];

const SELF_AWARENESS_IMPLICATIONS: &[&str] = &[
    "Tentative awareness of self",
    "Self-model not yet confirmed by perception",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfRecognitionEvent {
    pub event_type: String,
    pub trigger_used: String,
    pub confidence: f64,
    pub context: String,
    pub state: EmotionalState,
    pub cognitive_implications: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Pick the trigger for a confidence/context report.
pub fn select_trigger(confidence: f64, context: &str, threshold: f64) -> &'static str {
    if confidence >= threshold {
        if normalize_key(context) == MIRROR_CONTEXT {
            MIRROR_TEST
        } else {
            SELF_RECOGNITION
        }
    } else {
        SELF_AWARENESS
    }
}

fn implications_for(trigger: &str) -> &'static [&'static str] {
    match trigger {
        MIRROR_TEST => MIRROR_TEST_IMPLICATIONS,
        SELF_RECOGNITION => SELF_RECOGNITION_IMPLICATIONS,
        _ => SELF_AWARENESS_IMPLICATIONS,
    }
}

impl AffectEngine {
    /// Route a self-recognition report through the matching trigger.
    ///
    /// Non-finite confidence counts as zero.
    pub fn handle_self_recognition(&mut self, confidence: f64, context: &str) -> SelfRecognitionEvent {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let trigger = select_trigger(confidence, context, self.self_recognition_threshold());
        let state = self.apply_trigger(trigger);

        tracing::info!(
            "Self-recognition via {} (confidence={:.2}, context='{}') → {}",
            trigger,
            confidence,
            context,
            state.primary
        );

        SelfRecognitionEvent {
            event_type: EVENT_TYPE.to_string(),
            trigger_used: trigger.to_string(),
            confidence,
            context: context.to_string(),
            timestamp: state.timestamp,
            state,
            cognitive_implications: implications_for(trigger)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_context_high_confidence() {
        let mut engine = AffectEngine::with_defaults();
        let event = engine.handle_self_recognition(0.9, "mirror");
        assert_eq!(event.trigger_used, "mirror_test");
        assert_eq!(event.event_type, "self_recognition");
        assert_eq!(event.cognitive_implications.len(), MIRROR_TEST_IMPLICATIONS.len());
        assert_eq!(event.state.cause.as_deref(), Some("mirror_test"));
        assert_eq!(engine.log_len(), 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(select_trigger(0.8, "Mirror", 0.8), MIRROR_TEST);
        assert_eq!(select_trigger(0.8, "window", 0.8), SELF_RECOGNITION);
        assert_eq!(select_trigger(0.79, "mirror", 0.8), SELF_AWARENESS);
    }

    #[test]
    fn test_low_confidence_is_self_awareness() {
        let mut engine = AffectEngine::with_defaults();
        let event = engine.handle_self_recognition(0.3, "mirror");
        assert_eq!(event.trigger_used, "self_awareness");
        assert_eq!(event.confidence, 0.3);
    }

    #[test]
    fn test_nan_confidence_counts_as_zero() {
        let mut engine = AffectEngine::with_defaults();
        let event = engine.handle_self_recognition(f64::NAN, "mirror");
        assert_eq!(event.trigger_used, "self_awareness");
        assert_eq!(event.confidence, 0.0);
        assert!(event.state.is_in_bounds());
    }

    #[test]
    fn test_payload_field_names() {
        let mut engine = AffectEngine::with_defaults();
        let event = engine.handle_self_recognition(0.95, "photo");
        let json = serde_json::to_value(&event).unwrap();
        for field in [
            "event_type",
            "trigger_used",
            "confidence",
            "context",
            "state",
            "cognitive_implications",
            "timestamp",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(json["trigger_used"], "self_recognition");
    }
}
