//! Emotional state snapshots and the bounded session log
//!
//! An [`EmotionalState`] is created once at engine construction and then
//! superseded on every trigger or direct mutation. Superseded states are
//! archived in the [`SessionLog`], never modified.

use chrono::{DateTime, Utc};
use neucogar_core::{ExtendedSignals, NeuroCoordinates, Neurotransmitter};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Result of resolving a coordinate into named emotions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary: String,
    pub sub_emotion: String,
    pub detail: String,
    /// Normalized distance from neutral, in [0, 1]
    pub intensity: f64,
}

/// One complete affective state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalState {
    /// Monotonic sequence number within one engine
    pub seq: u64,
    pub primary: String,
    pub sub_emotion: String,
    pub detail: String,
    pub coordinates: NeuroCoordinates,
    pub signals: ExtendedSignals,
    pub intensity: f64,
    pub timestamp: DateTime<Utc>,
    /// Trigger name or direct-mutation reason; `None` for the initial state
    /// and for heartbeat entries of unmatched triggers.
    pub cause: Option<String>,
}

impl EmotionalState {
    pub fn new(
        seq: u64,
        signals: ExtendedSignals,
        classification: Classification,
        cause: Option<String>,
    ) -> Self {
        Self {
            seq,
            primary: classification.primary,
            sub_emotion: classification.sub_emotion,
            detail: classification.detail,
            coordinates: signals.to_coordinates(),
            signals,
            intensity: classification.intensity,
            timestamp: Utc::now(),
            cause,
        }
    }

    /// Re-stamp an unchanged state as a heartbeat entry.
    pub fn heartbeat(&self, seq: u64) -> Self {
        Self {
            seq,
            timestamp: Utc::now(),
            cause: None,
            ..self.clone()
        }
    }

    pub fn snapshot(&self) -> EmotionSnapshot {
        EmotionSnapshot {
            primary: self.primary.clone(),
            sub_emotion: self.sub_emotion.clone(),
            detail: self.detail.clone(),
            coordinates: self.coordinates,
            intensity: self.intensity,
            timestamp: self.timestamp,
        }
    }

    pub fn telemetry(&self) -> TelemetryState {
        TelemetryState {
            levels: Neurotransmitter::ALL
                .iter()
                .map(|axis| (axis.name().to_string(), self.signals.get(*axis)))
                .collect(),
            primary: self.primary.clone(),
            sub_emotion: self.sub_emotion.clone(),
            intensity: self.intensity,
            timestamp: self.timestamp,
        }
    }

    /// Check every numeric field against its documented bound.
    pub fn is_in_bounds(&self) -> bool {
        let core_ok = self
            .coordinates
            .as_array()
            .iter()
            .all(|v| v.is_finite() && (-1.0..=1.0).contains(v));
        let ext_ok = self
            .signals
            .as_array()
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v));
        core_ok && ext_ok && self.intensity.is_finite() && (0.0..=1.0).contains(&self.intensity)
    }
}

/// What `current_emotion()` exposes to collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSnapshot {
    pub primary: String,
    pub sub_emotion: String,
    pub detail: String,
    pub coordinates: NeuroCoordinates,
    pub intensity: f64,
    pub timestamp: DateTime<Utc>,
}

/// Flattened 8-axis view for telemetry publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryState {
    #[serde(flatten)]
    pub levels: BTreeMap<String, f64>,
    pub primary: String,
    pub sub_emotion: String,
    pub intensity: f64,
    pub timestamp: DateTime<Utc>,
}

/// FIFO-bounded, append-only log of states.
#[derive(Debug, Clone)]
pub struct SessionLog {
    entries: VecDeque<EmotionalState>,
    capacity: usize,
}

impl SessionLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append, evicting the oldest entry once capacity is exceeded.
    pub fn push(&mut self, state: EmotionalState) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(state);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &EmotionalState> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn oldest(&self) -> Option<&EmotionalState> {
        self.entries.front()
    }

    pub fn latest(&self) -> Option<&EmotionalState> {
        self.entries.back()
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<EmotionalState> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<EmotionalState> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(seq: u64) -> EmotionalState {
        EmotionalState::new(
            seq,
            ExtendedSignals::baseline(),
            Classification {
                primary: "neutral".to_string(),
                sub_emotion: "general".to_string(),
                detail: "an even baseline".to_string(),
                intensity: 0.0,
            },
            None,
        )
    }

    #[test]
    fn test_log_evicts_oldest_first() {
        let mut log = SessionLog::new(3);
        for seq in 0..5 {
            log.push(state(seq));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.oldest().unwrap().seq, 2);
        assert_eq!(log.latest().unwrap().seq, 4);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut log = SessionLog::new(0);
        log.push(state(0));
        log.push(state(1));
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().unwrap().seq, 1);
    }

    #[test]
    fn test_recent() {
        let mut log = SessionLog::new(10);
        for seq in 0..6 {
            log.push(state(seq));
        }
        let recent: Vec<u64> = log.recent(2).iter().map(|s| s.seq).collect();
        assert_eq!(recent, vec![4, 5]);
        assert_eq!(log.recent(100).len(), 6);
    }

    #[test]
    fn test_telemetry_flattens_all_axes() {
        let t = state(0).telemetry();
        assert_eq!(t.levels.len(), 8);
        assert_eq!(t.levels["gaba"], Neurotransmitter::Gaba.baseline());
    }

    #[test]
    fn test_telemetry_json_has_top_level_axes() {
        let t = state(0).telemetry();
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("levels").is_none());
        assert_eq!(json["dopamine"], Neurotransmitter::Dopamine.baseline());
        assert_eq!(json["primary"], "neutral");

        let back: TelemetryState = serde_json::from_value(json).unwrap();
        assert_eq!(back.levels.len(), 8);
        assert_eq!(back, t);
    }

    #[test]
    fn test_heartbeat_keeps_coordinates() {
        let s = state(0);
        let hb = s.heartbeat(1);
        assert_eq!(hb.coordinates, s.coordinates);
        assert_eq!(hb.seq, 1);
        assert!(hb.cause.is_none());
    }
}
