//! Session analytics
//!
//! Everything here is computed from the session log alone, so a report can
//! be rebuilt from an exported log without an engine.

use crate::engine::AffectEngine;
use crate::state::{EmotionalState, SessionLog};
use chrono::{DateTime, Utc};
use neucogar_core::Neurotransmitter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Humor signature: pleasant, secure, and relaxed.
const HUMOR_MIN_REWARD: f64 = 0.6;
const HUMOR_MIN_STABILITY: f64 = 0.4;
const HUMOR_MAX_AROUSAL: f64 = 0.3;

/// Social engagement signature: pleasant and secure, any arousal.
const SOCIAL_MIN_REWARD: f64 = 0.4;
const SOCIAL_MIN_STABILITY: f64 = 0.6;

/// Mean reward change between log halves below which the trend is flat.
const TREND_EPSILON: f64 = 0.05;

const CORE_AXES: [&str; 3] = ["reward", "stability", "arousal"];

/// The logged state with the highest value on one core axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPeak {
    pub value: f64,
    pub primary: String,
    pub sub_emotion: String,
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Steady,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantPair {
    pub primary: String,
    pub sub_emotion: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub total_states: usize,
    pub emotion_frequency: BTreeMap<String, usize>,
    pub sub_emotion_frequency: BTreeMap<String, usize>,
    /// Mean of each core axis (`reward`, `stability`, `arousal`).
    pub core_averages: BTreeMap<String, f64>,
    /// Mean of each of the eight signals, keyed by neurotransmitter name.
    pub signal_averages: BTreeMap<String, f64>,
    pub peaks: BTreeMap<String, AxisPeak>,
    pub dominant: Option<DominantPair>,
    /// `1 - distinct primaries / total`; 1.0 for an empty log.
    pub stability_score: f64,
    pub humor_moments: usize,
    pub social_moments: usize,
    pub trend: Option<Trend>,
    pub narrative: Vec<String>,
}

impl SessionReport {
    pub fn from_log(log: &SessionLog) -> Self {
        let states: Vec<&EmotionalState> = log.iter().collect();
        Self::from_states(&states)
    }

    pub fn from_states(states: &[&EmotionalState]) -> Self {
        let total = states.len();

        let mut emotion_frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut sub_emotion_frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut pairs: BTreeMap<(String, String), usize> = BTreeMap::new();
        for s in states {
            *emotion_frequency.entry(s.primary.clone()).or_default() += 1;
            *sub_emotion_frequency.entry(s.sub_emotion.clone()).or_default() += 1;
            *pairs
                .entry((s.primary.clone(), s.sub_emotion.clone()))
                .or_default() += 1;
        }

        let mut core_averages = BTreeMap::new();
        let mut signal_averages = BTreeMap::new();
        let mut peaks = BTreeMap::new();
        if total > 0 {
            for (i, axis) in CORE_AXES.iter().enumerate() {
                let mean = states.iter().map(|s| s.coordinates.as_array()[i]).sum::<f64>() / total as f64;
                core_averages.insert(axis.to_string(), mean);
                if let Some(peak) = peak_on(states, i) {
                    peaks.insert(axis.to_string(), peak);
                }
            }
            for axis in Neurotransmitter::ALL {
                let mean = states.iter().map(|s| s.signals.get(axis)).sum::<f64>() / total as f64;
                signal_averages.insert(axis.name().to_string(), mean);
            }
        }

        // BTreeMap order plus strict `>` picks the lexicographically first pair on ties
        let mut dominant: Option<DominantPair> = None;
        for ((primary, sub_emotion), count) in &pairs {
            if dominant.as_ref().map_or(true, |d| *count > d.count) {
                dominant = Some(DominantPair {
                    primary: primary.clone(),
                    sub_emotion: sub_emotion.clone(),
                    count: *count,
                });
            }
        }

        let stability_score = if total == 0 {
            1.0
        } else {
            1.0 - emotion_frequency.len() as f64 / total as f64
        };

        let humor_moments = states.iter().filter(|s| is_humor(s)).count();
        let social_moments = states.iter().filter(|s| is_social(s)).count();
        let trend = reward_trend(states);

        let mut report = Self {
            total_states: total,
            emotion_frequency,
            sub_emotion_frequency,
            core_averages,
            signal_averages,
            peaks,
            dominant,
            stability_score,
            humor_moments,
            social_moments,
            trend,
            narrative: Vec::new(),
        };
        report.narrative = report.compose_narrative();
        report
    }

    fn compose_narrative(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let Some(dominant) = &self.dominant else {
            lines.push("No emotional activity was recorded this session.".to_string());
            return lines;
        };

        lines.push(format!(
            "Across {} states the most common feeling was {} ({}), seen {} times.",
            self.total_states, dominant.primary, dominant.sub_emotion, dominant.count
        ));

        if self.stability_score >= 0.8 {
            lines.push(format!(
                "The session was emotionally steady (stability {:.2}).",
                self.stability_score
            ));
        } else if self.stability_score < 0.5 {
            lines.push(format!(
                "Emotions shifted often, across {} distinct states (stability {:.2}).",
                self.emotion_frequency.len(),
                self.stability_score
            ));
        }

        match self.trend {
            Some(Trend::Improving) => lines.push("Reward rose over the session.".to_string()),
            Some(Trend::Declining) => lines.push("Reward fell over the session.".to_string()),
            Some(Trend::Steady) => lines.push("Reward held roughly level.".to_string()),
            None => {}
        }

        if let Some(peak) = self.peaks.get("reward") {
            if peak.value > 0.0 {
                lines.push(format!(
                    "Reward peaked at {:.2} while feeling {}.",
                    peak.value, peak.primary
                ));
            }
        }
        if let Some(peak) = self.peaks.get("arousal") {
            if peak.value > 0.5 {
                lines.push(format!(
                    "Arousal peaked at {:.2} during {}.",
                    peak.value, peak.primary
                ));
            }
        }

        if self.humor_moments > 0 {
            lines.push(format!("Humor was detected in {} moments.", self.humor_moments));
        }
        if self.social_moments > 0 {
            lines.push(format!(
                "Social engagement was detected in {} moments.",
                self.social_moments
            ));
        }

        lines
    }

    /// The narrative as one paragraph.
    pub fn summary(&self) -> String {
        self.narrative.join(" ")
    }
}

pub fn is_humor(state: &EmotionalState) -> bool {
    let c = &state.coordinates;
    c.reward > HUMOR_MIN_REWARD && c.stability > HUMOR_MIN_STABILITY && c.arousal < HUMOR_MAX_AROUSAL
}

pub fn is_social(state: &EmotionalState) -> bool {
    let c = &state.coordinates;
    c.reward > SOCIAL_MIN_REWARD && c.stability > SOCIAL_MIN_STABILITY
}

/// First occurrence of the maximum wins.
fn peak_on(states: &[&EmotionalState], axis: usize) -> Option<AxisPeak> {
    let mut best: Option<&EmotionalState> = None;
    for s in states {
        let value = s.coordinates.as_array()[axis];
        if best.map_or(true, |b| value > b.coordinates.as_array()[axis]) {
            best = Some(s);
        }
    }
    best.map(|s| AxisPeak {
        value: s.coordinates.as_array()[axis],
        primary: s.primary.clone(),
        sub_emotion: s.sub_emotion.clone(),
        seq: s.seq,
        timestamp: s.timestamp,
    })
}

/// Mean reward of the second half against the first. Needs two states.
fn reward_trend(states: &[&EmotionalState]) -> Option<Trend> {
    if states.len() < 2 {
        return None;
    }
    let mid = states.len() / 2;
    let mean = |half: &[&EmotionalState]| {
        half.iter().map(|s| s.coordinates.reward).sum::<f64>() / half.len() as f64
    };
    let delta = mean(&states[mid..]) - mean(&states[..mid]);
    Some(if delta > TREND_EPSILON {
        Trend::Improving
    } else if delta < -TREND_EPSILON {
        Trend::Declining
    } else {
        Trend::Steady
    })
}

impl AffectEngine {
    pub fn report(&self) -> SessionReport {
        SessionReport::from_log(self.log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use neucogar_core::{ExtendedSignals, NeuroCoordinates};

    fn state_at(seq: u64, reward: f64, stability: f64, arousal: f64) -> EmotionalState {
        let signals = NeuroCoordinates::new(reward, stability, arousal).to_projection();
        EmotionalState::new(seq, signals, classify(&signals.to_coordinates()), None)
    }

    fn log_of(states: Vec<EmotionalState>) -> SessionLog {
        let mut log = SessionLog::new(100);
        for s in states {
            log.push(s);
        }
        log
    }

    #[test]
    fn test_empty_report() {
        let report = SessionReport::from_log(&SessionLog::new(10));
        assert_eq!(report.total_states, 0);
        assert_eq!(report.stability_score, 1.0);
        assert!(report.dominant.is_none());
        assert!(report.trend.is_none());
        assert_eq!(report.narrative.len(), 1);
    }

    #[test]
    fn test_histograms_and_stability() {
        let log = log_of(vec![
            state_at(1, 0.8, 0.8, -0.6),
            state_at(2, 0.8, 0.8, -0.6),
            state_at(3, 0.6, -0.7, 0.8),
            state_at(4, 0.8, 0.8, -0.6),
        ]);
        let report = SessionReport::from_log(&log);
        assert_eq!(report.emotion_frequency["joy"], 3);
        assert_eq!(report.emotion_frequency["anger"], 1);
        // 2 distinct primaries over 4 states
        assert!((report.stability_score - 0.5).abs() < 1e-12);
        let dominant = report.dominant.unwrap();
        assert_eq!(dominant.primary, "joy");
        assert_eq!(dominant.count, 3);
    }

    #[test]
    fn test_peaks_take_first_maximum() {
        let log = log_of(vec![
            state_at(1, 0.2, 0.0, 0.0),
            state_at(2, 0.7, 0.0, 0.9),
            state_at(3, 0.7, 0.0, 0.1),
        ]);
        let report = SessionReport::from_log(&log);
        assert_eq!(report.peaks["reward"].seq, 2);
        assert_eq!(report.peaks["arousal"].seq, 2);
        assert!((report.peaks["reward"].value - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_averages_cover_all_axes() {
        let log = log_of(vec![state_at(1, 0.4, 0.0, 0.0), state_at(2, 0.0, 0.0, 0.0)]);
        let report = SessionReport::from_log(&log);
        assert!((report.core_averages["reward"] - 0.2).abs() < 1e-9);
        assert_eq!(report.signal_averages.len(), 8);
        let gaba = ExtendedSignals::baseline().gaba;
        assert!((report.signal_averages["gaba"] - gaba).abs() < 1e-9);
    }

    #[test]
    fn test_humor_and_social_detectors() {
        let humor = state_at(1, 0.7, 0.5, 0.0);
        let social = state_at(2, 0.5, 0.7, 0.6);
        let both = state_at(3, 0.7, 0.7, 0.1);
        let neither = state_at(4, 0.7, 0.5, 0.5);
        assert!(is_humor(&humor) && !is_social(&humor));
        assert!(!is_humor(&social) && is_social(&social));
        assert!(is_humor(&both) && is_social(&both));
        assert!(!is_humor(&neither) && !is_social(&neither));

        let report = SessionReport::from_log(&log_of(vec![humor, social, both, neither]));
        assert_eq!(report.humor_moments, 2);
        assert_eq!(report.social_moments, 2);
        let text = report.summary();
        assert!(text.contains("Humor was detected in 2 moments"), "{}", text);
        assert!(text.contains("Social engagement was detected in 2 moments"), "{}", text);
    }

    #[test]
    fn test_trend() {
        let rising = log_of(vec![
            state_at(1, -0.5, 0.0, 0.0),
            state_at(2, -0.4, 0.0, 0.0),
            state_at(3, 0.3, 0.0, 0.0),
            state_at(4, 0.5, 0.0, 0.0),
        ]);
        assert_eq!(SessionReport::from_log(&rising).trend, Some(Trend::Improving));

        let flat = log_of(vec![state_at(1, 0.1, 0.0, 0.0), state_at(2, 0.1, 0.0, 0.0)]);
        assert_eq!(SessionReport::from_log(&flat).trend, Some(Trend::Steady));
    }

    #[test]
    fn test_engine_report_after_triggers() {
        let mut engine = AffectEngine::with_defaults();
        for _ in 0..5 {
            engine.apply_trigger("stress");
        }
        let report = engine.report();
        assert_eq!(report.total_states, 5);
        assert_eq!(report.trend, Some(Trend::Declining));
        assert!(!report.narrative.is_empty());
    }
}
