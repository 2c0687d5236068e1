//! Core affect coordinates based on the Lövheim Cube of Emotion
//!
//! Three monoamine levels span a cube in which every basic emotion has an
//! anchor. We keep them signed around a neutral origin:
//! - **reward** (dopamine): motivation / anticipation of reward
//! - **stability** (serotonin): mood / confidence
//! - **arousal** (noradrenaline): alertness / activation
//!
//! All values live in [-1.0, 1.0]. Out-of-range and non-finite inputs are
//! silently repaired, never rejected.

use serde::{Deserialize, Serialize};

/// Replace non-finite values with a fallback before clamping.
///
/// `f64::clamp` propagates NaN, so every constructor routes through here.
#[inline]
pub(crate) fn sanitize(v: f64, fallback: f64, min: f64, max: f64) -> f64 {
    if v.is_finite() {
        v.clamp(min, max)
    } else {
        tracing::warn!("Non-finite affect value detected, resetting to {}", fallback);
        fallback
    }
}

/// A point in the 3-axis signed affect space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NeuroCoordinates {
    /// Reward / motivation (-1.0 to 1.0)
    pub reward: f64,
    /// Mood / stability (-1.0 to 1.0)
    pub stability: f64,
    /// Arousal / alertness (-1.0 to 1.0)
    pub arousal: f64,
}

impl NeuroCoordinates {
    pub fn new(reward: f64, stability: f64, arousal: f64) -> Self {
        Self {
            reward: sanitize(reward, 0.0, -1.0, 1.0),
            stability: sanitize(stability, 0.0, -1.0, 1.0),
            arousal: sanitize(arousal, 0.0, -1.0, 1.0),
        }
    }

    /// The neutral origin.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Euclidean distance. Symmetric, zero for identical points.
    pub fn distance(&self, other: &NeuroCoordinates) -> f64 {
        let dr = self.reward - other.reward;
        let ds = self.stability - other.stability;
        let da = self.arousal - other.arousal;
        (dr * dr + ds * ds + da * da).sqrt()
    }

    /// Euclidean norm (distance from neutral).
    pub fn magnitude(&self) -> f64 {
        self.distance(&Self::neutral())
    }

    /// Normalized distance from neutral: `‖c‖ / √3`, in [0, 1].
    ///
    /// Used both as the emotional intensity and as the proxy for how deep a
    /// sub-emotion sits.
    pub fn depth_factor(&self) -> f64 {
        (self.magnitude() / 3f64.sqrt()).clamp(0.0, 1.0)
    }

    /// Add a signed delta on every axis, clamping the result.
    pub fn offset(&self, reward: f64, stability: f64, arousal: f64) -> Self {
        Self::new(
            self.reward + reward,
            self.stability + stability,
            self.arousal + arousal,
        )
    }

    /// Multiply each axis by its decay factor.
    pub fn decayed(&self, profile: &DecayProfile) -> Self {
        Self::new(
            self.reward * profile.reward,
            self.stability * profile.stability,
            self.arousal * profile.arousal,
        )
    }

    /// Map one signed axis value onto the unsigned extended scale.
    ///
    /// Inverse of the projection `core = (extended - 0.5) * 2`.
    pub fn to_extended_axis(value: f64) -> f64 {
        sanitize(value / 2.0 + 0.5, 0.5, 0.0, 1.0)
    }

    /// Map one unsigned extended axis value onto the signed core scale.
    pub fn from_extended_axis(value: f64) -> f64 {
        sanitize((value - 0.5) * 2.0, 0.0, -1.0, 1.0)
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.reward, self.stability, self.arousal]
    }
}

/// Per-axis multiplicative decay for the core space.
///
/// Arousal settles fastest, stability slowest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayProfile {
    pub reward: f64,
    pub stability: f64,
    pub arousal: f64,
}

impl Default for DecayProfile {
    fn default() -> Self {
        Self {
            reward: 0.95,
            stability: 0.97,
            arousal: 0.90,
        }
    }
}

impl DecayProfile {
    /// The fraction of the excursion removed per step, per axis.
    ///
    /// A multiplier `m` on the signed axis is the same motion as homeostasis
    /// at rate `1 - m` on the unsigned axis around a 0.5 baseline.
    pub fn rates(&self) -> [f64; 3] {
        [
            (1.0 - self.reward).clamp(0.0, 1.0),
            (1.0 - self.stability).clamp(0.0, 1.0),
            (1.0 - self.arousal).clamp(0.0, 1.0),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.reward.is_finite() && self.stability.is_finite() && self.arousal.is_finite()
    }
}
