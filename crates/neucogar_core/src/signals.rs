//! Extended neurotransmitter signals (NEUCOGAR)
//!
//! The three core monoamines plus five regulatory signals, each an unsigned
//! level in [0.0, 1.0] with its own homeostatic set-point. The core axes
//! project losslessly onto [`NeuroCoordinates`].

use crate::coordinates::{sanitize, NeuroCoordinates};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One axis of the extended signal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neurotransmitter {
    /// Reward / motivation
    Dopamine,
    /// Mood / stability
    Serotonin,
    /// Arousal / alertness
    Noradrenaline,
    /// Inhibition
    Gaba,
    /// Excitation
    Glutamate,
    /// Attention
    Acetylcholine,
    /// Bonding
    Oxytocin,
    /// Relief / euphoria
    Endorphins,
}

impl Neurotransmitter {
    pub const ALL: [Neurotransmitter; 8] = [
        Self::Dopamine,
        Self::Serotonin,
        Self::Noradrenaline,
        Self::Gaba,
        Self::Glutamate,
        Self::Acetylcholine,
        Self::Oxytocin,
        Self::Endorphins,
    ];

    /// The three axes that project onto [`NeuroCoordinates`].
    pub const CORE: [Neurotransmitter; 3] = [Self::Dopamine, Self::Serotonin, Self::Noradrenaline];

    pub fn index(self) -> usize {
        match self {
            Self::Dopamine => 0,
            Self::Serotonin => 1,
            Self::Noradrenaline => 2,
            Self::Gaba => 3,
            Self::Glutamate => 4,
            Self::Acetylcholine => 5,
            Self::Oxytocin => 6,
            Self::Endorphins => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dopamine => "dopamine",
            Self::Serotonin => "serotonin",
            Self::Noradrenaline => "noradrenaline",
            Self::Gaba => "gaba",
            Self::Glutamate => "glutamate",
            Self::Acetylcholine => "acetylcholine",
            Self::Oxytocin => "oxytocin",
            Self::Endorphins => "endorphins",
        }
    }

    /// Homeostatic set-point.
    ///
    /// Core axes rest at 0.5 so the neutral state projects to the origin.
    pub fn baseline(self) -> f64 {
        match self {
            Self::Dopamine | Self::Serotonin | Self::Noradrenaline => 0.5,
            Self::Gaba => 0.6,
            Self::Glutamate => 0.4,
            Self::Acetylcholine => 0.5,
            Self::Oxytocin => 0.4,
            Self::Endorphins => 0.3,
        }
    }

    pub fn is_core(self) -> bool {
        self.index() < 3
    }
}

impl fmt::Display for Neurotransmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Neurotransmitter {
    type Err = String;

    /// Accepts transmitter names and their functional aliases
    /// (`reward`, `stability`, `arousal`, `inhibition`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dopamine" | "reward" | "motivation" => Ok(Self::Dopamine),
            "serotonin" | "stability" | "mood" => Ok(Self::Serotonin),
            "noradrenaline" | "norepinephrine" | "arousal" | "alertness" => Ok(Self::Noradrenaline),
            "gaba" | "inhibition" => Ok(Self::Gaba),
            "glutamate" | "excitation" => Ok(Self::Glutamate),
            "acetylcholine" | "attention" => Ok(Self::Acetylcholine),
            "oxytocin" | "bonding" => Ok(Self::Oxytocin),
            "endorphins" | "endorphin" | "relief" | "euphoria" => Ok(Self::Endorphins),
            other => Err(format!("unknown neurotransmitter '{}'", other)),
        }
    }
}

/// Per-axis homeostasis rates, indexed by [`Neurotransmitter::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeostasisRates(pub [f64; 8]);

impl HomeostasisRates {
    /// Same rate on every axis.
    pub fn uniform(rate: f64) -> Self {
        Self([rate.clamp(0.0, 1.0); 8])
    }

    /// Core axes use the given per-axis rates, regulatory axes share one rate.
    pub fn split(core: [f64; 3], regulatory: f64) -> Self {
        let mut rates = [regulatory.clamp(0.0, 1.0); 8];
        for (slot, rate) in rates.iter_mut().zip(core) {
            *slot = rate.clamp(0.0, 1.0);
        }
        Self(rates)
    }

    pub fn get(&self, axis: Neurotransmitter) -> f64 {
        self.0[axis.index()]
    }
}

/// Full 8-axis signal levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtendedSignals {
    pub dopamine: f64,
    pub serotonin: f64,
    pub noradrenaline: f64,
    pub gaba: f64,
    pub glutamate: f64,
    pub acetylcholine: f64,
    pub oxytocin: f64,
    pub endorphins: f64,
}

impl Default for ExtendedSignals {
    fn default() -> Self {
        Self::baseline()
    }
}

impl ExtendedSignals {
    /// Every axis at its set-point.
    pub fn baseline() -> Self {
        let mut signals = Self {
            dopamine: 0.0,
            serotonin: 0.0,
            noradrenaline: 0.0,
            gaba: 0.0,
            glutamate: 0.0,
            acetylcholine: 0.0,
            oxytocin: 0.0,
            endorphins: 0.0,
        };
        for axis in Neurotransmitter::ALL {
            *signals.slot(axis) = axis.baseline();
        }
        signals
    }

    fn slot(&mut self, axis: Neurotransmitter) -> &mut f64 {
        match axis {
            Neurotransmitter::Dopamine => &mut self.dopamine,
            Neurotransmitter::Serotonin => &mut self.serotonin,
            Neurotransmitter::Noradrenaline => &mut self.noradrenaline,
            Neurotransmitter::Gaba => &mut self.gaba,
            Neurotransmitter::Glutamate => &mut self.glutamate,
            Neurotransmitter::Acetylcholine => &mut self.acetylcholine,
            Neurotransmitter::Oxytocin => &mut self.oxytocin,
            Neurotransmitter::Endorphins => &mut self.endorphins,
        }
    }

    pub fn get(&self, axis: Neurotransmitter) -> f64 {
        match axis {
            Neurotransmitter::Dopamine => self.dopamine,
            Neurotransmitter::Serotonin => self.serotonin,
            Neurotransmitter::Noradrenaline => self.noradrenaline,
            Neurotransmitter::Gaba => self.gaba,
            Neurotransmitter::Glutamate => self.glutamate,
            Neurotransmitter::Acetylcholine => self.acetylcholine,
            Neurotransmitter::Oxytocin => self.oxytocin,
            Neurotransmitter::Endorphins => self.endorphins,
        }
    }

    /// Set one axis, clamped to [0, 1]. Non-finite values fall back to baseline.
    pub fn set(&mut self, axis: Neurotransmitter, value: f64) {
        *self.slot(axis) = sanitize(value, axis.baseline(), 0.0, 1.0);
    }

    /// Typed delta application on one axis.
    pub fn adjust(&mut self, axis: Neurotransmitter, delta: f64) {
        if !delta.is_finite() {
            tracing::warn!("Ignoring non-finite delta on {}", axis);
            return;
        }
        self.set(axis, self.get(axis) + delta);
    }

    /// Apply a full delta vector indexed by [`Neurotransmitter::index`].
    pub fn apply(&mut self, deltas: &[f64; 8]) {
        for axis in Neurotransmitter::ALL {
            let delta = deltas[axis.index()];
            if delta != 0.0 {
                self.adjust(axis, delta);
            }
        }
    }

    /// Move every axis toward its baseline at a single rate `r`.
    ///
    /// Axes above baseline decay at `r`; axes below recover at `r / 2`.
    pub fn homeostasis(&mut self, rate: f64) {
        self.homeostasis_with(&HomeostasisRates::uniform(rate));
    }

    /// Per-axis homeostasis with the same asymmetry as [`Self::homeostasis`].
    ///
    /// Rates are clamped to [0, 1], so a step never overshoots the baseline.
    pub fn homeostasis_with(&mut self, rates: &HomeostasisRates) {
        for axis in Neurotransmitter::ALL {
            let level = self.get(axis);
            let baseline = axis.baseline();
            let rate = rates.get(axis).clamp(0.0, 1.0);
            let next = if level > baseline {
                level - (level - baseline) * rate
            } else if level < baseline {
                level + (baseline - level) * rate / 2.0
            } else {
                level
            };
            self.set(axis, next);
        }
    }

    /// Project the core axes: `core = (extended - 0.5) * 2`.
    pub fn to_coordinates(&self) -> NeuroCoordinates {
        NeuroCoordinates::new(
            NeuroCoordinates::from_extended_axis(self.dopamine),
            NeuroCoordinates::from_extended_axis(self.serotonin),
            NeuroCoordinates::from_extended_axis(self.noradrenaline),
        )
    }

    /// Lift core coordinates into the extended space, leaving the regulatory
    /// axes untouched.
    pub fn with_coordinates(mut self, coords: &NeuroCoordinates) -> Self {
        self.set(Neurotransmitter::Dopamine, NeuroCoordinates::to_extended_axis(coords.reward));
        self.set(Neurotransmitter::Serotonin, NeuroCoordinates::to_extended_axis(coords.stability));
        self.set(
            Neurotransmitter::Noradrenaline,
            NeuroCoordinates::to_extended_axis(coords.arousal),
        );
        self
    }

    pub fn as_array(&self) -> [f64; 8] {
        let mut out = [0.0; 8];
        for axis in Neurotransmitter::ALL {
            out[axis.index()] = self.get(axis);
        }
        out
    }

    /// Mean absolute distance of all axes from their set-points.
    pub fn homeostatic_error(&self) -> f64 {
        Neurotransmitter::ALL
            .iter()
            .map(|axis| (self.get(*axis) - axis.baseline()).abs())
            .sum::<f64>()
            / 8.0
    }
}

impl NeuroCoordinates {
    /// Lift into the extended space with regulatory axes at baseline.
    pub fn to_projection(&self) -> ExtendedSignals {
        ExtendedSignals::baseline().with_coordinates(self)
    }

    /// Project extended signals down to core coordinates.
    pub fn from_projection(signals: &ExtendedSignals) -> Self {
        signals.to_coordinates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_projects_to_origin() {
        let coords = ExtendedSignals::baseline().to_coordinates();
        assert_eq!(coords, NeuroCoordinates::neutral());
    }

    #[test]
    fn test_projection_roundtrip() {
        let coords = NeuroCoordinates::new(0.4, -0.6, 0.1);
        let back = NeuroCoordinates::from_projection(&coords.to_projection());
        assert!(coords.distance(&back) < 1e-12);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut s = ExtendedSignals::baseline();
        s.adjust(Neurotransmitter::Oxytocin, 5.0);
        assert_eq!(s.oxytocin, 1.0);
        s.adjust(Neurotransmitter::Oxytocin, -5.0);
        assert_eq!(s.oxytocin, 0.0);
    }

    #[test]
    fn test_adjust_ignores_non_finite() {
        let mut s = ExtendedSignals::baseline();
        s.adjust(Neurotransmitter::Gaba, f64::NAN);
        assert_eq!(s.gaba, Neurotransmitter::Gaba.baseline());
    }

    #[test]
    fn test_homeostasis_asymmetric() {
        let mut s = ExtendedSignals::baseline();
        s.set(Neurotransmitter::Dopamine, 0.9); // +0.4 above
        s.set(Neurotransmitter::Serotonin, 0.1); // -0.4 below
        s.homeostasis(0.1);

        // Decay removes 10% of the excursion, recovery only 5%
        assert!((s.dopamine - 0.86).abs() < 1e-12);
        assert!((s.serotonin - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_homeostasis_never_overshoots() {
        let mut s = ExtendedSignals::baseline();
        s.set(Neurotransmitter::Endorphins, 0.95);
        s.set(Neurotransmitter::Gaba, 0.05);
        for _ in 0..500 {
            s.homeostasis(1.0);
            assert!(s.endorphins >= Neurotransmitter::Endorphins.baseline());
            assert!(s.gaba <= Neurotransmitter::Gaba.baseline());
        }
    }

    #[test]
    fn test_split_rates() {
        let rates = HomeostasisRates::split([0.05, 0.03, 0.1], 0.2);
        assert_eq!(rates.get(Neurotransmitter::Serotonin), 0.03);
        assert_eq!(rates.get(Neurotransmitter::Oxytocin), 0.2);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("reward".parse::<Neurotransmitter>(), Ok(Neurotransmitter::Dopamine));
        assert_eq!("Bonding".parse::<Neurotransmitter>(), Ok(Neurotransmitter::Oxytocin));
        assert!("adrenaline_rush".parse::<Neurotransmitter>().is_err());
    }

    #[test]
    fn test_homeostatic_error_zero_at_baseline() {
        assert_eq!(ExtendedSignals::baseline().homeostatic_error(), 0.0);
    }
}
