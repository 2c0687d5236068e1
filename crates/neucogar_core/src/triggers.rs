//! Trigger table and phrase table
//!
//! A trigger is a symbolic event name that moves the affect vector by a
//! fixed delta. Each row carries deltas for both spaces: signed core deltas
//! on (reward, stability, arousal) and unsigned deltas on the five
//! regulatory signals. The extended delta for a core axis is the core delta
//! scaled onto the unsigned axis (half its size), so both spaces move in
//! lockstep.

use crate::error::{NeucogarError, Result};
use crate::signals::Neurotransmitter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PRAISE: &str = "praise";
pub const STRESS: &str = "stress";
pub const REST: &str = "rest";
pub const MIRROR_TEST: &str = "mirror_test";
pub const SELF_RECOGNITION: &str = "self_recognition";
pub const SELF_AWARENESS: &str = "self_awareness";
pub const VISION_OBSERVATION: &str = "vision_observation";

/// Deltas for one trigger in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerEffect {
    /// Signed deltas on (reward, stability, arousal)
    pub core: [f64; 3],
    /// Deltas on (gaba, glutamate, acetylcholine, oxytocin, endorphins)
    pub regulatory: [f64; 5],
}

impl TriggerEffect {
    pub const fn new(core: [f64; 3], regulatory: [f64; 5]) -> Self {
        Self { core, regulatory }
    }

    /// Full 8-axis delta vector indexed by [`Neurotransmitter::index`].
    pub fn extended(&self) -> [f64; 8] {
        let mut out = [0.0; 8];
        for (i, d) in self.core.iter().enumerate() {
            out[i] = d / 2.0;
        }
        for (i, d) in self.regulatory.iter().enumerate() {
            out[3 + i] = *d;
        }
        out
    }

    /// Set one axis. Core axes take signed core-space units.
    pub fn set(&mut self, axis: Neurotransmitter, delta: f64) {
        let i = axis.index();
        if axis.is_core() {
            self.core[i] = delta;
        } else {
            self.regulatory[i - 3] = delta;
        }
    }

    pub fn is_finite(&self) -> bool {
        self.core.iter().chain(self.regulatory.iter()).all(|d| d.is_finite())
    }
}

const BUILTIN_TRIGGERS: &[(&str, TriggerEffect)] = &[
    ("achievement", TriggerEffect::new([0.4, 0.2, 0.2], [0.0, 0.1, 0.1, 0.0, 0.2])),
    ("boredom", TriggerEffect::new([-0.1, 0.0, -0.2], [0.1, -0.1, -0.2, 0.0, 0.0])),
    ("conflict", TriggerEffect::new([-0.2, -0.3, 0.3], [-0.1, 0.2, 0.1, -0.2, 0.0])),
    ("curiosity", TriggerEffect::new([0.2, 0.0, 0.2], [0.0, 0.1, 0.2, 0.0, 0.0])),
    ("danger", TriggerEffect::new([-0.1, -0.4, 0.5], [-0.2, 0.3, 0.2, 0.0, 0.0])),
    ("failure", TriggerEffect::new([-0.3, -0.2, 0.1], [0.0, 0.1, 0.0, 0.0, -0.1])),
    ("humor", TriggerEffect::new([0.4, 0.3, -0.1], [0.1, 0.0, 0.0, 0.1, 0.3])),
    ("insult", TriggerEffect::new([-0.3, -0.3, 0.3], [-0.1, 0.2, 0.0, -0.2, 0.0])),
    ("loneliness", TriggerEffect::new([-0.2, -0.2, -0.1], [0.0, 0.0, -0.1, -0.2, 0.0])),
    ("loss", TriggerEffect::new([-0.4, -0.3, -0.1], [0.0, 0.0, 0.0, -0.1, -0.1])),
    ("mirror_test", TriggerEffect::new([0.3, 0.3, 0.2], [0.0, 0.1, 0.3, 0.0, 0.1])),
    ("novelty", TriggerEffect::new([0.2, -0.05, 0.3], [0.0, 0.1, 0.2, 0.0, 0.0])),
    ("praise", TriggerEffect::new([0.3, 0.2, 0.1], [0.0, 0.0, 0.0, 0.1, 0.1])),
    ("rest", TriggerEffect::new([0.1, 0.1, -0.3], [0.2, -0.1, -0.1, 0.0, 0.1])),
    ("role_play", TriggerEffect::new([0.2, 0.1, 0.2], [0.0, 0.1, 0.2, 0.1, 0.0])),
    ("self_awareness", TriggerEffect::new([0.1, 0.1, 0.1], [0.0, 0.0, 0.1, 0.0, 0.0])),
    ("self_recognition", TriggerEffect::new([0.2, 0.2, 0.2], [0.0, 0.1, 0.2, 0.0, 0.0])),
    ("social_interaction", TriggerEffect::new([0.2, 0.2, 0.1], [0.0, 0.0, 0.1, 0.3, 0.1])),
    ("stress", TriggerEffect::new([-0.2, -0.2, 0.3], [-0.1, 0.2, 0.1, 0.0, 0.0])),
    ("success", TriggerEffect::new([0.3, 0.2, 0.1], [0.0, 0.1, 0.0, 0.0, 0.2])),
    ("surprise", TriggerEffect::new([0.0, -0.1, 0.4], [-0.1, 0.2, 0.2, 0.0, 0.0])),
    ("vision_observation", TriggerEffect::new([0.05, 0.0, 0.1], [0.0, 0.0, 0.15, 0.0, 0.0])),
];

/// Phrase variants mapped to trigger names, scanned in declared order.
///
/// Covers the semantic keyword clusters as well as role-play and
/// self-recognition phrasing. Editing behavior here is a data change.
pub const PHRASE_TABLE: &[(&str, &[&str])] = &[
    (
        SELF_RECOGNITION,
        &["that's me", "that is me", "it's me", "i see myself", "my reflection", "my own body"],
    ),
    (
        "role_play",
        &["pretend you are", "pretend to be", "act as", "role play", "roleplay", "imagine you are"],
    ),
    ("loss", &["lost", "gone forever", "goodbye", "died"]),
    (PRAISE, &["good", "great", "well done", "excellent", "amazing", "thank"]),
    (STRESS, &["scary", "frightening", "afraid", "worried", "pressure", "overwhelm"]),
    ("humor", &["funny", "joke", "haha", "lol", "hilarious", "laugh"]),
    ("insult", &["stupid", "idiot", "useless", "worthless", "shut up"]),
    ("failure", &["failed", "mistake", "wrong", "broke", "crash"]),
    ("social_interaction", &["hello", "friend", "chat with", "talk to", "hug"]),
    (REST, &["relax", "sleep", "calm down", "take a break", "tired"]),
    ("novelty", &["new", "never seen", "unfamiliar", "strange"]),
];

/// Trigger name → effect, iterated in lexicographic key order.
#[derive(Debug, Clone)]
pub struct TriggerTable {
    entries: BTreeMap<String, TriggerEffect>,
}

impl Default for TriggerTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TriggerTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_TRIGGERS
                .iter()
                .map(|(name, effect)| (name.to_string(), *effect))
                .collect(),
        }
    }

    /// Insert or replace a trigger. Keys are normalized to snake_case.
    pub fn insert(&mut self, name: &str, effect: TriggerEffect) {
        self.entries.insert(normalize_key(name), effect);
    }

    pub fn get(&self, name: &str) -> Option<&TriggerEffect> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TriggerEffect)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject non-finite deltas and phrase rows pointing at missing triggers.
    pub fn validate(&self) -> Result<()> {
        for (name, effect) in &self.entries {
            if !effect.is_finite() {
                tracing::warn!("Trigger '{}' has non-finite deltas", name);
                return Err(NeucogarError::InvalidTable {
                    entry: name.clone(),
                    reason: "non-finite delta".to_string(),
                });
            }
        }
        for (trigger, _) in PHRASE_TABLE {
            if !self.contains(trigger) {
                return Err(NeucogarError::InvalidTable {
                    entry: trigger.to_string(),
                    reason: "phrase table references an unknown trigger".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Canonical key form: trimmed, lowercase, spaces and hyphens as underscores.
pub fn normalize_key(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
