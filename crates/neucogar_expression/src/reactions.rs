//! Reaction registry
//!
//! Entries are scanned in order and the first one whose member set contains
//! the emotion and whose threshold is met wins. When nothing matches, a
//! strong enough emotion still gets a small family default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Display and movement start together.
    Simultaneous,
    /// Movement first, display follows after `delay_ms`.
    Sequential { delay_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub name: String,
    pub emotions: Vec<String>,
    /// Minimum intensity, inclusive.
    pub threshold: f64,
    pub movement: String,
    pub display: Option<String>,
    pub timing: Timing,
}

impl Reaction {
    pub fn new(name: &str, emotions: &[&str], threshold: f64, movement: &str) -> Self {
        Self {
            name: name.to_string(),
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            threshold,
            movement: movement.to_string(),
            display: None,
            timing: Timing::Simultaneous,
        }
    }

    pub fn with_display(mut self, display: &str, timing: Timing) -> Self {
        self.display = Some(display.to_string());
        self.timing = timing;
        self
    }

    pub fn matches(&self, emotion: &str, intensity: f64) -> bool {
        intensity >= self.threshold && self.emotions.iter().any(|e| e == emotion)
    }
}

/// The built-in registry, in scan order.
pub fn builtin_reactions() -> Vec<Reaction> {
    vec![
        Reaction::new("celebrate", &["joy", "excitement", "pride"], 0.6, "raise_arms")
            .with_display("big_smile", Timing::Simultaneous),
        Reaction::new("startle", &["surprise", "fear"], 0.5, "step_back")
            .with_display("wide_eyes", Timing::Sequential { delay_ms: 150 }),
        Reaction::new("slump", &["sadness", "shame", "distress"], 0.5, "lower_head")
            .with_display("downcast_eyes", Timing::Sequential { delay_ms: 300 }),
        Reaction::new("tense", &["anger", "frustration", "anxiety"], 0.55, "clench_fists")
            .with_display("frown", Timing::Simultaneous),
        Reaction::new("lean_in", &["curiosity", "love", "trust"], 0.4, "lean_forward")
            .with_display("soft_smile", Timing::Simultaneous),
        Reaction::new("settle", &["contentment", "calm", "serenity"], 0.4, "slow_nod"),
    ]
}

/// Coarse grouping used for default reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionFamily {
    Positive,
    Negative,
    Threat,
    Startle,
}

impl EmotionFamily {
    pub fn of(emotion: &str) -> Option<Self> {
        match emotion {
            "joy" | "excitement" | "love" | "pride" | "contentment" | "serenity" | "calm"
            | "trust" => Some(Self::Positive),
            "sadness" | "shame" | "distress" | "boredom" => Some(Self::Negative),
            "fear" | "anxiety" | "anger" | "frustration" | "contempt" => Some(Self::Threat),
            "surprise" | "curiosity" => Some(Self::Startle),
            _ => None,
        }
    }

    /// (movement, display) for the family default.
    pub fn default_reaction(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Positive => ("small_bounce", Some("smile")),
            Self::Negative => ("sigh", Some("slight_frown")),
            Self::Threat => ("brace", None),
            Self::Startle => ("head_tilt", Some("raised_brows")),
        }
    }
}
