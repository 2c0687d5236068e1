//! Trigger resolution
//!
//! Turns free text or a symbolic name into a trigger key. First match wins:
//! 1. Vision compound (`vision observation: <object>`): the agent's own
//!    name redirects to `self_recognition`, anything else is a plain
//!    `vision_observation`
//! 2. Exact key match after normalization
//! 3. Substring containment either way, keys scanned lexicographically
//! 4. Phrase table, rows scanned in declared order
//! 5. Nothing: the caller treats it as a heartbeat

use neucogar_core::triggers::{normalize_key, PHRASE_TABLE, SELF_RECOGNITION, VISION_OBSERVATION};
use neucogar_core::{TriggerEffect, TriggerTable};
use serde::{Deserialize, Serialize};

/// Inputs shorter than this never match as a fragment of a longer key.
const MIN_FRAGMENT_LEN: usize = 3;

const VISION_PREFIXES: &[&str] = &["vision observation", "vision_observation", "vision-observation"];
const VISION_FILLERS: &[&str] = &["about", "of", "object", "the", "a", "an"];

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Vision,
    Exact,
    Substring,
    Phrase,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub trigger: Option<String>,
    pub kind: MatchKind,
}

impl Resolution {
    fn matched(trigger: &str, kind: MatchKind) -> Self {
        Self {
            trigger: Some(trigger.to_string()),
            kind,
        }
    }

    fn unmatched() -> Self {
        Self {
            trigger: None,
            kind: MatchKind::Unmatched,
        }
    }
}

/// Resolves input strings against a validated trigger table.
#[derive(Debug, Clone)]
pub struct TriggerResolver {
    table: TriggerTable,
    self_names: Vec<String>,
}

impl TriggerResolver {
    pub fn new(table: TriggerTable, self_names: &[String]) -> Self {
        Self {
            table,
            self_names: self_names.iter().map(|n| normalize_key(n)).collect(),
        }
    }

    pub fn table(&self) -> &TriggerTable {
        &self.table
    }

    pub fn effect(&self, trigger: &str) -> Option<&TriggerEffect> {
        self.table.get(trigger)
    }

    pub fn resolve(&self, input: &str) -> Resolution {
        let key = normalize_key(input);
        if key.is_empty() {
            return Resolution::unmatched();
        }

        if let Some(object) = vision_object(input) {
            let trigger = if self.is_self(&object) {
                SELF_RECOGNITION
            } else {
                VISION_OBSERVATION
            };
            tracing::trace!("Vision observation of '{}' resolved to {}", object, trigger);
            return Resolution::matched(trigger, MatchKind::Vision);
        }

        if self.table.contains(&key) {
            return Resolution::matched(&key, MatchKind::Exact);
        }

        if let Some(trigger) = self.substring_match(&key) {
            tracing::trace!("'{}' matched trigger '{}' by substring", input, trigger);
            return Resolution::matched(trigger, MatchKind::Substring);
        }

        if let Some(trigger) = self.phrase_match(input) {
            tracing::trace!("'{}' matched trigger '{}' by phrase", input, trigger);
            return Resolution::matched(trigger, MatchKind::Phrase);
        }

        Resolution::unmatched()
    }

    fn substring_match(&self, key: &str) -> Option<&str> {
        let allow_fragment = key.chars().count() >= MIN_FRAGMENT_LEN;
        self.table
            .iter()
            .map(|(name, _)| name)
            .find(|name| key.contains(name) || (allow_fragment && name.contains(key)))
    }

    fn phrase_match(&self, input: &str) -> Option<&'static str> {
        let lower = input.to_lowercase();
        PHRASE_TABLE
            .iter()
            .find(|(trigger, phrases)| {
                self.table.contains(trigger) && phrases.iter().any(|p| lower.contains(p))
            })
            .map(|(trigger, _)| *trigger)
    }

    fn is_self(&self, object: &str) -> bool {
        let object = normalize_key(object);
        self.self_names.iter().any(|name| *name == object)
    }
}

/// Extract `<object>` from `vision observation[:] [about] [the] <object>`.
fn vision_object(input: &str) -> Option<String> {
    let lower = input.trim().to_lowercase();
    let rest = VISION_PREFIXES
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix))?;

    let mut words: Vec<&str> = rest
        .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
        .filter(|w| !w.is_empty())
        .collect();
    while words.first().is_some_and(|w| VISION_FILLERS.contains(w)) {
        words.remove(0);
    }
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}
