//! The behavior-trigger hook
//!
//! Resolves (emotion, intensity) into at most one reaction and drives the
//! injected sinks. Each sink call is isolated: an `Err` or a panic is
//! logged and recorded in the outcome, and the other sink still runs.

use crate::reactions::{builtin_reactions, EmotionFamily, Reaction, Timing};
use crate::sinks::{BodyMovementSink, DisplayCue, DisplaySink, NoopDisplay, NoopMovement};
use neucogar_core::{BehaviorConfig, BehaviorTrigger};
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// How one sink call went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Delivered,
    Failed(String),
    Panicked,
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionOutcome {
    /// Nothing matched and the intensity was below the global threshold.
    Idle,
    Fired {
        reaction: String,
        /// Set when the reaction is a family default rather than a registry entry.
        family: Option<EmotionFamily>,
        movement: Delivery,
        display: Option<Delivery>,
    },
}

pub struct BehaviorHook {
    reactions: Vec<Reaction>,
    global_threshold: f64,
    movement: Box<dyn BodyMovementSink>,
    display: Box<dyn DisplaySink>,
}

impl BehaviorHook {
    pub fn new() -> Self {
        Self::from_config(&BehaviorConfig::default())
    }

    pub fn from_config(config: &BehaviorConfig) -> Self {
        Self {
            reactions: builtin_reactions(),
            global_threshold: config.global_threshold,
            movement: Box::new(NoopMovement),
            display: Box::new(NoopDisplay),
        }
    }

    pub fn with_movement(mut self, sink: Box<dyn BodyMovementSink>) -> Self {
        self.movement = sink;
        self
    }

    pub fn with_display(mut self, sink: Box<dyn DisplaySink>) -> Self {
        self.display = sink;
        self
    }

    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Pick and fire the reaction for this emotion.
    pub fn react(&self, emotion: &str, intensity: f64) -> ReactionOutcome {
        let intensity = if intensity.is_finite() { intensity } else { 0.0 };

        if let Some(reaction) = self.reactions.iter().find(|r| r.matches(emotion, intensity)) {
            tracing::debug!("Reaction '{}' for {} ({:.2})", reaction.name, emotion, intensity);
            let (movement, display) = self.fire(
                &reaction.movement,
                reaction.display.as_deref(),
                reaction.timing,
                intensity,
            );
            return ReactionOutcome::Fired {
                reaction: reaction.name.clone(),
                family: None,
                movement,
                display,
            };
        }

        if intensity > self.global_threshold {
            if let Some(family) = EmotionFamily::of(emotion) {
                let (movement_name, display_name) = family.default_reaction();
                tracing::debug!("Family default '{}' for {} ({:.2})", movement_name, emotion, intensity);
                let (movement, display) =
                    self.fire(movement_name, display_name, Timing::Simultaneous, intensity);
                return ReactionOutcome::Fired {
                    reaction: movement_name.to_string(),
                    family: Some(family),
                    movement,
                    display,
                };
            }
        }

        ReactionOutcome::Idle
    }

    fn fire(
        &self,
        movement: &str,
        display: Option<&str>,
        timing: Timing,
        intensity: f64,
    ) -> (Delivery, Option<Delivery>) {
        let cue = |delay_ms| DisplayCue {
            expression: display.unwrap_or_default().to_string(),
            intensity,
            delay_ms,
        };

        match (display, timing) {
            (None, _) => (self.move_body(movement, intensity), None),
            (Some(_), Timing::Simultaneous) => {
                let shown = self.show(&cue(0));
                let moved = self.move_body(movement, intensity);
                (moved, Some(shown))
            }
            (Some(_), Timing::Sequential { delay_ms }) => {
                let moved = self.move_body(movement, intensity);
                let shown = self.show(&cue(delay_ms));
                (moved, Some(shown))
            }
        }
    }

    fn move_body(&self, movement: &str, intensity: f64) -> Delivery {
        isolate("body movement", || self.movement.perform(movement, intensity))
    }

    fn show(&self, cue: &DisplayCue) -> Delivery {
        isolate("display", || self.display.show(cue))
    }
}

impl Default for BehaviorHook {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorTrigger for BehaviorHook {
    fn on_emotion(&self, emotion: &str, intensity: f64) -> anyhow::Result<()> {
        self.react(emotion, intensity);
        Ok(())
    }
}

fn isolate(sink: &str, call: impl FnOnce() -> anyhow::Result<()>) -> Delivery {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(())) => Delivery::Delivered,
        Ok(Err(e)) => {
            tracing::warn!("{} sink failed: {:#}", sink, e);
            Delivery::Failed(e.to_string())
        }
        Err(_) => {
            tracing::warn!("{} sink panicked", sink);
            Delivery::Panicked
        }
    }
}
