//! # NEUCOGAR Expression
//!
//! Turns resolved emotions into outward behavior. [`BehaviorHook`] plugs
//! into the engine as its `BehaviorTrigger` and drives two injected sinks:
//! body movement and expressive display.

mod hook;
mod reactions;
mod sinks;

pub use hook::{BehaviorHook, Delivery, ReactionOutcome};
pub use reactions::{builtin_reactions, EmotionFamily, Reaction, Timing};
pub use sinks::{BodyMovementSink, DisplayCue, DisplaySink, NoopDisplay, NoopMovement};
