//! # NEUCOGAR Limbic Engine
//!
//! The affective state engine. Named triggers and direct signal deltas move
//! an 8-axis neurotransmitter state; the three core axes (dopamine,
//! serotonin, noradrenaline) are projected onto the Lövheim cube and
//! resolved into a named emotion.
//!
//! ## Pipeline
//!
//! 1. Resolve the input into a trigger (exact, substring, phrase)
//! 2. Add the trigger deltas to the extended signals
//! 3. Pull every signal toward its baseline (core axes at their own decay rates)
//! 4. Project to core coordinates and classify
//! 5. Log the state and hand (emotion, intensity) to the behavior hook
//!
//! An engine is a plain value. Create as many as needed; they share nothing.

pub mod analytics;
pub mod classifier;
mod engine;
pub mod export;
pub mod recognition;
pub mod resolver;
mod state;

pub use analytics::{AxisPeak, DominantPair, SessionReport, Trend};
pub use classifier::classify;
pub use engine::AffectEngine;
pub use export::{SessionExport, SessionInfo};
pub use recognition::SelfRecognitionEvent;
pub use resolver::{MatchKind, Resolution, TriggerResolver};
pub use state::{Classification, EmotionSnapshot, EmotionalState, SessionLog, TelemetryState};
