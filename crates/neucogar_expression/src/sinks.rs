//! Actuation sinks
//!
//! The hook talks to actuators only through these traits. Both default to a
//! no-op, so a hook without hardware behind it is still complete.

use serde::{Deserialize, Serialize};

/// What the display sink is asked to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCue {
    pub expression: String,
    pub intensity: f64,
    /// How long after the movement started the display should follow.
    /// Zero for simultaneous reactions.
    pub delay_ms: u64,
}

pub trait BodyMovementSink: Send + Sync {
    fn perform(&self, movement: &str, intensity: f64) -> anyhow::Result<()>;
}

pub trait DisplaySink: Send + Sync {
    fn show(&self, cue: &DisplayCue) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMovement;

impl BodyMovementSink for NoopMovement {
    fn perform(&self, _movement: &str, _intensity: f64) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDisplay;

impl DisplaySink for NoopDisplay {
    fn show(&self, _cue: &DisplayCue) -> anyhow::Result<()> {
        Ok(())
    }
}
