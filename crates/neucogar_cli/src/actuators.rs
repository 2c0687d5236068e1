//! Actuators for a terminal session: reactions go to the log instead of hardware.

use neucogar_expression::{BodyMovementSink, DisplayCue, DisplaySink};

pub struct LoggingMovement;

impl BodyMovementSink for LoggingMovement {
    fn perform(&self, movement: &str, intensity: f64) -> anyhow::Result<()> {
        tracing::info!(target: "neucogar::actuator", "movement {} ({:.2})", movement, intensity);
        Ok(())
    }
}

pub struct LoggingDisplay;

impl DisplaySink for LoggingDisplay {
    fn show(&self, cue: &DisplayCue) -> anyhow::Result<()> {
        tracing::info!(
            target: "neucogar::actuator",
            "display {} ({:.2}, +{}ms)",
            cue.expression,
            cue.intensity,
            cue.delay_ms
        );
        Ok(())
    }
}
