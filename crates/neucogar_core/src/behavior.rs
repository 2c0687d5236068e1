//! Seam between affect resolution and actuation.
//!
//! The engine hands every resolved (emotion, intensity) pair to a
//! [`BehaviorTrigger`]. The default does nothing, so an engine never
//! assumes an actuator exists.

/// Receives resolved emotions. Implementations may fail or panic; the
/// engine isolates both.
pub trait BehaviorTrigger: Send + Sync {
    fn on_emotion(&self, emotion: &str, intensity: f64) -> anyhow::Result<()>;
}

/// No-op behavior trigger.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBehavior;

impl BehaviorTrigger for NoopBehavior {
    fn on_emotion(&self, _emotion: &str, _intensity: f64) -> anyhow::Result<()> {
        Ok(())
    }
}
