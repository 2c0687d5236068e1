//! The affect engine: single owner of the current emotional state
//!
//! Every mutation runs through one pipeline:
//! resolve → apply deltas → homeostasis → project → classify → log.
//!
//! The extended signal space is the source of truth. The core decay
//! multipliers (reward 0.95, stability 0.97, arousal 0.90) are applied as
//! the homeostasis rates of the three core signals, so decaying the core
//! coordinate and re-deriving it from the extended space are one step.
//!
//! The engine does no locking. Callers on several threads must serialize
//! access themselves (e.g. `Mutex<AffectEngine>`).

use crate::classifier::classify;
use crate::resolver::{MatchKind, TriggerResolver};
use crate::state::{EmotionSnapshot, EmotionalState, SessionLog, TelemetryState};
use chrono::{DateTime, Utc};
use neucogar_core::{
    BehaviorTrigger, EngineConfig, ExtendedSignals, HomeostasisRates, NeucogarConfig,
    Neurotransmitter, NoopBehavior, Result, TriggerTable,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use uuid::Uuid;

pub struct AffectEngine {
    resolver: TriggerResolver,
    rates: HomeostasisRates,
    self_threshold: f64,
    model_reference: String,

    current: EmotionalState,
    log: SessionLog,
    next_seq: u64,

    /// Actuation seam. Failures and panics here never reach state resolution.
    behavior: Box<dyn BehaviorTrigger>,

    session_id: Uuid,
    started_at: DateTime<Utc>,
}

impl AffectEngine {
    /// Build an engine from config, validating the trigger table first.
    pub fn new(config: &NeucogarConfig) -> Result<Self> {
        let table = config.trigger_table()?;
        let engine = &config.engine;
        if !engine.decay.is_finite() || !engine.regulatory_rate.is_finite() {
            return Err(neucogar_core::NeucogarError::InvalidTable {
                entry: "engine.decay".to_string(),
                reason: "non-finite decay rate".to_string(),
            });
        }

        Ok(Self::assemble(
            TriggerResolver::new(table, &engine.self_names),
            HomeostasisRates::split(engine.decay.rates(), engine.regulatory_rate),
            engine.self_recognition_threshold,
            engine.log_capacity,
            config.export.model_reference.clone(),
        ))
    }

    /// Engine over the built-in tables and default configuration.
    pub fn with_defaults() -> Self {
        let config = NeucogarConfig::default();
        Self::assemble(
            TriggerResolver::new(TriggerTable::builtin(), &config.engine.self_names),
            HomeostasisRates::split(config.engine.decay.rates(), config.engine.regulatory_rate),
            config.engine.self_recognition_threshold,
            config.engine.log_capacity,
            config.export.model_reference,
        )
    }

    fn assemble(
        resolver: TriggerResolver,
        rates: HomeostasisRates,
        self_threshold: f64,
        log_capacity: usize,
        model_reference: String,
    ) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!("Affect engine session {} started", session_id);
        Self {
            resolver,
            rates,
            self_threshold: if self_threshold.is_finite() {
                self_threshold
            } else {
                EngineConfig::default().self_recognition_threshold
            },
            model_reference,
            current: Self::neutral_state(0),
            log: SessionLog::new(log_capacity),
            next_seq: 1,
            behavior: Box::new(NoopBehavior),
            session_id,
            started_at: Utc::now(),
        }
    }

    fn neutral_state(seq: u64) -> EmotionalState {
        let signals = ExtendedSignals::baseline();
        EmotionalState::new(seq, signals, classify(&signals.to_coordinates()), None)
    }

    /// Inject the actuation hook.
    pub fn with_behavior(mut self, behavior: Box<dyn BehaviorTrigger>) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn set_behavior(&mut self, behavior: Box<dyn BehaviorTrigger>) {
        self.behavior = behavior;
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Apply a trigger by name or free text.
    ///
    /// Unknown input leaves the coordinates untouched but still logs a
    /// heartbeat entry.
    pub fn apply_trigger(&mut self, input: &str) -> EmotionalState {
        let resolution = self.resolver.resolve(input);
        let Some(trigger) = resolution.trigger else {
            tracing::debug!("No trigger matched '{}', logging heartbeat", input);
            return self.heartbeat();
        };
        let Some(effect) = self.resolver.effect(&trigger).copied() else {
            tracing::warn!("Resolved trigger '{}' missing from table", trigger);
            return self.heartbeat();
        };

        let mut signals = self.current.signals;
        signals.apply(&effect.extended());
        let state = self.advance(signals, Some(trigger.clone()));

        tracing::debug!(
            "Trigger '{}' ({:?}) → {}/{} intensity={:.3}",
            trigger,
            resolution.kind,
            state.primary,
            state.sub_emotion,
            state.intensity
        );
        if resolution.kind == MatchKind::Vision && trigger != neucogar_core::triggers::VISION_OBSERVATION {
            tracing::info!("Vision observation redirected to '{}'", trigger);
        }
        state
    }

    /// Move one signal directly, for subsystems that already computed a
    /// reward or penalty. Delta is in extended units.
    pub fn apply_direct(&mut self, axis: Neurotransmitter, delta: f64, reason: &str) -> EmotionalState {
        let mut signals = self.current.signals;
        signals.adjust(axis, delta);
        let state = self.advance(signals, Some(reason.to_string()));
        tracing::debug!(
            "Direct {} {:+.3} ({}) → {}/{}",
            axis,
            delta,
            reason,
            state.primary,
            state.sub_emotion
        );
        state
    }

    /// Clear the session log and return to the neutral baseline.
    pub fn reset(&mut self) {
        self.log.clear();
        self.current = Self::neutral_state(self.take_seq());
        tracing::info!("Affect engine session {} reset", self.session_id);
    }

    fn advance(&mut self, mut signals: ExtendedSignals, cause: Option<String>) -> EmotionalState {
        signals.homeostasis_with(&self.rates);
        let classification = classify(&signals.to_coordinates());
        let state = EmotionalState::new(self.take_seq(), signals, classification, cause);

        self.fire_behavior(&state);
        self.commit(state)
    }

    fn heartbeat(&mut self) -> EmotionalState {
        let seq = self.take_seq();
        let state = self.current.heartbeat(seq);
        self.commit(state)
    }

    fn commit(&mut self, state: EmotionalState) -> EmotionalState {
        self.current = state.clone();
        self.log.push(state.clone());
        state
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn fire_behavior(&self, state: &EmotionalState) {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.behavior.on_emotion(&state.primary, state.intensity)
        }));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Behavior hook failed for {}: {:#}", state.primary, e),
            Err(_) => tracing::warn!("Behavior hook panicked for {}", state.primary),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn current_emotion(&self) -> EmotionSnapshot {
        self.current.snapshot()
    }

    pub fn current_state(&self) -> TelemetryState {
        self.current.telemetry()
    }

    /// The full current state.
    pub fn state(&self) -> &EmotionalState {
        &self.current
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn recent(&self, n: usize) -> Vec<EmotionalState> {
        self.log.recent(n)
    }

    pub fn resolver(&self) -> &TriggerResolver {
        &self.resolver
    }

    pub fn self_recognition_threshold(&self) -> f64 {
        self.self_threshold
    }

    pub fn model_reference(&self) -> &str {
        &self.model_reference
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for AffectEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
