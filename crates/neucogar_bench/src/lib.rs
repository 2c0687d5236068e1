//! neucogar_bench: trajectory simulation tests for the affect engine.
//!
//! Validates emergent behavior over long trigger sequences:
//! - Sustained stress saturates without leaving bounds
//! - Idle recovery is gradual and ends at the homeostatic baseline
//! - Arousal settles faster than stability
//! - Decay profiles produce measurably different trajectories
//! - The session log keeps only the newest entries

use neucogar_core::Neurotransmitter;
use neucogar_limbic::{AffectEngine, EmotionalState};

/// Apply `trigger` `times` times, returning the last state.
pub fn repeat(engine: &mut AffectEngine, trigger: &str, times: usize) -> Option<EmotionalState> {
    let mut last = None;
    for _ in 0..times {
        last = Some(engine.apply_trigger(trigger));
    }
    last
}

/// Let `ticks` steps pass with no stimulus. A zero direct delta still runs
/// homeostasis, so each tick is one pure decay step.
pub fn idle(engine: &mut AffectEngine, ticks: usize) -> Option<EmotionalState> {
    let mut last = None;
    for _ in 0..ticks {
        last = Some(engine.apply_direct(Neurotransmitter::Dopamine, 0.0, "idle"));
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use neucogar_core::{DecayProfile, NeucogarConfig};

    /// 200 stress triggers: the state saturates at a fixed point, in bounds.
    #[test]
    fn test_sustained_stress_saturates() {
        let mut engine = AffectEngine::with_defaults();
        let states: Vec<EmotionalState> = (0..200).map(|_| engine.apply_trigger("stress")).collect();

        assert!(states.iter().all(|s| s.is_in_bounds()));

        let last = &states[199];
        let prev = &states[198];
        assert!(
            last.coordinates.distance(&prev.coordinates) < 1e-9,
            "Stress should reach a fixed point: {:?} vs {:?}",
            prev.coordinates,
            last.coordinates
        );
        assert!(
            last.coordinates.reward < -0.9,
            "Reward should sit near the floor, got {}",
            last.coordinates.reward
        );
        assert!(last.coordinates.arousal > 0.8);
    }

    /// After sustained stress, idling recovers slowly, then fully.
    #[test]
    fn test_idle_recovery_is_gradual() {
        let mut engine = AffectEngine::with_defaults();
        repeat(&mut engine, "stress", 50);
        let stressed = engine.state().clone();

        let early = idle(&mut engine, 10).unwrap();
        assert!(
            early.coordinates.reward < -0.5,
            "Reward should not snap back after 10 ticks, got {}",
            early.coordinates.reward
        );
        assert!(early.coordinates.reward > stressed.coordinates.reward);

        let late = idle(&mut engine, 400).unwrap();
        assert!(
            late.signals.homeostatic_error() < 0.01,
            "Signals should settle at baseline, error {}",
            late.signals.homeostatic_error()
        );
        assert_eq!(late.primary, "neutral");
    }

    /// Arousal has the fastest decay, stability the slowest.
    #[test]
    fn test_arousal_settles_before_stability() {
        let mut engine = AffectEngine::with_defaults();
        let shocked = engine.apply_trigger("danger");
        let after = idle(&mut engine, 20).unwrap();

        let arousal_left = after.coordinates.arousal.abs() / shocked.coordinates.arousal.abs();
        let stability_left = after.coordinates.stability.abs() / shocked.coordinates.stability.abs();
        assert!(
            arousal_left < stability_left,
            "Arousal should settle faster: {} vs {}",
            arousal_left,
            stability_left
        );
    }

    /// A faster decay profile returns to neutral sooner.
    #[test]
    fn test_decay_profiles_differ() {
        let mut quick = NeucogarConfig::default();
        quick.engine.decay = DecayProfile {
            reward: 0.7,
            stability: 0.7,
            arousal: 0.7,
        };
        let mut slow = NeucogarConfig::default();
        slow.engine.decay = DecayProfile {
            reward: 0.99,
            stability: 0.99,
            arousal: 0.99,
        };

        let mut engine_q = AffectEngine::new(&quick).unwrap();
        let mut engine_s = AffectEngine::new(&slow).unwrap();
        repeat(&mut engine_q, "praise", 5);
        repeat(&mut engine_s, "praise", 5);
        let q = idle(&mut engine_q, 20).unwrap();
        let s = idle(&mut engine_s, 20).unwrap();

        assert!(
            q.coordinates.magnitude() < s.coordinates.magnitude(),
            "Quick decay should be closer to neutral: {} vs {}",
            q.coordinates.magnitude(),
            s.coordinates.magnitude()
        );
    }

    /// A long run keeps exactly the newest 1000 states.
    #[test]
    fn test_long_session_log_eviction() {
        let mut engine = AffectEngine::with_defaults();
        let cycle = ["praise", "stress", "rest", "humor", "not a known trigger"];
        for i in 0..2500 {
            engine.apply_trigger(cycle[i % cycle.len()]);
        }
        assert_eq!(engine.log_len(), 1000);
        assert_eq!(engine.log().oldest().unwrap().seq, 1501);
        assert_eq!(engine.log().latest().unwrap().seq, 2500);
        assert_eq!(engine.report().total_states, 1000);
    }

    /// Repeated humor builds a pleasant, secure, relaxed state the
    /// analytics flag as humor and social engagement.
    #[test]
    fn test_humor_session_report() {
        let mut engine = AffectEngine::with_defaults();
        repeat(&mut engine, "humor", 30);
        let report = engine.report();

        assert!(report.humor_moments >= 25, "humor moments {}", report.humor_moments);
        assert!(report.social_moments >= 25, "social moments {}", report.social_moments);
        assert!(report.summary().contains("Humor"), "{}", report.summary());
    }
}
