//! Property-based tests for neucogar_core.
//!
//! Invariants of the coordinate and signal spaces that must hold for every
//! input, not only the table values.

use neucogar_core::{
    DecayProfile, ExtendedSignals, HomeostasisRates, NeuroCoordinates, Neurotransmitter,
    TriggerTable,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_coords() -> impl Strategy<Value = NeuroCoordinates> {
    (-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0)
        .prop_map(|(r, s, a)| NeuroCoordinates::new(r, s, a))
}

fn arb_signals() -> impl Strategy<Value = ExtendedSignals> {
    prop::array::uniform8(0.0f64..=1.0).prop_map(|levels| {
        let mut signals = ExtendedSignals::baseline();
        for axis in Neurotransmitter::ALL {
            signals.set(axis, levels[axis.index()]);
        }
        signals
    })
}

fn arb_any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        -10.0f64..=10.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

// ============================================================================
// Coordinate space
// ============================================================================

proptest! {
    #[test]
    fn distance_is_symmetric(a in arb_coords(), b in arb_coords()) {
        prop_assert_eq!(a.distance(&b).to_bits(), b.distance(&a).to_bits());
        prop_assert!(a.distance(&b) >= 0.0);
    }

    #[test]
    fn depth_factor_in_unit_range(c in arb_coords()) {
        let d = c.depth_factor();
        prop_assert!(d.is_finite() && (0.0..=1.0).contains(&d), "depth {}", d);
    }

    /// Construction never lets a non-finite or out-of-range value through.
    #[test]
    fn construction_sanitizes(r in arb_any_f64(), s in arb_any_f64(), a in arb_any_f64()) {
        let c = NeuroCoordinates::new(r, s, a);
        for v in c.as_array() {
            prop_assert!(v.is_finite() && (-1.0..=1.0).contains(&v), "axis {}", v);
        }
    }

    #[test]
    fn decay_moves_toward_origin(c in arb_coords()) {
        let d = c.decayed(&DecayProfile::default());
        for (before, after) in c.as_array().iter().zip(d.as_array()) {
            prop_assert!(after.abs() <= before.abs());
        }
    }

    #[test]
    fn projection_roundtrip(c in arb_coords()) {
        let back = c.to_projection().to_coordinates();
        prop_assert!(c.distance(&back) < 1e-9);
    }
}

// ============================================================================
// Extended signals
// ============================================================================

proptest! {
    /// Homeostasis never crosses the baseline, in either direction.
    #[test]
    fn homeostasis_never_overshoots(
        signals in arb_signals(),
        rates in prop::array::uniform8(0.0f64..=1.0),
    ) {
        let mut next = signals;
        next.homeostasis_with(&HomeostasisRates(rates));
        for axis in Neurotransmitter::ALL {
            let b = axis.baseline();
            let before = signals.get(axis);
            let after = next.get(axis);
            if before >= b {
                prop_assert!(after >= b - 1e-12 && after <= before + 1e-12);
            } else {
                prop_assert!(after <= b + 1e-12 && after >= before - 1e-12);
            }
        }
    }

    #[test]
    fn homeostatic_error_never_grows(signals in arb_signals(), rate in 0.0f64..=1.0) {
        let mut next = signals;
        next.homeostasis(rate);
        prop_assert!(next.homeostatic_error() <= signals.homeostatic_error() + 1e-12);
    }

    #[test]
    fn adjust_keeps_unit_range(signals in arb_signals(), delta in arb_any_f64(), idx in 0usize..8) {
        let mut s = signals;
        s.adjust(Neurotransmitter::ALL[idx], delta);
        for v in s.as_array() {
            prop_assert!(v.is_finite() && (0.0..=1.0).contains(&v));
        }
    }
}

#[test]
fn builtin_table_is_valid() {
    TriggerTable::builtin().validate().unwrap();
}
