//! Emotion resolution
//!
//! Maps a core coordinate onto the nearest anchor emotion, picks the
//! sub-emotion whose depth best matches the coordinate's distance from
//! neutral, and renders a short description.
//!
//! Every scan runs over tables sorted by name with a strict `<` comparison,
//! so equal distances resolve to the lexicographically first entry.

use crate::state::Classification;
use neucogar_core::tables::{
    self, EmotionAnchor, AXIS_QUALIFIERS, CORE_EMOTIONS, GENERAL_SUB_EMOTION, QUALIFIER_THRESHOLD,
};
use neucogar_core::NeuroCoordinates;

/// Resolve a coordinate into primary emotion, sub-emotion, detail and intensity.
pub fn classify(coords: &NeuroCoordinates) -> Classification {
    let primary = nearest_emotion(coords);
    let depth = coords.depth_factor();
    let intensity = depth.clamp(0.0, 1.0);

    Classification {
        primary: primary.name.to_string(),
        sub_emotion: select_sub_emotion(primary.name, depth).to_string(),
        detail: render_detail(primary.name, intensity, coords),
        intensity,
    }
}

/// The anchor with minimum distance to `coords`.
pub fn nearest_emotion(coords: &NeuroCoordinates) -> &'static EmotionAnchor {
    nearest_in(CORE_EMOTIONS, coords).unwrap_or(&CORE_EMOTIONS[0])
}

/// The anchor in `anchors` closest to `coords`. On equal distance the
/// earlier entry wins, so a name-sorted table breaks ties alphabetically.
pub fn nearest_in<'a>(
    anchors: &'a [EmotionAnchor],
    coords: &NeuroCoordinates,
) -> Option<&'a EmotionAnchor> {
    let mut best: Option<(&'a EmotionAnchor, f64)> = None;
    for anchor in anchors {
        let d = coords.distance(&anchor.coordinates());
        match best {
            Some((_, best_distance)) if d >= best_distance => {}
            _ => best = Some((anchor, d)),
        }
    }
    best.map(|(anchor, _)| anchor)
}

/// The child of `primary` whose declared depth is closest to `depth`,
/// or the `"general"` sentinel when `primary` has none.
pub fn select_sub_emotion(primary: &str, depth: f64) -> &'static str {
    let mut best: Option<(&'static str, f64)> = None;
    for sub in tables::sub_emotions_of(primary) {
        let gap = (sub.depth - depth).abs();
        match best {
            Some((_, best_gap)) if gap >= best_gap => {}
            _ => best = Some((sub.name, gap)),
        }
    }
    best.map(|(name, _)| name).unwrap_or(GENERAL_SUB_EMOTION)
}

/// Quartile template plus qualifiers for every axis whose magnitude
/// exceeds 0.5.
pub fn render_detail(primary: &str, intensity: f64, coords: &NeuroCoordinates) -> String {
    let quartile = ((intensity.clamp(0.0, 1.0) * 4.0) as usize).min(3);
    let template = tables::detail_templates(primary)[quartile];

    let qualifiers: Vec<&str> = coords
        .as_array()
        .iter()
        .zip(AXIS_QUALIFIERS.iter())
        .filter_map(|(value, (high, low))| {
            if *value > QUALIFIER_THRESHOLD {
                Some(*high)
            } else if *value < -QUALIFIER_THRESHOLD {
                Some(*low)
            } else {
                None
            }
        })
        .collect();

    if qualifiers.is_empty() {
        format!("Feeling {}", template)
    } else {
        format!("Feeling {} ({})", template, qualifiers.join(", "))
    }
}
