//! Static emotion tables
//!
//! Anchors follow the Lövheim cube: the eight corner emotions sit near
//! (±0.8, ±0.8, ±0.8) and the remaining ones fill the interior. Both tables
//! are kept sorted by name; lookups that scan them break ties in favour of
//! the earlier entry, so lexicographic order is the tie-break contract.

use crate::coordinates::NeuroCoordinates;

/// Sub-emotion returned when the primary emotion has none registered.
pub const GENERAL_SUB_EMOTION: &str = "general";

/// A named core emotion and its anchor in (reward, stability, arousal).
#[derive(Debug, Clone, Copy)]
pub struct EmotionAnchor {
    pub name: &'static str,
    pub reward: f64,
    pub stability: f64,
    pub arousal: f64,
}

impl EmotionAnchor {
    pub fn coordinates(&self) -> NeuroCoordinates {
        NeuroCoordinates::new(self.reward, self.stability, self.arousal)
    }
}

const fn anchor(name: &'static str, reward: f64, stability: f64, arousal: f64) -> EmotionAnchor {
    EmotionAnchor {
        name,
        reward,
        stability,
        arousal,
    }
}

pub const CORE_EMOTIONS: &[EmotionAnchor] = &[
    anchor("anger", 0.6, -0.7, 0.8),
    anchor("anxiety", -0.3, -0.6, 0.6),
    anchor("boredom", -0.4, 0.1, -0.7),
    anchor("calm", 0.1, 0.6, -0.5),
    anchor("contempt", -0.7, 0.7, -0.7),
    anchor("contentment", 0.4, 0.6, -0.2),
    anchor("curiosity", 0.5, 0.2, 0.5),
    anchor("distress", -0.8, -0.8, 0.8),
    anchor("excitement", 0.8, 0.8, 0.8),
    anchor("fear", 0.7, -0.8, -0.7),
    anchor("frustration", -0.3, -0.4, 0.4),
    anchor("joy", 0.8, 0.8, -0.6),
    anchor("love", 0.6, 0.7, 0.1),
    anchor("neutral", 0.0, 0.0, 0.0),
    anchor("pride", 0.6, 0.5, 0.4),
    anchor("sadness", -0.6, -0.4, -0.4),
    anchor("serenity", 0.2, 0.8, -0.7),
    anchor("shame", -0.8, -0.8, -0.8),
    anchor("surprise", -0.6, 0.7, 0.8),
    anchor("trust", 0.3, 0.5, 0.0),
];

/// A sub-emotion bound to one core emotion.
///
/// `depth` is an ordinal proxy for how deep the feeling runs, not a
/// measured quantity.
#[derive(Debug, Clone, Copy)]
pub struct SubEmotion {
    pub name: &'static str,
    pub parent: &'static str,
    pub depth: f64,
}

const fn sub(name: &'static str, parent: &'static str, depth: f64) -> SubEmotion {
    SubEmotion { name, parent, depth }
}

pub const SUB_EMOTIONS: &[SubEmotion] = &[
    sub("acceptance", "trust", 0.3),
    sub("admiration", "trust", 0.7),
    sub("adoration", "love", 0.8),
    sub("affection", "love", 0.3),
    sub("agitation", "distress", 0.3),
    sub("amazement", "surprise", 0.4),
    sub("anguish", "distress", 0.8),
    sub("annoyance", "frustration", 0.3),
    sub("astonishment", "surprise", 0.8),
    sub("bliss", "joy", 0.8),
    sub("confidence", "pride", 0.3),
    sub("delight", "joy", 0.5),
    sub("despair", "sadness", 0.9),
    sub("disdain", "contempt", 0.4),
    sub("disgust", "contempt", 0.7),
    sub("dread", "fear", 0.6),
    sub("elation", "joy", 0.2),
    sub("embarrassment", "shame", 0.3),
    sub("ennui", "boredom", 0.7),
    sub("enthusiasm", "excitement", 0.3),
    sub("exasperation", "frustration", 0.7),
    sub("exhilaration", "excitement", 0.7),
    sub("fascination", "curiosity", 0.7),
    sub("fulfillment", "contentment", 0.7),
    sub("grief", "sadness", 0.7),
    sub("humiliation", "shame", 0.8),
    sub("interest", "curiosity", 0.3),
    sub("irritation", "anger", 0.2),
    sub("melancholy", "sadness", 0.3),
    sub("nervousness", "anxiety", 0.3),
    sub("panic", "anxiety", 0.9),
    sub("rage", "anger", 0.9),
    sub("relaxation", "calm", 0.3),
    sub("resentment", "anger", 0.6),
    sub("restlessness", "boredom", 0.3),
    sub("satisfaction", "contentment", 0.3),
    sub("tenderness", "love", 0.5),
    sub("terror", "fear", 0.9),
    sub("tranquility", "calm", 0.7),
    sub("triumph", "pride", 0.8),
    sub("unease", "fear", 0.2),
    sub("worry", "anxiety", 0.5),
];

pub fn find_anchor(name: &str) -> Option<&'static EmotionAnchor> {
    CORE_EMOTIONS.iter().find(|a| a.name == name)
}

pub fn sub_emotions_of(parent: &str) -> impl Iterator<Item = &'static SubEmotion> + '_ {
    SUB_EMOTIONS.iter().filter(move |s| s.parent == parent)
}

/// Four detail templates per emotion, ordered by intensity quartile.
pub fn detail_templates(emotion: &str) -> [&'static str; 4] {
    match emotion {
        "anger" => [
            "a flicker of irritation",
            "growing anger",
            "strong anger",
            "overwhelming fury",
        ],
        "anxiety" => [
            "a slight unease",
            "noticeable anxiety",
            "pressing anxiety",
            "acute panic",
        ],
        "boredom" => [
            "mild disinterest",
            "settled boredom",
            "heavy boredom",
            "deep listlessness",
        ],
        "calm" => [
            "a quiet calm",
            "steady calm",
            "deep calm",
            "profound stillness",
        ],
        "contempt" => [
            "faint disapproval",
            "clear disdain",
            "strong contempt",
            "utter disgust",
        ],
        "contentment" => [
            "mild contentment",
            "warm contentment",
            "deep satisfaction",
            "complete fulfillment",
        ],
        "curiosity" => [
            "a spark of interest",
            "active curiosity",
            "eager curiosity",
            "consuming fascination",
        ],
        "distress" => [
            "slight discomfort",
            "clear distress",
            "serious distress",
            "overwhelming anguish",
        ],
        "excitement" => [
            "light anticipation",
            "lively excitement",
            "intense excitement",
            "exhilarated rush",
        ],
        "fear" => [
            "a trace of caution",
            "growing fear",
            "strong fear",
            "paralyzing terror",
        ],
        "frustration" => [
            "minor annoyance",
            "mounting frustration",
            "sharp frustration",
            "exasperated strain",
        ],
        "joy" => [
            "a hint of happiness",
            "cheerful joy",
            "radiant joy",
            "ecstatic bliss",
        ],
        "love" => [
            "gentle fondness",
            "warm affection",
            "deep affection",
            "devoted adoration",
        ],
        "neutral" => [
            "an even baseline",
            "a mostly balanced state",
            "a restless balance",
            "a charged but undirected state",
        ],
        "pride" => [
            "quiet assurance",
            "satisfied pride",
            "strong pride",
            "triumphant pride",
        ],
        "sadness" => [
            "a touch of melancholy",
            "noticeable sadness",
            "heavy sadness",
            "crushing despair",
        ],
        "serenity" => [
            "light ease",
            "settled serenity",
            "deep serenity",
            "perfect tranquility",
        ],
        "shame" => [
            "slight self-consciousness",
            "embarrassment",
            "deep shame",
            "crushing humiliation",
        ],
        "surprise" => [
            "mild surprise",
            "clear surprise",
            "strong astonishment",
            "complete shock",
        ],
        "trust" => [
            "tentative openness",
            "comfortable trust",
            "firm trust",
            "wholehearted faith",
        ],
        _ => [
            "a subtle feeling",
            "a moderate feeling",
            "a strong feeling",
            "an overwhelming feeling",
        ],
    }
}

/// Qualifier words appended when an axis magnitude exceeds 0.5,
/// as (positive, negative) pairs in core-axis order.
pub const AXIS_QUALIFIERS: [(&str, &str); 3] = [
    ("motivated", "unmotivated"),
    ("confident", "insecure"),
    ("alert", "drowsy"),
];

/// Magnitude above which an axis contributes a qualifier.
pub const QUALIFIER_THRESHOLD: f64 = 0.5;
