//! # NEUCOGAR Core
//!
//! Value types and constant data for the NEUCOGAR affect model, which maps
//! neurotransmitter levels onto emotions via the Lövheim Cube of Emotion.
//!
//! - [`NeuroCoordinates`]: 3-axis signed space (reward, stability, arousal)
//! - [`ExtendedSignals`]: 8-axis unsigned space with homeostatic baselines
//! - [`tables`]: core emotion anchors, sub-emotions, detail templates
//! - [`triggers`]: trigger deltas and the phrase table
//! - [`NeucogarConfig`]: TOML configuration with env overrides

pub mod behavior;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod signals;
pub mod tables;
pub mod triggers;

pub use behavior::{BehaviorTrigger, NoopBehavior};
pub use config::{BehaviorConfig, CustomTrigger, EngineConfig, ExportConfig, NeucogarConfig};
pub use coordinates::{DecayProfile, NeuroCoordinates};
pub use error::{NeucogarError, Result};
pub use signals::{ExtendedSignals, HomeostasisRates, Neurotransmitter};
pub use triggers::{TriggerEffect, TriggerTable};

/// Version string recorded in exported sessions.
pub const ENGINE_VERSION: &str = concat!("neucogar/", env!("CARGO_PKG_VERSION"));
