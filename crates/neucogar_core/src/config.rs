use crate::coordinates::DecayProfile;
use crate::error::{NeucogarError, Result};
use crate::signals::Neurotransmitter;
use crate::triggers::{TriggerEffect, TriggerTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NeucogarConfig {
    pub engine: EngineConfig,
    pub behavior: BehaviorConfig,
    pub export: ExportConfig,
    /// Extra triggers merged over the built-in table.
    pub triggers: Vec<CustomTrigger>,
}

impl NeucogarConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: NeucogarConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return
    /// defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("NEUCOGAR_LOG_CAPACITY") {
            if let Ok(n) = v.parse() {
                self.engine.log_capacity = n;
            }
        }
        if let Ok(v) = std::env::var("NEUCOGAR_SELF_THRESHOLD") {
            if let Ok(n) = v.parse() {
                self.engine.self_recognition_threshold = n;
            }
        }
        if let Ok(v) = std::env::var("NEUCOGAR_EXPORT_DIR") {
            self.export.directory = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("NEUCOGAR_MODEL_REF") {
            self.export.model_reference = v;
        }
    }

    /// Built-in triggers with the configured custom rows merged in, validated.
    pub fn trigger_table(&self) -> Result<TriggerTable> {
        let mut table = TriggerTable::builtin();
        for custom in &self.triggers {
            table.insert(&custom.name, custom.to_effect()?);
        }
        table.validate()?;
        Ok(table)
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of states kept in the session log.
    pub log_capacity: usize,
    /// Homeostasis rate for the five regulatory signals.
    pub regulatory_rate: f64,
    /// Per-axis decay multipliers for the core space.
    pub decay: DecayProfile,
    /// Confidence at or above which a self-recognition report counts as strong.
    pub self_recognition_threshold: f64,
    /// Object names that denote the agent itself in vision observations.
    pub self_names: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_capacity: 1000,
            regulatory_rate: 0.05,
            decay: DecayProfile::default(),
            self_recognition_threshold: 0.8,
            self_names: default_self_names(),
        }
    }
}

fn default_self_names() -> Vec<String> {
    vec![
        "self".to_string(),
        "myself".to_string(),
        "me".to_string(),
        "robot".to_string(),
        "my reflection".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Intensity above which a family default reaction fires when no
    /// registered reaction matched.
    pub global_threshold: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            global_threshold: 0.8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    /// Free-form reference to the language model driving the agent.
    pub model_reference: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("sessions"),
            model_reference: "unspecified".to_string(),
        }
    }
}

/// A trigger row supplied by configuration.
///
/// Keys other than `name` are axis names or aliases (`reward`, `oxytocin`,
/// ...). Core axes take signed core-space deltas like the built-in table.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomTrigger {
    pub name: String,
    #[serde(flatten)]
    pub deltas: BTreeMap<String, f64>,
}

impl CustomTrigger {
    pub fn to_effect(&self) -> Result<TriggerEffect> {
        let mut effect = TriggerEffect::default();
        for (key, delta) in &self.deltas {
            let axis: Neurotransmitter =
                key.parse().map_err(|reason| NeucogarError::InvalidTable {
                    entry: self.name.clone(),
                    reason,
                })?;
            effect.set(axis, *delta);
        }
        Ok(effect)
    }
}

// ============================================================================
// Tests
// ============================================================================
