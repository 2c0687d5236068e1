//! Session export
//!
//! A session document bundles metadata, the current state, the full log
//! and the analytics report as pretty-printed JSON. Writing never touches
//! engine state, so a failed export loses nothing.

use crate::analytics::SessionReport;
use crate::engine::AffectEngine;
use crate::state::EmotionalState;
use chrono::{DateTime, Utc};
use neucogar_core::{Result, ENGINE_VERSION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub engine_version: String,
    pub model_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionExport {
    pub session_info: SessionInfo,
    pub current_state: EmotionalState,
    pub session_log: Vec<EmotionalState>,
    pub report: SessionReport,
}

impl SessionExport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Default file name for a session: `session_<id>.json`.
    pub fn file_name(&self) -> String {
        format!("session_{}.json", self.session_info.session_id.simple())
    }
}

impl AffectEngine {
    /// Snapshot the session as an export document.
    pub fn session_export(&self) -> SessionExport {
        SessionExport {
            session_info: SessionInfo {
                session_id: self.session_id(),
                started_at: self.started_at(),
                ended_at: Utc::now(),
                engine_version: ENGINE_VERSION.to_string(),
                model_reference: self.model_reference().to_string(),
            },
            current_state: self.state().clone(),
            session_log: self.log().to_vec(),
            report: self.report(),
        }
    }

    /// Export the session to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<SessionExport> {
        let doc = self.session_export();
        match doc.write(path.as_ref()) {
            Ok(()) => {
                tracing::info!(
                    "Exported session {} ({} states) to {}",
                    doc.session_info.session_id,
                    doc.session_log.len(),
                    path.as_ref().display()
                );
                Ok(doc)
            }
            Err(e) => {
                tracing::warn!("Session export to {} failed: {}", path.as_ref().display(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_export_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut engine = AffectEngine::with_defaults();
        engine.apply_trigger("praise");
        engine.apply_trigger("humor");
        engine.apply_trigger("stress");
        engine.export(&path).unwrap();

        let loaded = SessionExport::load(&path).unwrap();
        let original = engine.state();
        let restored = &loaded.current_state;

        for (a, b) in original.coordinates.as_array().iter().zip(restored.coordinates.as_array()) {
            assert!(close(*a, b));
        }
        for (a, b) in original.signals.as_array().iter().zip(restored.signals.as_array()) {
            assert!(close(*a, b));
        }
        assert!(close(original.intensity, restored.intensity));
        assert_eq!(restored.primary, original.primary);
        assert_eq!(loaded.session_log.len(), 3);
        assert_eq!(loaded.report.total_states, 3);
        assert_eq!(loaded.session_info.engine_version, ENGINE_VERSION);
        assert_eq!(loaded.session_info.session_id, engine.session_id());
    }

    #[test]
    fn test_export_failure_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where a file is expected
        let blocker = dir.path().join("taken");
        std::fs::create_dir(&blocker).unwrap();

        let mut engine = AffectEngine::with_defaults();
        engine.apply_trigger("praise");
        let before = engine.state().clone();

        assert!(engine.export(&blocker).is_err());
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.log_len(), 1);
    }

    #[test]
    fn test_document_shape() {
        let engine = AffectEngine::with_defaults();
        let json: serde_json::Value =
            serde_json::from_str(&engine.session_export().to_json().unwrap()).unwrap();
        for key in ["session_info", "current_state", "session_log", "report"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json["session_info"].get("model_reference").is_some());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(SessionExport::load("/nonexistent/session.json").is_err());
    }
}
