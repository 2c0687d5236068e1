//! Error types shared by the NEUCOGAR crates.
//!
//! Engine operations themselves are total; these errors only surface from
//! construction with custom tables, configuration loading and session
//! export/import.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeucogarError {
    /// A trigger, anchor or sub-emotion entry failed startup validation.
    #[error("Invalid table entry '{entry}': {reason}")]
    InvalidTable { entry: String, reason: String },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NeucogarError>;
