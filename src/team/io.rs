//! File I/O for team files.
//!
//! Teams are declared in YAML (canonical) or JSON. The parser is selected by
//! file extension: `.yaml`/`.yml` or `.json`.

use super::Team;
use crate::error::{CrewError, Result};
use std::path::Path;

impl Team {
    /// Load a team file from disk, selecting the parser by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CrewError::UserError(format!(
                "failed to read team file '{}': {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content).map_err(|e| {
                CrewError::UserError(format!(
                    "failed to parse team file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            Some("json") => Self::from_json(&content).map_err(|e| {
                CrewError::UserError(format!(
                    "failed to parse team file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            other => Err(CrewError::UserError(format!(
                "unsupported team file extension '{}' for '{}'.\n\
                 Supported extensions: .yaml, .yml, .json",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }

    /// Parse a team from a YAML string.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Parse a team from a JSON string.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize the team to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CrewError::UserError(format!("failed to serialize team: {}", e)))
    }

    /// Serialize the team to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CrewError::UserError(format!("failed to serialize team: {}", e)))
    }

    /// Save the team to disk, selecting the format by extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => self.to_json()?,
            _ => self.to_yaml()?,
        };
        std::fs::write(path, content).map_err(|e| {
            CrewError::UserError(format!(
                "failed to write team file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
