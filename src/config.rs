//! Tagger Options
//!
//! One immutable options value per tagger instance, deserialized from the
//! JSON the host build pipeline passes across the native boundary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TaggerError;

/// How file paths are rendered into the emitted attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    #[default]
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaggerOptions {
    pub include_id: bool,
    pub include_name: bool,
    pub include_path: bool,
    pub include_line: bool,
    pub include_file: bool,
    pub include_content: bool,
    /// Full attribute-name prefix; facets render as `<prefix>-<facet>`.
    pub attribute_prefix: String,
    pub included_extensions: Vec<String>,
    /// Substring matches against the full file path.
    pub excluded_paths: Vec<String>,
    pub path_mode: PathMode,
    /// Project root used to relativize paths in `PathMode::Relative`.
    pub root: Option<String>,
    pub debug: bool,
    /// Skip react-three-fiber scene-graph elements.
    pub filter_three_elements: bool,
}

impl Default for TaggerOptions {
    fn default() -> Self {
        TaggerOptions {
            include_id: true,
            include_name: true,
            include_path: true,
            include_line: true,
            include_file: true,
            include_content: true,
            attribute_prefix: "data-gm".to_string(),
            included_extensions: vec![".jsx".to_string(), ".tsx".to_string()],
            excluded_paths: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "dist".to_string(),
                "build".to_string(),
            ],
            path_mode: PathMode::Relative,
            root: None,
            debug: false,
            filter_three_elements: true,
        }
    }
}

impl TaggerOptions {
    /// Deserialize options from the JSON the host pipeline passes over the
    /// native boundary. Unknown fields are ignored; missing fields default.
    pub fn from_json(json: &str) -> Result<Self, TaggerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render `file_path` according to the configured path mode.
    pub fn resolve_path(&self, file_path: &str) -> String {
        match self.path_mode {
            PathMode::Absolute => file_path.to_string(),
            PathMode::Relative => {
                if let Some(root) = &self.root {
                    if let Ok(rel) = Path::new(file_path).strip_prefix(root) {
                        return rel.to_string_lossy().replace('\\', "/");
                    }
                }
                file_path.trim_start_matches("./").to_string()
            }
        }
    }

    pub fn file_name(file_path: &str) -> String {
        Path::new(file_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file_path.to_string())
    }
}
