use crate::emit::Framework;
use crate::error::ErrorPayload;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Schema version for output payloads.
pub const FIGCOMP_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FigcompOutput {
    Create(CreateOutput),
    Detect(DetectOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReference {
    pub file_key: String,
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutput {
    pub version: String,
    pub input: DesignReference,
    pub framework: Framework,
    pub extension: String,
    pub component_name: String,
    /// Absent on dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaffold: Option<String>,
    pub dry_run: bool,
    /// Generated source, included on dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectOutput {
    pub version: String,
    pub project_dir: PathBuf,
    pub framework: Option<Framework>,
    pub extension: Option<String>,
    pub typescript: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    pub error: ErrorPayload,
}

impl ErrorOutput {
    pub fn new(error: ErrorPayload) -> Self {
        Self {
            version: FIGCOMP_OUTPUT_VERSION.to_string(),
            error,
        }
    }
}
