use crate::resource::ResourceParseError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigcompError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid Figma link: {0}")]
    InvalidLink(String),

    #[error("Figma API error (status: {status:?}): {message}")]
    FigmaApi {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Rate limited by Figma API, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Node {0} not found in Figma response")]
    NodeNotFound(String),

    #[error("Unsupported framework: {0}")]
    UnknownFramework(String),

    #[error("Scaffolding command `{command}` failed: {message}")]
    Scaffold { command: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl FigcompError {
    pub fn figma_api(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        FigcompError::FigmaApi {
            status,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        FigcompError::Config(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FigcompError::InvalidLink(_) => ErrorCategory::Input,
            FigcompError::Network(_) => ErrorCategory::Network,
            FigcompError::FigmaApi { .. }
            | FigcompError::RateLimited(_)
            | FigcompError::NodeNotFound(_) => ErrorCategory::Figma,
            FigcompError::UnknownFramework(_) | FigcompError::Scaffold { .. } => {
                ErrorCategory::Framework
            }
            FigcompError::Io(_) | FigcompError::Config(_) => ErrorCategory::Config,
            FigcompError::Unknown(_) => ErrorCategory::Unknown,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        let remediation = match self {
            FigcompError::Io(_) => "Check the project directory path and write permissions.",
            FigcompError::Network(_) => "Check connectivity/proxy/VPN and retry.",
            FigcompError::InvalidLink(_) => {
                "Pass a Figma link like https://www.figma.com/design/<FILE_KEY>/Name?node-id=12-34."
            }
            FigcompError::FigmaApi { status, .. } => match status {
                Some(StatusCode::FORBIDDEN) | Some(StatusCode::UNAUTHORIZED) => {
                    "Check FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN) and that it can read this file."
                }
                Some(StatusCode::NOT_FOUND) => {
                    "Verify the file key in the link and that the file is shared with your account."
                }
                _ => "Check FIGMA_TOKEN/link and rate limits; retry after waiting.",
            },
            FigcompError::RateLimited(_) => "Wait for the rate limit window to pass and retry.",
            FigcompError::NodeNotFound(_) => {
                "Copy the link again with the frame selected so it carries the right node-id."
            }
            FigcompError::UnknownFramework(_) => {
                "Run inside a project whose package.json depends on react, vue or @angular/core, or pass --framework."
            }
            FigcompError::Scaffold { .. } => {
                "Install the Angular CLI (`npm i -g @angular/cli`) and run figcomp from the workspace root."
            }
            FigcompError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("figma_token") || lower.contains("figma token") {
                    "Set FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN) or pass --token."
                } else if lower.contains("scale") {
                    "Use an image scale greater than zero in the [image] config section."
                } else {
                    "Check flags/config file values (see --help)."
                }
            }
            FigcompError::Unknown(_) => "Re-run with --verbose; file an issue if persistent.",
        };

        ErrorPayload::new(self.category(), self.to_string(), remediation)
    }
}

impl From<ResourceParseError> for FigcompError {
    fn from(err: ResourceParseError) -> Self {
        FigcompError::InvalidLink(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FigcompError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Input,
    Network,
    Figma,
    Framework,
    Config,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
