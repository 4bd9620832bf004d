//! Figma API client for fetching node documents and rendered image URLs.

use crate::convert::DesignSource;
use crate::FigcompError;
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::api_types::{DesignNode, FigmaImageExport, FigmaNodesResponse, ImageFormat};

pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FigmaError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Figma API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Missing access token")]
    MissingToken,
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

pub fn map_figma_error(e: FigmaError) -> FigcompError {
    match e {
        FigmaError::Request(req_err) => FigcompError::Network(req_err),
        FigmaError::Api { status, message } => FigcompError::FigmaApi {
            status: Some(
                reqwest::StatusCode::from_u16(status)
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            ),
            message,
        },
        FigmaError::MissingToken => FigcompError::Config(
            "Missing Figma token; set FIGMA_TOKEN or FIGMA_OAUTH_TOKEN".to_string(),
        ),
        FigmaError::NodeNotFound(id) => FigcompError::NodeNotFound(id),
        FigmaError::RateLimited(secs) => FigcompError::RateLimited(secs),
    }
}

#[derive(Debug, Clone)]
pub enum FigmaAuth {
    PersonalAccessToken(String),
    OAuthToken(String),
}

impl FigmaAuth {
    pub fn from_env() -> Option<Self> {
        if let Ok(token) = std::env::var("FIGMA_TOKEN") {
            if !token.is_empty() {
                return Some(Self::PersonalAccessToken(token));
            }
        }

        if let Ok(token) = std::env::var("FIGMA_OAUTH_TOKEN") {
            if !token.is_empty() {
                return Some(Self::OAuthToken(token));
            }
        }

        None
    }

    fn token(&self) -> &str {
        match self {
            FigmaAuth::PersonalAccessToken(token) | FigmaAuth::OAuthToken(token) => token,
        }
    }

    fn headers(&self) -> Result<HeaderMap, FigmaError> {
        let mut headers = HeaderMap::new();
        match self {
            FigmaAuth::PersonalAccessToken(token) => {
                headers.insert(
                    reqwest::header::HeaderName::from_static("x-figma-token"),
                    HeaderValue::from_str(token).map_err(|_| FigmaError::MissingToken)?,
                );
            }
            FigmaAuth::OAuthToken(token) => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {}", token))
                        .map_err(|_| FigmaError::MissingToken)?,
                );
            }
        }
        Ok(headers)
    }
}

/// How rendered node images are requested from the images endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ImageExportOptions {
    pub scale: f32,
    pub format: ImageFormat,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            format: ImageFormat::Png,
        }
    }
}

#[derive(Debug)]
pub struct FigmaClient {
    client: reqwest::Client,
    base_url: String,
    image_options: ImageExportOptions,
}

impl FigmaClient {
    pub fn new(access_token: impl Into<String>) -> std::result::Result<Self, FigmaError> {
        Self::from_auth(FigmaAuth::PersonalAccessToken(access_token.into()))
    }

    pub fn from_auth(auth: FigmaAuth) -> std::result::Result<Self, FigmaError> {
        Self::with_base_url(auth, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_base_url(
        auth: FigmaAuth,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, FigmaError> {
        if auth.token().is_empty() {
            return Err(FigmaError::MissingToken);
        }

        let client = reqwest::Client::builder()
            .default_headers(auth.headers()?)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            image_options: ImageExportOptions::default(),
        })
    }

    pub fn with_image_options(mut self, options: ImageExportOptions) -> Self {
        self.image_options = options;
        self
    }

    pub async fn get_file_nodes(
        &self,
        file_key: &str,
        node_ids: &[&str],
    ) -> std::result::Result<FigmaNodesResponse, FigmaError> {
        let ids = node_ids.join(",");
        let url = format!("{}/files/{}/nodes?ids={}", self.base_url, file_key, ids);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the subtree rooted at `node_id`.
    pub async fn get_node_document(
        &self,
        file_key: &str,
        node_id: &str,
    ) -> std::result::Result<DesignNode, FigmaError> {
        let mut response = self.get_file_nodes(file_key, &[node_id]).await?;

        response
            .nodes
            .remove(node_id)
            .flatten()
            .map(|wrapper| wrapper.document)
            .ok_or_else(|| FigmaError::NodeNotFound(node_id.to_string()))
    }

    /// Ask Figma to render a node and return the temporary image URL, if any.
    pub async fn export_image(
        &self,
        file_key: &str,
        node_id: &str,
    ) -> std::result::Result<Option<String>, FigmaError> {
        let url = format!(
            "{}/images/{}?ids={}&format={}&scale={}",
            self.base_url,
            file_key,
            node_id,
            self.image_options.format.as_str(),
            self.image_options.scale
        );

        let response = self.client.get(&url).send().await?;
        let mut export: FigmaImageExport = self.handle_response(response).await?;

        if let Some(err) = export.err.take() {
            return Err(FigmaError::Api {
                status: 200,
                message: err,
            });
        }

        Ok(export.images.remove(node_id).flatten())
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<T, FigmaError> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(FigmaError::RateLimited(retry_after));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FigmaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

impl DesignSource for FigmaClient {
    fn fetch_document<'a>(
        &'a self,
        file_key: &'a str,
        node_id: &'a str,
    ) -> BoxFuture<'a, crate::Result<DesignNode>> {
        async move {
            self.get_node_document(file_key, node_id)
                .await
                .map_err(map_figma_error)
        }
        .boxed()
    }

    fn fetch_image_url<'a>(
        &'a self,
        file_key: &'a str,
        node_id: &'a str,
    ) -> BoxFuture<'a, crate::Result<Option<String>>> {
        async move {
            self.export_image(file_key, node_id)
                .await
                .map_err(map_figma_error)
        }
        .boxed()
    }
}
