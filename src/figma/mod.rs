//! Figma integration: the design node model and the REST client.
//!
//! This module provides:
//! - [`FigmaClient`] - HTTP client for the Figma REST API, usable as a [`crate::convert::DesignSource`]
//! - [`DesignNode`] and friends - the parsed node tree the converter walks
//! - [`normalize_node_id`] - display-form to API-form node id conversion

pub mod api_types;
pub mod client;

#[cfg(test)]
mod tests;

pub use api_types::{
    BoundingBox, Color, CounterAxisAlign, DesignNode, Effect, EffectType, FigmaImageExport,
    FigmaNodeWrapper, FigmaNodesResponse, ImageFormat, LayoutMode, LayoutWrap, NodeType, Paint,
    PrimaryAxisAlign, TypeStyle, Vector,
};
pub use client::{
    map_figma_error, FigmaAuth, FigmaClient, FigmaError, ImageExportOptions, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};

/// Convert a node id from the form shown in share links (`12-34`) to the form
/// the REST API expects (`12:34`). Ids already in API form pass through.
pub fn normalize_node_id(node_id: &str) -> String {
    node_id.trim().replace('-', ":")
}
