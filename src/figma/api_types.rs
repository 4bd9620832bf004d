//! Figma API response types for parsing JSON from the Figma REST API.
//!
//! Only the properties the style mapper and the classifier read are modelled;
//! everything else in the payload is ignored by serde.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Supported image export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Svg,
    Pdf,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

/// Figma node type. Types the converter never branches on collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Text,
    Vector,
    BooleanOperation,
    Ellipse,
    Line,
    Rectangle,
    Component,
    ComponentSet,
    Instance,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Min,
    Center,
    Max,
    Baseline,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrap {
    NoWrap,
    Wrap,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

/// A node of the design document tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub absolute_bounding_box: Option<BoundingBox>,
    pub layout_mode: Option<LayoutMode>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub item_spacing: Option<f64>,
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    pub layout_wrap: Option<LayoutWrap>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    pub corner_radius: Option<f64>,
    pub background_color: Option<Color>,
    pub characters: Option<String>,
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

fn default_true() -> bool {
    true
}

impl DesignNode {
    /// Layer name, with Figma's unnamed layers reported as "Unnamed".
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }

    pub fn first_text_child(&self) -> Option<&DesignNode> {
        self.children
            .iter()
            .find(|child| child.node_type == NodeType::Text)
    }

    /// Stable sort of the immediate children: top-to-bottom, then left-to-right.
    /// Children without a bounding box sort as if placed at the origin.
    pub fn sort_children_by_position(&mut self) {
        self.children.sort_by(|a, b| {
            let (ax, ay) = a.position();
            let (bx, by) = b.position();
            ay.partial_cmp(&by)
                .unwrap_or(Ordering::Equal)
                .then(ax.partial_cmp(&bx).unwrap_or(Ordering::Equal))
        });
    }

    fn position(&self) -> (f64, f64) {
        self.absolute_bounding_box
            .as_ref()
            .map(|bb| (bb.x, bb.y))
            .unwrap_or((0.0, 0.0))
    }
}

/// Bounding box coordinates from Figma.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Typography style from Figma.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
}

/// Paint used for fills and strokes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: Option<String>,
    pub color: Option<Color>,
    pub opacity: Option<f64>,
}

/// Visual effect (shadows and blurs).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default)]
    pub visible: bool,
    pub radius: Option<f64>,
    pub offset: Option<Vector>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// RGBA color from Figma (0.0-1.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

/// Response from the nodes endpoint. Figma reports unknown ids as `null`.
#[derive(Debug, Deserialize)]
pub struct FigmaNodesResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: HashMap<String, Option<FigmaNodeWrapper>>,
}

/// Wrapper containing the document for a node.
#[derive(Debug, Deserialize)]
pub struct FigmaNodeWrapper {
    pub document: DesignNode,
}

/// Response from the images export endpoint. Nodes that failed to render map to `null`.
#[derive(Debug, Deserialize)]
pub struct FigmaImageExport {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}
