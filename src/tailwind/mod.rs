//! Tailwind utility classes for a single design node.
//!
//! [`map_styles`] is pure: it reads the node's own visual properties and
//! never looks at children. Each property family has its own mapper so the
//! classifier can reuse pieces (an input borrows its text child's color).

pub mod color;
pub mod scale;

use std::fmt;

use crate::figma::{
    CounterAxisAlign, DesignNode, EffectType, LayoutMode, LayoutWrap, NodeType, PrimaryAxisAlign,
};

pub use color::{resolve_color, ColorTable, ColorToken};

/// Ordered, duplicate-free list of utility classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    tokens: Vec<String>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token unless it is empty or already present.
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token.is_empty() || self.contains(&token) {
            return;
        }
        self.tokens.push(token);
    }

    pub fn append(&mut self, other: StyleSet) {
        for token in other.tokens {
            self.push(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for StyleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StyleSet::new();
        for token in iter {
            set.push(token);
        }
        set
    }
}

/// All utility classes for `node`.
pub fn map_styles(node: &DesignNode) -> StyleSet {
    let mut styles = StyleSet::new();
    styles.append(size_classes(node));
    styles.append(padding_classes(node));
    styles.append(font_classes(node));
    styles.append(background_classes(node));
    styles.append(border_classes(node));
    styles.append(radius_classes(node));
    styles.append(shadow_classes(node));
    styles.append(layout_classes(node));
    styles.append(text_color_classes(node));
    styles.append(gap_classes(node));
    styles
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Width for every node; height only for icons and instances.
pub fn size_classes(node: &DesignNode) -> StyleSet {
    let mut styles = StyleSet::new();
    let Some(bounds) = node.absolute_bounding_box else {
        return styles;
    };

    if let Some(width) = nonzero(Some(bounds.width)) {
        styles.push(format!("w-{}", scale::spacing(width)));
    }
    if matches!(node.node_type, NodeType::Vector | NodeType::Instance) {
        if let Some(height) = nonzero(Some(bounds.height)) {
            styles.push(format!("h-{}", scale::spacing(height)));
        }
    }
    styles
}

/// Padding collapsed to `p-`, then `py-`/`px-`, then per side.
/// Unset sides are skipped; a zero side still counts.
pub fn padding_classes(node: &DesignNode) -> StyleSet {
    let [top, bottom, left, right] = [
        node.padding_top,
        node.padding_bottom,
        node.padding_left,
        node.padding_right,
    ]
    .map(|side| side.map(scale::spacing));

    let mut styles = StyleSet::new();
    match (&top, &bottom, &left, &right) {
        (Some(t), Some(b), Some(l), Some(r)) if t == b && t == l && t == r => {
            styles.push(format!("p-{t}"));
        }
        (Some(t), Some(b), Some(l), Some(r)) if t == b && l == r => {
            styles.push(format!("py-{t}"));
            styles.push(format!("px-{l}"));
        }
        _ => {
            for (prefix, side) in [("pt", &top), ("pb", &bottom), ("pl", &left), ("pr", &right)] {
                if let Some(value) = side {
                    styles.push(format!("{prefix}-{value}"));
                }
            }
        }
    }
    styles
}

pub fn gap_classes(node: &DesignNode) -> StyleSet {
    nonzero(node.item_spacing)
        .map(|gap| format!("gap-{}", scale::spacing(gap)))
        .into_iter()
        .collect()
}

pub fn radius_classes(node: &DesignNode) -> StyleSet {
    let token = match nonzero(node.corner_radius) {
        None => return StyleSet::new(),
        Some(radius) if radius == 4.0 => "rounded".to_string(),
        Some(radius) => format!("rounded-{}", scale::border_radius(radius)),
    };
    std::iter::once(token).collect()
}

pub fn font_classes(node: &DesignNode) -> StyleSet {
    let mut styles = StyleSet::new();
    let Some(style) = &node.style else {
        return styles;
    };

    if let Some(size) = nonzero(style.font_size) {
        styles.push(format!("text-{}", scale::font_size(size)));
    }
    if let Some(weight) = nonzero(style.font_weight).and_then(scale::font_weight) {
        styles.push(format!("font-{weight}"));
    }
    styles
}

pub fn background_classes(node: &DesignNode) -> StyleSet {
    node.background_color
        .map(|color| format!("bg-{}", resolve_color(&color, 1.0)))
        .into_iter()
        .collect()
}

/// First stroke only. Vectors draw their outline through fills.
pub fn border_classes(node: &DesignNode) -> StyleSet {
    let mut styles = StyleSet::new();
    if node.node_type == NodeType::Vector {
        return styles;
    }
    let Some(stroke) = node.strokes.first() else {
        return styles;
    };
    if let Some(color) = stroke.color {
        styles.push("border");
        styles.push(format!(
            "border-{}",
            resolve_color(&color, stroke.opacity.unwrap_or(1.0))
        ));
    }
    styles
}

/// Shadow bucket for the larger of blur radius and offset.
fn shadow_size(extent: f64) -> &'static str {
    match extent {
        e if e <= 1.0 => "shadow-sm",
        e if e <= 2.0 => "shadow",
        e if e <= 4.0 => "shadow-md",
        e if e <= 6.0 => "shadow-lg",
        e if e <= 8.0 => "shadow-xl",
        _ => "shadow-2xl",
    }
}

pub fn shadow_classes(node: &DesignNode) -> StyleSet {
    let mut styles = StyleSet::new();
    for effect in node
        .effects
        .iter()
        .filter(|e| e.effect_type == EffectType::DropShadow && e.visible)
    {
        let offset = effect.offset.unwrap_or_default();
        let blur = effect.radius.unwrap_or(0.0);
        let extent = blur.max(offset.x.abs().max(offset.y.abs()));
        styles.push(shadow_size(extent));
        if let Some(color) = effect.color {
            styles.push(format!("shadow-{}", resolve_color(&color, 1.0)));
        }
    }
    styles
}

pub fn layout_classes(node: &DesignNode) -> StyleSet {
    let mut styles = StyleSet::new();
    match node.layout_mode {
        Some(LayoutMode::Horizontal) => {
            styles.push("flex");
            styles.push("flex-row");
        }
        Some(LayoutMode::Vertical) => {
            styles.push("flex");
            styles.push("flex-col");
        }
        _ => {}
    }

    let justify = match node.primary_axis_align_items {
        Some(PrimaryAxisAlign::Center) => Some("justify-center"),
        Some(PrimaryAxisAlign::Min) => Some("justify-start"),
        Some(PrimaryAxisAlign::Max) => Some("justify-end"),
        Some(PrimaryAxisAlign::SpaceBetween) => Some("justify-between"),
        Some(PrimaryAxisAlign::SpaceAround) => Some("justify-around"),
        Some(PrimaryAxisAlign::SpaceEvenly) => Some("justify-evenly"),
        _ => None,
    };
    let items = match node.counter_axis_align_items {
        Some(CounterAxisAlign::Center) => Some("items-center"),
        Some(CounterAxisAlign::Min) => Some("items-start"),
        Some(CounterAxisAlign::Max) => Some("items-end"),
        _ => None,
    };
    for token in justify.into_iter().chain(items) {
        styles.push(token);
    }

    if node.layout_wrap == Some(LayoutWrap::Wrap) {
        styles.push("flex-wrap");
    }
    styles
}

/// Text color from the first fill of a TEXT node.
pub fn text_color_classes(node: &DesignNode) -> StyleSet {
    if node.node_type != NodeType::Text {
        return StyleSet::new();
    }
    node.fills
        .first()
        .and_then(|fill| fill.color)
        .map(|color| format!("text-{}", resolve_color(&color, 1.0)))
        .into_iter()
        .collect()
}
