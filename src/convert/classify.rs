//! Ordered classification rules: the first matching rule decides the role.

use crate::figma::{DesignNode, NodeType};

/// What a design node becomes in the generated markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticRole {
    Image,
    ImageContainer,
    Text,
    Label,
    Input,
    Table,
    TableHeadingCell,
    TableDataCell,
    Container,
    /// Reference to an already generated component with this name.
    ComponentReference(String),
    Empty,
}

/// First `-`-separated segment of a lower-cased layer name.
fn name_prefix(name: &str) -> &str {
    name.split('-').next().unwrap_or_default()
}

/// Classify `node`.
///
/// `existing_component` is consulted only for visible nodes, before any
/// other rule, and returns the component name to reference when the node
/// matches a previously generated component.
pub fn classify(
    node: &DesignNode,
    existing_component: impl FnOnce(&DesignNode) -> Option<String>,
) -> SemanticRole {
    if !node.visible {
        return SemanticRole::Empty;
    }
    if let Some(name) = existing_component(node) {
        return SemanticRole::ComponentReference(name);
    }

    let name = node.display_name().to_lowercase();
    match node.node_type {
        NodeType::Vector | NodeType::Instance => return SemanticRole::Image,
        _ if name == "logo" => return SemanticRole::Image,
        NodeType::Rectangle => return SemanticRole::ImageContainer,
        NodeType::Text => return SemanticRole::Text,
        _ => {}
    }

    match name_prefix(&name) {
        "label" => return SemanticRole::Label,
        "input" => return SemanticRole::Input,
        _ => {}
    }

    if name.contains("table") {
        SemanticRole::Table
    } else if name == "heading-content" {
        SemanticRole::TableHeadingCell
    } else if name == "data-content" {
        SemanticRole::TableDataCell
    } else if matches!(node.node_type, NodeType::Frame | NodeType::Group) {
        SemanticRole::Container
    } else {
        SemanticRole::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(node_type: NodeType, name: &str) -> DesignNode {
        DesignNode {
            id: "1:1".into(),
            name: name.into(),
            node_type,
            visible: true,
            ..Default::default()
        }
    }

    fn role(node_type: NodeType, name: &str) -> SemanticRole {
        classify(&node(node_type, name), |_| None)
    }

    #[test]
    fn invisible_nodes_skip_every_rule() {
        let mut hidden = node(NodeType::Frame, "Card");
        hidden.visible = false;
        let role = classify(&hidden, |_| panic!("reuse lookup on invisible node"));
        assert_eq!(role, SemanticRole::Empty);
    }

    #[test]
    fn existing_component_wins_over_type_rules() {
        let role = classify(&node(NodeType::Vector, "Icon"), |_| Some("Icon".into()));
        assert_eq!(role, SemanticRole::ComponentReference("Icon".into()));
    }

    #[test]
    fn type_rules_come_before_name_rules() {
        assert_eq!(role(NodeType::Vector, "input-icon"), SemanticRole::Image);
        assert_eq!(role(NodeType::Instance, "table"), SemanticRole::Image);
        assert_eq!(role(NodeType::Rectangle, "label-bg"), SemanticRole::ImageContainer);
        assert_eq!(role(NodeType::Text, "label-name"), SemanticRole::Text);
    }

    #[test]
    fn logo_name_is_an_image_for_any_type() {
        assert_eq!(role(NodeType::Frame, "LOGO"), SemanticRole::Image);
        assert_eq!(role(NodeType::Group, "logo-wrap"), SemanticRole::Container);
    }

    #[test]
    fn name_prefix_rules() {
        assert_eq!(role(NodeType::Frame, "Label-email"), SemanticRole::Label);
        assert_eq!(role(NodeType::Frame, "input-field"), SemanticRole::Input);
        assert_eq!(role(NodeType::Frame, "inputs"), SemanticRole::Container);
        assert_eq!(role(NodeType::Frame, "Orders Table"), SemanticRole::Table);
        assert_eq!(
            role(NodeType::Frame, "heading-content"),
            SemanticRole::TableHeadingCell
        );
        assert_eq!(
            role(NodeType::Frame, "Data-Content"),
            SemanticRole::TableDataCell
        );
    }

    #[test]
    fn unmatched_types_render_nothing() {
        assert_eq!(role(NodeType::Ellipse, "dot"), SemanticRole::Empty);
        assert_eq!(role(NodeType::Other, "star"), SemanticRole::Empty);
        assert_eq!(role(NodeType::Group, "row"), SemanticRole::Container);
    }
}
