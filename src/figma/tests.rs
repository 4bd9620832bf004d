//! Tests for Figma node parsing and the client.

use crate::figma::api_types::{
    CounterAxisAlign, DesignNode, EffectType, FigmaNodesResponse, ImageFormat, LayoutMode,
    NodeType, PrimaryAxisAlign,
};
use crate::figma::client::{FigmaAuth, FigmaClient, FigmaError};
use crate::figma::normalize_node_id;
use serde_json::json;
use std::time::Duration;

fn node(value: serde_json::Value) -> DesignNode {
    serde_json::from_value(value).expect("valid node json")
}

#[test]
fn test_figma_client_missing_token() {
    let result = FigmaClient::new("");
    assert!(matches!(result.unwrap_err(), FigmaError::MissingToken));
}

#[test]
fn test_image_format_as_str() {
    assert_eq!(ImageFormat::Png.as_str(), "png");
    assert_eq!(ImageFormat::Jpg.as_str(), "jpg");
    assert_eq!(ImageFormat::Svg.as_str(), "svg");
}

#[test]
fn test_normalize_node_id() {
    assert_eq!(normalize_node_id("12-34"), "12:34");
    assert_eq!(normalize_node_id("12:34"), "12:34");
    assert_eq!(normalize_node_id("I5-6;7-8"), "I5:6;7:8");
}

#[tokio::test]
async fn export_image_propagates_request_error() {
    let client = FigmaClient::with_base_url(
        FigmaAuth::PersonalAccessToken("token".into()),
        "http://127.0.0.1:1/v1",
        Duration::from_secs(2),
    )
    .expect("client");

    let result = client.export_image("FILE", "1:2").await;

    assert!(
        matches!(result, Err(FigmaError::Request(_))),
        "expected request error, got {:?}",
        result
    );
}

#[test]
fn parses_layout_and_visual_properties() {
    let frame = node(json!({
        "id": "1:2",
        "name": "Card",
        "type": "FRAME",
        "layoutMode": "VERTICAL",
        "primaryAxisAlignItems": "SPACE_BETWEEN",
        "counterAxisAlignItems": "BASELINE",
        "layoutWrap": "WRAP",
        "paddingTop": 8,
        "itemSpacing": 12.5,
        "cornerRadius": 6,
        "effects": [
            { "type": "DROP_SHADOW", "visible": true, "radius": 4,
              "offset": { "x": 0, "y": 2 },
              "color": { "r": 0, "g": 0, "b": 0, "a": 0.25 } },
            { "type": "LAYER_BLUR", "visible": true, "radius": 2 }
        ],
        "strokes": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }],
        "children": []
    }));

    assert_eq!(frame.node_type, NodeType::Frame);
    assert!(frame.visible);
    assert_eq!(frame.layout_mode, Some(LayoutMode::Vertical));
    assert_eq!(
        frame.primary_axis_align_items,
        Some(PrimaryAxisAlign::SpaceBetween)
    );
    assert_eq!(
        frame.counter_axis_align_items,
        Some(CounterAxisAlign::Baseline)
    );
    assert_eq!(frame.padding_top, Some(8.0));
    assert!(frame.padding_bottom.is_none());
    assert_eq!(frame.effects.len(), 2);
    assert_eq!(frame.effects[0].effect_type, EffectType::DropShadow);
    assert_eq!(frame.effects[1].effect_type, EffectType::LayerBlur);
    let stroke_color = frame.strokes[0].color.expect("stroke color");
    assert!((stroke_color.a - 1.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_node_types_parse_as_other() {
    let star = node(json!({ "id": "1", "name": "Star", "type": "STAR" }));
    assert_eq!(star.node_type, NodeType::Other);
}

#[test]
fn invisible_flag_is_read() {
    let hidden = node(json!({ "id": "1", "name": "x", "type": "TEXT", "visible": false }));
    assert!(!hidden.visible);
}

#[test]
fn sort_children_orders_top_to_bottom_then_left_to_right() {
    let mut root = node(json!({
        "id": "0:1",
        "name": "Root",
        "type": "FRAME",
        "children": [
            { "id": "a", "name": "a", "type": "TEXT", "absoluteBoundingBox": { "x": 50, "y": 10, "width": 1, "height": 1 } },
            { "id": "b", "name": "b", "type": "TEXT", "absoluteBoundingBox": { "x": 0, "y": 40, "width": 1, "height": 1 } },
            { "id": "c", "name": "c", "type": "TEXT", "absoluteBoundingBox": { "x": 10, "y": 10, "width": 1, "height": 1 } },
            { "id": "d", "name": "d", "type": "TEXT" }
        ]
    }));

    root.sort_children_by_position();

    let order: Vec<&str> = root.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["d", "c", "a", "b"]);
}

#[test]
fn nodes_response_tolerates_null_entries() {
    let response: FigmaNodesResponse = serde_json::from_value(json!({
        "name": "File",
        "nodes": { "1:2": null }
    }))
    .expect("nodes response");

    assert!(response.nodes.get("1:2").expect("entry").is_none());
}

#[test]
fn display_name_defaults_to_unnamed() {
    let unnamed = node(json!({ "id": "1", "type": "FRAME" }));
    assert_eq!(unnamed.display_name(), "Unnamed");
}
