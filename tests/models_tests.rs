//! Data model tests

use llmnorm::models::{GraphCode, GraphTranslation, TranslationResponse, UsageStats};
use serde_json::json;

fn sample_graph(name: &str) -> GraphTranslation {
    GraphTranslation {
        graph_name: name.to_string(),
        graph_type: "Function".to_string(),
        graph_class: "BP_Player".to_string(),
        code: GraphCode {
            graph_declaration: format!("void {}();", name),
            graph_implementation: format!("void ABP_Player::{}() {{}}", name),
            implementation_notes: String::new(),
        },
    }
}

#[test]
fn test_usage_stats() {
    let usage = UsageStats::new(1200, 300);
    assert_eq!(usage.total_tokens(), 1500);
    assert_eq!(UsageStats::default().total_tokens(), 0);
    assert_eq!(UsageStats::new(u32::MAX, 1).total_tokens(), u32::MAX);
}

#[test]
fn test_translation_response_serialization() {
    let response = TranslationResponse {
        graphs: vec![sample_graph("Jump")],
        usage: UsageStats::new(10, 20),
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["graphs"][0]["graph_name"], "Jump");
    assert_eq!(value["graphs"][0]["code"]["graphDeclaration"], "void Jump();");
    assert_eq!(value["graphs"][0]["code"]["graphImplementation"], "void ABP_Player::Jump() {}");
    assert_eq!(value["usage"], json!({"input_tokens": 10, "output_tokens": 20}));

    let parsed: TranslationResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, response);
}

#[test]
fn test_optional_fields_default() {
    let value = json!({
        "graphs": [{
            "graph_name": "Crouch",
            "graph_type": "Macro",
            "code": {"graphDeclaration": "", "graphImplementation": "Crouch();"}
        }]
    });

    let response: TranslationResponse = serde_json::from_value(value).unwrap();
    let graph = response.graph("Crouch").unwrap();

    assert_eq!(graph.graph_class, "");
    assert_eq!(graph.code.implementation_notes, "");
    assert_eq!(response.usage, UsageStats::default());
}

#[test]
fn test_graph_lookup() {
    let response = TranslationResponse {
        graphs: vec![sample_graph("Jump"), sample_graph("Fire")],
        usage: UsageStats::default(),
    };

    assert_eq!(response.graph("Fire").map(|g| g.graph_name.as_str()), Some("Fire"));
    assert!(response.graph("fire").is_none());
}
