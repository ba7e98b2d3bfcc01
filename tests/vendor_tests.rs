//! Vendor adapter tests
//!
//! Envelope layouts and error taxonomies for every vendor family

use llmnorm::models::UsageStats;
use llmnorm::providers::{create_adapter, VendorAdapter, VendorKind};
use llmnorm::services::VendorRegistry;
use llmnorm::utils::error::{ErrorCategory, NormalizedError};
use serde_json::{json, Value};

fn classify(kind: VendorKind, envelope: Value) -> NormalizedError {
    let adapter = create_adapter(kind, kind.default_label());
    assert!(adapter.error_field_present(&envelope), "no error detected in {}", envelope);
    adapter.classify_error(&envelope)
}

#[test]
fn test_openai_error_taxonomy() {
    let cases = [
        ("rate_limit_exceeded", ErrorCategory::RateLimited, "OpenAI API rate limit exceeded"),
        ("tokens_rate_limit", ErrorCategory::RateLimited, "OpenAI API rate limit exceeded"),
        ("invalid_request_error", ErrorCategory::InvalidRequest, "Invalid request: boom"),
        ("authentication_error", ErrorCategory::AuthenticationFailed, "OpenAI API authentication failed"),
        ("server_error", ErrorCategory::Unknown, "OpenAI API error: server_error - boom"),
    ];

    for (error_type, category, message) in cases {
        let error = classify(VendorKind::OpenAI, json!({"error": {"type": error_type, "message": "boom"}}));
        assert_eq!(error.category, category, "type {}", error_type);
        assert_eq!(error.message, message);
    }
}

#[test]
fn test_rate_limit_checked_before_other_categories() {
    // A type string matching several indicators lands in the first bucket
    let error = classify(
        VendorKind::OpenAI,
        json!({"error": {"type": "invalid_request_error_rate_limit", "message": "x"}}),
    );
    assert_eq!(error.category, ErrorCategory::RateLimited);
}

#[test]
fn test_anthropic_error_taxonomy() {
    let envelope = json!({
        "type": "error",
        "error": {"type": "invalid_request_error", "message": "max_tokens: must be positive"}
    });
    let error = classify(VendorKind::Anthropic, envelope);
    assert_eq!(error.category, ErrorCategory::InvalidRequest);
    assert_eq!(error.message, "Invalid request: max_tokens: must be positive");

    let envelope = json!({"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}});
    let error = classify(VendorKind::Anthropic, envelope);
    assert_eq!(error.category, ErrorCategory::Unknown);
    assert_eq!(error.message, "Anthropic API error: overloaded_error - Overloaded");
}

#[test]
fn test_anthropic_error_marker_without_error_object() {
    let error = classify(VendorKind::Anthropic, json!({"type": "error"}));
    assert_eq!(error.category, ErrorCategory::Unknown);
    assert_eq!(error.message, "Anthropic API error: unknown - unknown");
}

#[test]
fn test_gemini_error_taxonomy() {
    let cases = [
        ("RESOURCE_EXHAUSTED", ErrorCategory::RateLimited),
        ("INVALID_ARGUMENT", ErrorCategory::InvalidRequest),
        ("UNAUTHENTICATED", ErrorCategory::AuthenticationFailed),
        ("PERMISSION_DENIED", ErrorCategory::AuthenticationFailed),
        ("INTERNAL", ErrorCategory::Unknown),
    ];

    for (status, category) in cases {
        let envelope = json!({"error": {"code": 400, "status": status, "message": "m"}});
        assert_eq!(classify(VendorKind::Gemini, envelope).category, category, "status {}", status);
    }
}

#[test]
fn test_ollama_string_error() {
    let error = classify(VendorKind::Ollama, json!({"error": "model \"llama9\" not found, try pulling it first"}));
    assert_eq!(error.category, ErrorCategory::Unknown);
    assert_eq!(
        error.message,
        "Ollama API error: unknown - model \"llama9\" not found, try pulling it first"
    );
}

#[test]
fn test_malformed_error_object_is_unknown() {
    for kind in [VendorKind::OpenAI, VendorKind::Anthropic, VendorKind::Gemini] {
        for error in [json!(null), json!(42), json!([]), json!({}), json!({"type": "", "message": ""})] {
            let classified = classify(kind, json!({ "error": error }));
            assert_eq!(classified.category, ErrorCategory::Unknown);
            assert!(classified.message.ends_with("unknown - unknown"), "{}", classified.message);
        }
    }
}

#[test]
fn test_content_paths() {
    let cases = [
        (VendorKind::OpenAI, json!({"choices": [{"message": {"content": "{\"a\":1}"}}]})),
        (VendorKind::Anthropic, json!({"content": [{"type": "text", "text": "{\"a\":1}"}]})),
        (VendorKind::Gemini, json!({"candidates": [{"content": {"parts": [{"text": "{\"a\":1}"}]}}]})),
        (VendorKind::Ollama, json!({"message": {"role": "assistant", "content": "{\"a\":1}"}})),
        (VendorKind::Ollama, json!({"response": "{\"a\":1}", "done": true})),
    ];

    for (kind, envelope) in cases {
        let adapter = create_adapter(kind, kind.default_label());
        assert!(!adapter.error_field_present(&envelope));
        assert_eq!(adapter.extract_content(&envelope).as_deref(), Some("{\"a\":1}"), "{}", envelope);
    }
}

#[test]
fn test_content_extraction_failures() {
    let cases = [
        (VendorKind::OpenAI, json!({})),
        (VendorKind::OpenAI, json!({"choices": "none"})),
        (VendorKind::OpenAI, json!({"choices": [{"message": {"content": null}}]})),
        (VendorKind::OpenAI, json!({"choices": [{"message": {"content": "   "}}]})),
        (VendorKind::Anthropic, json!({"content": []})),
        (VendorKind::Anthropic, json!({"content": [{"type": "text", "text": 7}]})),
        (VendorKind::Gemini, json!({"candidates": [{"finishReason": "SAFETY"}]})),
        (VendorKind::Ollama, json!({"message": {"role": "assistant"}})),
    ];

    for (kind, envelope) in cases {
        let adapter = create_adapter(kind, kind.default_label());
        assert_eq!(adapter.extract_content(&envelope), None, "{}", envelope);
    }
}

#[test]
fn test_usage_layouts() {
    let cases = [
        (VendorKind::OpenAI, json!({"usage": {"prompt_tokens": 11, "completion_tokens": 22}})),
        (VendorKind::Anthropic, json!({"usage": {"input_tokens": 11, "output_tokens": 22}})),
        (VendorKind::Gemini, json!({"usageMetadata": {"promptTokenCount": 11, "candidatesTokenCount": 22}})),
        (VendorKind::Ollama, json!({"prompt_eval_count": 11, "eval_count": 22})),
    ];

    for (kind, envelope) in cases {
        let adapter = create_adapter(kind, kind.default_label());
        assert_eq!(adapter.extract_usage(&envelope), Some(UsageStats::new(11, 22)), "{}", kind);
        assert_eq!(adapter.extract_usage(&json!({})), None, "{}", kind);
    }
}

#[test]
fn test_usage_degrades_to_zero() {
    let adapter = create_adapter(VendorKind::OpenAI, "OpenAI");
    let envelope = json!({"usage": {"prompt_tokens": -3, "completion_tokens": "12"}});
    assert_eq!(adapter.extract_usage(&envelope), Some(UsageStats::new(0, 0)));

    let envelope = json!({"usage": {"prompt_tokens": 5_000_000_000u64}});
    assert_eq!(adapter.extract_usage(&envelope), Some(UsageStats::new(0, 0)));

    let envelope = json!({"usage": {"prompt_tokens": 10.0, "completion_tokens": 3}});
    assert_eq!(adapter.extract_usage(&envelope), Some(UsageStats::new(10, 3)));
}

#[test]
fn test_label_flows_into_messages() {
    let registry = VendorRegistry::builtin();
    let envelope = json!({"error": {"type": "rate_limit_exceeded", "message": "x"}});

    let deepseek = registry.get("deepseek").unwrap();
    assert_eq!(deepseek.kind(), VendorKind::OpenAI);
    assert_eq!(deepseek.classify_error(&envelope).message, "DeepSeek API rate limit exceeded");

    let lmstudio = registry.get("LMStudio").unwrap();
    assert_eq!(lmstudio.classify_error(&envelope).message, "LM Studio API rate limit exceeded");
}

#[test]
fn test_vendor_kind_parsing() {
    assert_eq!("gemini".parse::<VendorKind>(), Ok(VendorKind::Gemini));
    assert_eq!("OpenAI".parse::<VendorKind>(), Ok(VendorKind::OpenAI));
    assert!("cohere".parse::<VendorKind>().is_err());
    assert_eq!(VendorKind::Ollama.to_string(), "ollama");
}
