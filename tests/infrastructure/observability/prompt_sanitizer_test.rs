use songsheet::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Lirik Lagu Bintang - Peterpan";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_multibyte_text_when_truncating_then_does_not_split_characters() {
    let prompt = "é".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("abc123xyz"));
}

#[test]
fn given_api_key_header_when_sanitizing_then_redacts_key() {
    let result = sanitize_prompt("x-api-key: sk-ant-secret123 rest");
    assert!(result.contains("x-api-key: [REDACTED]"));
    assert!(!result.contains("secret123"));
    assert!(result.ends_with(" rest"));
}

#[test]
fn given_query_api_key_when_sanitizing_then_redacts_value() {
    let result = sanitize_prompt("GET /v1?api_key=secret123&x=1");
    assert!(result.contains("api_key=[REDACTED]&x=1"));
}
