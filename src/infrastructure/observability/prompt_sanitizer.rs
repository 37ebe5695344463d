const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens prompt or answer text for logging and masks anything that
/// looks like a credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let char_count = trimmed.chars().count();
    let sanitized = if char_count > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, char_count)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("x-api-key: ", "x-api-key: [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("sk-ant-", "[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
