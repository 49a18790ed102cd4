use serde_json::Value;

/// Cleaned, still-untyped input for a product save. `None` means the field
/// was absent, not a scalar, or empty after cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanitizedProductData {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
}

/// Reduce an untrusted payload to the recognized product fields. Unrecognized
/// fields are dropped silently; the transform has no side effects.
pub fn sanitize_product_data(data: &Value) -> SanitizedProductData {
    SanitizedProductData {
        name: scalar(data, "name").map(|raw| strip_tags(raw.trim())).filter(|s| !s.is_empty()),
        quantity: scalar(data, "quantity")
            .map(|raw| keep_chars(&raw, |c| c.is_ascii_digit() || c == '-' || c == '+'))
            .filter(|s| !s.is_empty()),
        price: scalar(data, "price")
            .map(|raw| keep_chars(&raw, |c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.'))
            .filter(|s| !s.is_empty()),
        status: scalar(data, "status").map(|raw| strip_tags(raw.trim())).filter(|s| !s.is_empty()),
    }
}

fn scalar(data: &Value, field: &str) -> Option<String> {
    match data.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn keep_chars(raw: &str, keep: impl Fn(char) -> bool) -> String {
    raw.chars().filter(|c| keep(*c)).collect()
}

/// Remove `<...>` tag sequences. An unterminated tag swallows the rest of the
/// input, matching the usual tag-stripping semantics.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {},
        }
    }
    out
}
