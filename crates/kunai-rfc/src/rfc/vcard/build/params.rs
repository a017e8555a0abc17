//! Property parameter formatting.

/// Formats a `;TYPE=` clause from type tokens.
///
/// Empty tokens are dropped; the remaining ones are comma-joined. Returns an
/// empty string when nothing is left.
#[must_use]
pub fn format_type_parameter(types: &[&str]) -> String {
    let tokens: Vec<&str> = types
        .iter()
        .copied()
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return String::new();
    }

    format!(";TYPE={}", tokens.join(","))
}

/// Formats the parameters of a repeated entry: its TYPE clause followed by
/// `;PREF=1` when preferred.
#[must_use]
pub fn entry_parameters(type_token: Option<&str>, preferred: bool) -> String {
    let mut params = type_token
        .map(|token| format_type_parameter(&[token]))
        .unwrap_or_default();

    if preferred {
        params.push_str(";PREF=1");
    }

    params
}
