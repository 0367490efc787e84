/// Blank or whitespace-only input counts as missing.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `None` for blank input; anything else is passed through exactly as typed.
pub fn optional_string(value: String) -> Option<String> {
    if is_blank(&value) {
        None
    } else {
        Some(value)
    }
}
