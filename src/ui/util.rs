/// Shortens long hex strings to `0xf8d6...20c7`. Inputs of 10 chars or less pass through.
pub fn short_hex(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() <= 10 || !trimmed.is_ascii() {
        return trimmed.to_string();
    }
    let prefix = &trimmed[..6];
    let suffix = &trimmed[trimmed.len() - 4..];
    format!("{prefix}...{suffix}")
}
