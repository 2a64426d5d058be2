pub const NO_CODE_PLACEHOLDER: &str = "No Code Deployed To This Address";

/// Smallest balance units per FLOW.
pub const UNITS_PER_FLOW: u64 = 100_000_000;

/// Decodes deployed code for display. Empty input yields the placeholder;
/// invalid UTF-8 sequences become U+FFFD.
pub fn decode_code(code: &[u8]) -> String {
    if code.is_empty() {
        return NO_CODE_PLACEHOLDER.to_string();
    }
    if let Err(err) = std::str::from_utf8(code) {
        tracing::warn!(%err, len = code.len(), "deployed code is not valid UTF-8");
    }
    String::from_utf8_lossy(code).into_owned()
}

pub fn format_balance(balance: Option<u64>) -> String {
    let Some(units) = balance else {
        return "N/A".to_string();
    };
    let whole = units / UNITS_PER_FLOW;
    let fraction = units % UNITS_PER_FLOW;
    if fraction == 0 {
        return format!("{whole} FLOW");
    }
    let digits = format!("{fraction:08}");
    format!("{whole}.{} FLOW", digits.trim_end_matches('0'))
}
