//! Seeking flags are stored as text; the domain works with `bool`.

pub const TRUE_TEXT: &str = "true";
pub const FALSE_TEXT: &str = "false";

/// Read a stored flag. Accepts the lenient set `y|yes|true|on|1`, case-insensitive.
pub fn decode(stored: Option<&str>) -> bool {
    match stored {
        Some(raw) => matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "true" | "on" | "1"
        ),
        None => false,
    }
}

/// Canonical stored text for a flag.
pub fn encode(flag: bool) -> String {
    if flag { TRUE_TEXT } else { FALSE_TEXT }.to_string()
}
