//! Literal escaping and `DEFAULT` clause rendering.

use crate::types::CanonicalType;

/// Substrings that mark a default as a function call or keyword.
const FUNCTION_DEFAULTS: &[&str] = &[
    "current_timestamp",
    "now",
    "sysdate",
    "getdate",
    "systimestamp",
    "uuid",
    "gen_random_uuid",
    "newid",
    "sys_guid",
];

/// Doubles every single quote so the text can sit inside `'...'`.
///
/// Escape once, at render time. Escaped text must not be escaped again.
#[must_use]
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Wraps text in single quotes after escaping it.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_literal(value))
}

/// Returns whether a default looks like a function call or keyword.
///
/// Matching is a case-insensitive substring test, so `now()` and
/// `CURRENT_TIMESTAMP(3)` both match, and so does any text containing one
/// of the markers.
#[must_use]
pub fn is_function_default(value: &str) -> bool {
    let lowered = value.to_lowercase();
    FUNCTION_DEFAULTS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Renders ` DEFAULT <value>` for a constant default, or an empty string
/// when the value is blank.
///
/// Function-like values are never quoted. Character and temporal types get
/// a quoted literal. Every other type, custom ones included, gets the value
/// as entered.
#[must_use]
pub fn format_constant_default(canonical: &CanonicalType, raw_value: &str) -> String {
    let value = raw_value.trim();
    if value.is_empty() {
        return String::new();
    }

    if is_function_default(value) || !quotes_literals(canonical) {
        format!(" DEFAULT {value}")
    } else {
        format!(" DEFAULT {}", quote_literal(value))
    }
}

const fn quotes_literals(canonical: &CanonicalType) -> bool {
    canonical.is_character() || canonical.is_temporal()
}
