//! Per-dialect feature predicates over canonical types.

use crate::dialect::Dialect;
use crate::types::CanonicalType;

/// Returns whether a column of this type can carry the dialect's
/// auto-increment or identity suffix.
///
/// PostgreSQL and Oracle never get a suffix; `serial` already renders its
/// own generation clause everywhere.
#[must_use]
pub const fn supports_auto_increment(dialect: Dialect, canonical: &CanonicalType) -> bool {
    match dialect {
        Dialect::MySql | Dialect::SqlServer => canonical.is_integer(),
        Dialect::PostgreSql | Dialect::Oracle => false,
    }
}

/// Returns whether `DEFAULT CURRENT_TIMESTAMP` is valid for this type.
#[must_use]
pub const fn supports_current_timestamp(dialect: Dialect, canonical: &CanonicalType) -> bool {
    match dialect {
        Dialect::MySql => matches!(
            canonical,
            CanonicalType::Timestamp
                | CanonicalType::Timestamptz
                | CanonicalType::Datetime
                | CanonicalType::Datetime2
        ),
        Dialect::PostgreSql | Dialect::SqlServer | Dialect::Oracle => canonical.is_temporal(),
    }
}

/// Returns whether `ON UPDATE CURRENT_TIMESTAMP` is valid for this type.
/// Only MySQL has the clause.
#[must_use]
pub const fn supports_on_update_current_timestamp(
    dialect: Dialect,
    canonical: &CanonicalType,
) -> bool {
    matches!(dialect, Dialect::MySql) && supports_current_timestamp(dialect, canonical)
}

/// Returns the expression that generates a UUID default, if the dialect
/// can generate one for this type.
#[must_use]
pub const fn uuid_default(dialect: Dialect, canonical: &CanonicalType) -> Option<&'static str> {
    if !matches!(canonical, CanonicalType::Uuid) {
        return None;
    }
    match dialect {
        Dialect::MySql => Some("(UUID())"),
        Dialect::PostgreSql => Some("gen_random_uuid()"),
        Dialect::SqlServer => Some("NEWID()"),
        Dialect::Oracle => None,
    }
}
