//! Oracle type rules.

use super::{MappingRule, with_precision};
use crate::types::{CanonicalType, ParsedType};

fn timestamptz(parsed: &ParsedType) -> String {
    with_precision("TIMESTAMP", parsed, "WITH TIME ZONE")
}

pub(super) fn rule(canonical: &CanonicalType) -> Option<MappingRule> {
    let rule = match canonical {
        CanonicalType::Varchar => MappingRule::sized("VARCHAR2", &["255"]),
        CanonicalType::Nvarchar => MappingRule::sized("NVARCHAR2", &["255"]),
        CanonicalType::Char => MappingRule::sized("CHAR", &["1"]),
        CanonicalType::Nchar => MappingRule::sized("NCHAR", &["1"]),
        CanonicalType::Text
        | CanonicalType::Mediumtext
        | CanonicalType::Longtext
        | CanonicalType::Json
        | CanonicalType::Jsonb => MappingRule::Fixed("CLOB"),

        // Fixed precision wide enough for the source range.
        CanonicalType::Int => MappingRule::Fixed("NUMBER(10)"),
        CanonicalType::Tinyint => MappingRule::Fixed("NUMBER(3)"),
        CanonicalType::Smallint => MappingRule::Fixed("NUMBER(5)"),
        CanonicalType::Bigint => MappingRule::Fixed("NUMBER(19)"),
        CanonicalType::Serial => MappingRule::Fixed("NUMBER GENERATED ALWAYS AS IDENTITY"),

        CanonicalType::Decimal | CanonicalType::Number => {
            MappingRule::sized("NUMBER", &["18", "2"])
        }
        CanonicalType::Float => MappingRule::plain("FLOAT"),
        CanonicalType::Double => MappingRule::Fixed("BINARY_DOUBLE"),
        CanonicalType::Real => MappingRule::Fixed("BINARY_FLOAT"),

        CanonicalType::Boolean | CanonicalType::Bit => MappingRule::Fixed("NUMBER(1)"),

        CanonicalType::Date => MappingRule::Fixed("DATE"),
        CanonicalType::Time
        | CanonicalType::Timestamp
        | CanonicalType::Datetime
        | CanonicalType::Datetime2 => MappingRule::plain("TIMESTAMP"),
        CanonicalType::Timetz | CanonicalType::Timestamptz => MappingRule::Transform(timestamptz),

        CanonicalType::Xml => MappingRule::Fixed("XMLTYPE"),
        CanonicalType::Uuid => MappingRule::Fixed("CHAR(36)"),
        CanonicalType::Blob => MappingRule::Fixed("BLOB"),
        CanonicalType::Varbinary => MappingRule::sized("RAW", &["2000"]),

        CanonicalType::Custom(_) => return None,
    };
    Some(rule)
}
