//! SQL Server type rules.

use super::MappingRule;
use crate::types::CanonicalType;

pub(super) fn rule(canonical: &CanonicalType) -> Option<MappingRule> {
    let rule = match canonical {
        CanonicalType::Varchar => MappingRule::sized("VARCHAR", &["255"]),
        CanonicalType::Nvarchar => MappingRule::sized("NVARCHAR", &["255"]),
        CanonicalType::Char => MappingRule::sized("CHAR", &["1"]),
        CanonicalType::Nchar => MappingRule::sized("NCHAR", &["1"]),
        CanonicalType::Text | CanonicalType::Mediumtext | CanonicalType::Longtext => {
            MappingRule::Fixed("NVARCHAR(MAX)")
        }

        CanonicalType::Int => MappingRule::Fixed("INT"),
        CanonicalType::Tinyint => MappingRule::Fixed("TINYINT"),
        CanonicalType::Smallint => MappingRule::Fixed("SMALLINT"),
        CanonicalType::Bigint => MappingRule::Fixed("BIGINT"),
        CanonicalType::Serial => MappingRule::suffixed("BIGINT", "IDENTITY(1,1)"),

        CanonicalType::Decimal => MappingRule::sized("DECIMAL", &["18", "2"]),
        CanonicalType::Number => MappingRule::sized("NUMERIC", &["18", "2"]),
        CanonicalType::Float => MappingRule::plain("FLOAT"),
        CanonicalType::Double => MappingRule::Fixed("FLOAT(53)"),
        CanonicalType::Real => MappingRule::Fixed("REAL"),

        CanonicalType::Boolean | CanonicalType::Bit => MappingRule::Fixed("BIT"),

        CanonicalType::Date => MappingRule::Fixed("DATE"),
        CanonicalType::Time | CanonicalType::Timetz => MappingRule::plain("TIME"),
        CanonicalType::Timestamp | CanonicalType::Datetime | CanonicalType::Datetime2 => {
            MappingRule::plain("DATETIME2")
        }
        CanonicalType::Timestamptz => MappingRule::plain("DATETIMEOFFSET"),

        CanonicalType::Json | CanonicalType::Jsonb => MappingRule::Fixed("NVARCHAR(MAX)"),
        CanonicalType::Xml => MappingRule::Fixed("XML"),
        CanonicalType::Uuid => MappingRule::Fixed("UNIQUEIDENTIFIER"),
        CanonicalType::Blob => MappingRule::Fixed("VARBINARY(MAX)"),
        CanonicalType::Varbinary => MappingRule::sized("VARBINARY", &["max"]),

        CanonicalType::Custom(_) => return None,
    };
    Some(rule)
}
