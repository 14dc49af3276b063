//! MySQL type rules.
//!
//! `timestamp(n)` renders as bare `TIMESTAMP`: the precision is dropped on
//! purpose and callers rely on the lossy form.

use super::MappingRule;
use crate::types::CanonicalType;

pub(super) fn rule(canonical: &CanonicalType) -> Option<MappingRule> {
    let rule = match canonical {
        CanonicalType::Varchar | CanonicalType::Nvarchar => MappingRule::sized("VARCHAR", &["255"]),
        CanonicalType::Char | CanonicalType::Nchar => MappingRule::sized("CHAR", &["1"]),
        CanonicalType::Text => MappingRule::plain("TEXT"),
        CanonicalType::Mediumtext => MappingRule::plain("MEDIUMTEXT"),
        CanonicalType::Longtext => MappingRule::plain("LONGTEXT"),

        CanonicalType::Int => MappingRule::unsigned("INT", &[]),
        CanonicalType::Tinyint => MappingRule::unsigned("TINYINT", &["1"]),
        CanonicalType::Smallint => MappingRule::unsigned("SMALLINT", &[]),
        CanonicalType::Bigint => MappingRule::unsigned("BIGINT", &[]),
        CanonicalType::Serial => MappingRule::Fixed("BIGINT UNSIGNED AUTO_INCREMENT"),

        CanonicalType::Decimal | CanonicalType::Number => {
            MappingRule::unsigned("DECIMAL", &["18", "2"])
        }
        CanonicalType::Float => MappingRule::unsigned("FLOAT", &[]),
        CanonicalType::Double | CanonicalType::Real => MappingRule::unsigned("DOUBLE", &[]),

        CanonicalType::Boolean => MappingRule::Fixed("TINYINT(1)"),
        CanonicalType::Bit => MappingRule::plain("BIT"),

        CanonicalType::Date => MappingRule::Fixed("DATE"),
        CanonicalType::Time | CanonicalType::Timetz => MappingRule::plain("TIME"),
        CanonicalType::Timestamp | CanonicalType::Timestamptz => MappingRule::Fixed("TIMESTAMP"),
        CanonicalType::Datetime | CanonicalType::Datetime2 => MappingRule::plain("DATETIME"),

        CanonicalType::Json | CanonicalType::Jsonb => MappingRule::Fixed("JSON"),
        CanonicalType::Xml => MappingRule::Fixed("LONGTEXT"),
        CanonicalType::Uuid => MappingRule::Fixed("CHAR(36)"),
        CanonicalType::Blob => MappingRule::plain("BLOB"),
        CanonicalType::Varbinary => MappingRule::sized("VARBINARY", &["255"]),

        CanonicalType::Custom(_) => return None,
    };
    Some(rule)
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::mapping::field_type_for;

    fn map(raw: &str) -> String {
        field_type_for(Dialect::MySql, raw)
    }

    #[test]
    fn test_mysql_character_types() {
        assert_eq!(map("varchar"), "VARCHAR(255)");
        assert_eq!(map("varchar(64)"), "VARCHAR(64)");
        assert_eq!(map("nvarchar"), "VARCHAR(255)");
        assert_eq!(map("char"), "CHAR(1)");
        assert_eq!(map("nchar(3)"), "CHAR(3)");
        assert_eq!(map("character varying(20)"), "VARCHAR(20)");
        assert_eq!(map("mediumtext"), "MEDIUMTEXT");
        assert_eq!(map("longtext"), "LONGTEXT");
    }

    #[test]
    fn test_mysql_numeric_types() {
        assert_eq!(map("int"), "INT");
        assert_eq!(map("integer unsigned"), "INT UNSIGNED");
        assert_eq!(map("int(11)"), "INT(11)");
        assert_eq!(map("tinyint"), "TINYINT(1)");
        assert_eq!(map("tinyint(4) unsigned"), "TINYINT(4) UNSIGNED");
        assert_eq!(map("decimal"), "DECIMAL(18, 2)");
        assert_eq!(map("numeric(10,4)"), "DECIMAL(10, 4)");
        assert_eq!(map("decimal(10,2) unsigned"), "DECIMAL(10, 2) UNSIGNED");
        assert_eq!(map("double precision"), "DOUBLE");
        assert_eq!(map("boolean"), "TINYINT(1)");
        assert_eq!(map("serial"), "BIGINT UNSIGNED AUTO_INCREMENT");
    }

    #[test]
    fn test_mysql_timestamp_precision_is_dropped() {
        assert_eq!(map("timestamp"), "TIMESTAMP");
        assert_eq!(map("timestamp(6)"), "TIMESTAMP");
        assert_eq!(map("datetime(3)"), "DATETIME(3)");
    }

    #[test]
    fn test_mysql_other_types() {
        assert_eq!(map("jsonb"), "JSON");
        assert_eq!(map("uuid"), "CHAR(36)");
        assert_eq!(map("varbinary"), "VARBINARY(255)");
        assert_eq!(map("bytea"), "BLOB");
    }
}
