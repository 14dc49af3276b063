//! PostgreSQL type rules.

use super::{MappingRule, with_precision};
use crate::types::{CanonicalType, ParsedType};

fn time(parsed: &ParsedType) -> String {
    with_precision("TIME", parsed, "WITHOUT TIME ZONE")
}

fn timetz(parsed: &ParsedType) -> String {
    with_precision("TIME", parsed, "WITH TIME ZONE")
}

fn timestamp(parsed: &ParsedType) -> String {
    with_precision("TIMESTAMP", parsed, "WITHOUT TIME ZONE")
}

fn timestamptz(parsed: &ParsedType) -> String {
    with_precision("TIMESTAMP", parsed, "WITH TIME ZONE")
}

pub(super) fn rule(canonical: &CanonicalType) -> Option<MappingRule> {
    let rule = match canonical {
        CanonicalType::Varchar | CanonicalType::Nvarchar => MappingRule::plain("VARCHAR"),
        CanonicalType::Char | CanonicalType::Nchar => MappingRule::plain("CHAR"),
        CanonicalType::Text | CanonicalType::Mediumtext | CanonicalType::Longtext => {
            MappingRule::Fixed("TEXT")
        }

        // No display widths on PostgreSQL integers.
        CanonicalType::Int => MappingRule::Fixed("INTEGER"),
        CanonicalType::Tinyint | CanonicalType::Smallint => MappingRule::Fixed("SMALLINT"),
        CanonicalType::Bigint => MappingRule::Fixed("BIGINT"),
        CanonicalType::Serial => MappingRule::Fixed("BIGSERIAL"),

        CanonicalType::Decimal => MappingRule::sized("DECIMAL", &["18", "2"]),
        CanonicalType::Number => MappingRule::sized("NUMERIC", &["18", "2"]),
        CanonicalType::Float | CanonicalType::Double => MappingRule::Fixed("DOUBLE PRECISION"),
        CanonicalType::Real => MappingRule::Fixed("REAL"),

        CanonicalType::Boolean | CanonicalType::Bit => MappingRule::Fixed("BOOLEAN"),

        CanonicalType::Date => MappingRule::Fixed("DATE"),
        CanonicalType::Time => MappingRule::Transform(time),
        CanonicalType::Timetz => MappingRule::Transform(timetz),
        CanonicalType::Timestamp | CanonicalType::Datetime | CanonicalType::Datetime2 => {
            MappingRule::Transform(timestamp)
        }
        CanonicalType::Timestamptz => MappingRule::Transform(timestamptz),

        CanonicalType::Json | CanonicalType::Jsonb => MappingRule::Fixed("JSONB"),
        CanonicalType::Xml => MappingRule::Fixed("XML"),
        CanonicalType::Uuid => MappingRule::Fixed("UUID"),
        CanonicalType::Blob | CanonicalType::Varbinary => MappingRule::Fixed("BYTEA"),

        CanonicalType::Custom(_) => return None,
    };
    Some(rule)
}

#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::mapping::field_type_for;

    fn map(raw: &str) -> String {
        field_type_for(Dialect::PostgreSql, raw)
    }

    #[test]
    fn test_postgres_integers_have_no_length() {
        assert_eq!(map("int"), "INTEGER");
        assert_eq!(map("int(11) unsigned"), "INTEGER");
        assert_eq!(map("tinyint(1)"), "SMALLINT");
        assert_eq!(map("smallint"), "SMALLINT");
        assert_eq!(map("bigint(20)"), "BIGINT");
    }

    #[test]
    fn test_postgres_numeric_types() {
        assert_eq!(map("decimal"), "DECIMAL(18, 2)");
        assert_eq!(map("decimal(8,3)"), "DECIMAL(8, 3)");
        assert_eq!(map("numeric"), "NUMERIC(18, 2)");
        assert_eq!(map("float"), "DOUBLE PRECISION");
        assert_eq!(map("double"), "DOUBLE PRECISION");
        assert_eq!(map("bit"), "BOOLEAN");
        assert_eq!(map("boolean"), "BOOLEAN");
    }

    #[test]
    fn test_postgres_time_zones_are_explicit() {
        assert_eq!(map("time"), "TIME WITHOUT TIME ZONE");
        assert_eq!(map("time with time zone"), "TIME WITH TIME ZONE");
        assert_eq!(map("timestamp"), "TIMESTAMP WITHOUT TIME ZONE");
        assert_eq!(map("timestamp(3)"), "TIMESTAMP(3) WITHOUT TIME ZONE");
        assert_eq!(map("datetime"), "TIMESTAMP WITHOUT TIME ZONE");
        assert_eq!(map("timestamptz"), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(
            map("timestamp(6) with time zone"),
            "TIMESTAMP(6) WITH TIME ZONE"
        );
        assert_eq!(map("date"), "DATE");
    }

    #[test]
    fn test_postgres_text_and_documents() {
        assert_eq!(map("varchar(80)"), "VARCHAR(80)");
        assert_eq!(map("longtext"), "TEXT");
        assert_eq!(map("mediumtext"), "TEXT");
        assert_eq!(map("json"), "JSONB");
        assert_eq!(map("uuid"), "UUID");
        assert_eq!(map("blob"), "BYTEA");
    }
}
