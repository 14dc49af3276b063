//! Canonical type identifiers and the alias table.

use core::fmt;

/// A dialect-neutral type identifier.
///
/// Unrecognized base types are kept as [`CanonicalType::Custom`] so that
/// vendor-specific types pass through rendering unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalType {
    // Character types
    Varchar,
    Nvarchar,
    Char,
    Nchar,
    Text,
    Mediumtext,
    Longtext,

    // Integer types
    Int,
    Tinyint,
    Smallint,
    Bigint,
    /// Auto-generated 64-bit key.
    Serial,

    // Exact and approximate numerics
    Decimal,
    /// Target of the `numeric` alias.
    Number,
    Float,
    Double,
    Real,

    // Boolean-like
    Boolean,
    Bit,

    // Date/time types
    Date,
    Time,
    Timetz,
    Timestamp,
    Timestamptz,
    Datetime,
    Datetime2,

    // Documents, identifiers and binary
    Json,
    Jsonb,
    Xml,
    Uuid,
    Blob,
    Varbinary,

    /// A base type with no alias, rendered verbatim.
    Custom(String),
}

/// Alternative spellings, looked up once before the canonical name itself.
const ALIASES: &[(&str, &str)] = &[
    ("integer", "int"),
    ("int4", "int"),
    ("int2", "smallint"),
    ("int8", "bigint"),
    ("bigserial", "serial"),
    ("numeric", "number"),
    ("number", "decimal"),
    ("dec", "decimal"),
    ("double precision", "double"),
    ("float8", "double"),
    ("float4", "real"),
    ("bool", "boolean"),
    ("character varying", "varchar"),
    ("varchar2", "varchar"),
    ("character", "char"),
    ("national character varying", "nvarchar"),
    ("nvarchar2", "nvarchar"),
    ("national character", "nchar"),
    ("tinytext", "text"),
    ("clob", "longtext"),
    ("timestamp without time zone", "timestamp"),
    ("timestamp with time zone", "timestamptz"),
    ("time without time zone", "time"),
    ("time with time zone", "timetz"),
    ("uniqueidentifier", "uuid"),
    ("bytea", "blob"),
    ("binary varying", "varbinary"),
];

/// Reduces a parsed base type to its canonical identifier.
///
/// The alias table is consulted once; a base type that is neither an alias
/// nor a canonical name comes back as [`CanonicalType::Custom`].
#[must_use]
pub fn canonicalize(base_type: &str) -> CanonicalType {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == base_type)
        .map_or(base_type, |&(_, canonical)| canonical);

    CanonicalType::from_name(name).unwrap_or_else(|| CanonicalType::Custom(base_type.to_string()))
}

impl CanonicalType {
    /// Looks up a canonical name (no alias resolution).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "varchar" => Self::Varchar,
            "nvarchar" => Self::Nvarchar,
            "char" => Self::Char,
            "nchar" => Self::Nchar,
            "text" => Self::Text,
            "mediumtext" => Self::Mediumtext,
            "longtext" => Self::Longtext,
            "int" => Self::Int,
            "tinyint" => Self::Tinyint,
            "smallint" => Self::Smallint,
            "bigint" => Self::Bigint,
            "serial" => Self::Serial,
            "decimal" => Self::Decimal,
            "number" => Self::Number,
            "float" => Self::Float,
            "double" => Self::Double,
            "real" => Self::Real,
            "boolean" => Self::Boolean,
            "bit" => Self::Bit,
            "date" => Self::Date,
            "time" => Self::Time,
            "timetz" => Self::Timetz,
            "timestamp" => Self::Timestamp,
            "timestamptz" => Self::Timestamptz,
            "datetime" => Self::Datetime,
            "datetime2" => Self::Datetime2,
            "json" => Self::Json,
            "jsonb" => Self::Jsonb,
            "xml" => Self::Xml,
            "uuid" => Self::Uuid,
            "blob" => Self::Blob,
            "varbinary" => Self::Varbinary,
            _ => return None,
        };
        Some(ty)
    }

    /// Returns the canonical identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Varchar => "varchar",
            Self::Nvarchar => "nvarchar",
            Self::Char => "char",
            Self::Nchar => "nchar",
            Self::Text => "text",
            Self::Mediumtext => "mediumtext",
            Self::Longtext => "longtext",
            Self::Int => "int",
            Self::Tinyint => "tinyint",
            Self::Smallint => "smallint",
            Self::Bigint => "bigint",
            Self::Serial => "serial",
            Self::Decimal => "decimal",
            Self::Number => "number",
            Self::Float => "float",
            Self::Double => "double",
            Self::Real => "real",
            Self::Boolean => "boolean",
            Self::Bit => "bit",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timetz => "timetz",
            Self::Timestamp => "timestamp",
            Self::Timestamptz => "timestamptz",
            Self::Datetime => "datetime",
            Self::Datetime2 => "datetime2",
            Self::Json => "json",
            Self::Jsonb => "jsonb",
            Self::Xml => "xml",
            Self::Uuid => "uuid",
            Self::Blob => "blob",
            Self::Varbinary => "varbinary",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Character-like types whose constant defaults are quoted.
    #[must_use]
    pub const fn is_character(&self) -> bool {
        matches!(
            self,
            Self::Varchar
                | Self::Nvarchar
                | Self::Char
                | Self::Nchar
                | Self::Text
                | Self::Mediumtext
                | Self::Longtext
        )
    }

    /// Date and time types.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date
                | Self::Time
                | Self::Timetz
                | Self::Timestamp
                | Self::Timestamptz
                | Self::Datetime
                | Self::Datetime2
        )
    }

    /// Integer types that can carry an auto-increment or identity.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Int | Self::Tinyint | Self::Smallint | Self::Bigint)
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
