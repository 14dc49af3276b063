//! Pre-synthesis checks a caller can surface as warnings.
//!
//! The synthesizer itself renders whatever it is given; these checks let
//! a caller flag identifiers that need attention before generating SQL.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::dialect::Dialect;
use crate::schema::{NormalizedField, TableDefinition};

/// Reserved in every supported dialect.
const COMMON_RESERVED: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CHECK", "COLUMN",
    "CONSTRAINT", "CREATE", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_USER", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS",
    "FOREIGN", "FROM", "FULL", "GRANT", "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT",
    "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "NOT", "NULL", "ON", "OR", "ORDER",
    "OUTER", "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET", "TABLE", "THEN", "TO", "UNION",
    "UNIQUE", "UPDATE", "USER", "VALUES", "WHEN", "WHERE", "WITH",
];

const MYSQL_RESERVED: &[&str] = &[
    "ACCESSIBLE", "ANALYZE", "CHANGE", "DATABASE", "DATABASES", "DELAYED", "DESCRIBE", "DIV",
    "DUAL", "ENCLOSED", "EXPLAIN", "FULLTEXT", "GROUPS", "IGNORE", "INTERVAL", "KEYS", "KILL",
    "LIMIT", "LOAD", "LOCK", "LONG", "MATCH", "MOD", "OPTIMIZE", "PURGE", "RANGE", "RANK", "READ",
    "REGEXP", "RENAME", "REPLACE", "RLIKE", "ROW", "ROWS", "SCHEMA", "SHOW", "SPATIAL", "SQL",
    "STRAIGHT_JOIN", "UNLOCK", "UNSIGNED", "USAGE", "USE", "WINDOW", "WRITE", "XOR", "ZEROFILL",
];

const POSTGRES_RESERVED: &[&str] = &[
    "ANALYSE", "ANALYZE", "ARRAY", "ASYMMETRIC", "BOTH", "CAST", "COLLATE", "CURRENT_ROLE",
    "DEFERRABLE", "DO", "FETCH", "FOR", "INITIALLY", "LATERAL", "LEADING", "LIMIT", "LOCALTIME",
    "LOCALTIMESTAMP", "OFFSET", "ONLY", "PLACING", "RETURNING", "SESSION_USER", "SOME",
    "SYMMETRIC", "TRAILING", "USING", "VARIADIC", "WINDOW",
];

const SQLSERVER_RESERVED: &[&str] = &[
    "BACKUP", "BEGIN", "BREAK", "BROWSE", "BULK", "CHECKPOINT", "CLUSTERED", "COMPUTE",
    "CONTAINS", "CONTINUE", "DATABASE", "DBCC", "DEALLOCATE", "DENY", "DISK", "DUMP", "ERRLVL",
    "EXEC", "EXECUTE", "EXIT", "FILE", "FILLFACTOR", "FREETEXT", "FUNCTION", "GOTO", "HOLDLOCK",
    "IDENTITY", "IDENTITY_INSERT", "IF", "KILL", "LINENO", "MERGE", "NOCHECK", "NONCLUSTERED",
    "OFF", "OFFSETS", "OPEN", "OVER", "PERCENT", "PIVOT", "PLAN", "PRINT", "PROC", "PROCEDURE",
    "PUBLIC", "RAISERROR", "READ", "RETURN", "REVERT", "REVOKE", "ROWCOUNT", "RULE", "SAVE",
    "SCHEMA", "SHUTDOWN", "STATISTICS", "TOP", "TRAN", "TRANSACTION", "TRIGGER", "TRUNCATE",
    "TSEQUAL", "UNPIVOT", "USE", "VIEW", "WAITFOR", "WHILE",
];

const ORACLE_RESERVED: &[&str] = &[
    "ACCESS", "AUDIT", "CLUSTER", "COMMENT", "COMPRESS", "CONNECT", "DATE", "DECIMAL",
    "EXCLUSIVE", "FILE", "FLOAT", "IDENTIFIED", "IMMEDIATE", "INCREMENT", "INITIAL", "INTEGER",
    "LEVEL", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MLSLABEL", "MODE", "MODIFY", "NOAUDIT",
    "NOCOMPRESS", "NOWAIT", "NUMBER", "OF", "OFFLINE", "ONLINE", "OPTION", "PCTFREE", "PRIOR",
    "PUBLIC", "RAW", "RENAME", "RESOURCE", "REVOKE", "ROW", "ROWID", "ROWNUM", "ROWS", "SESSION",
    "SHARE", "SIZE", "SMALLINT", "START", "SUCCESSFUL", "SYNONYM", "SYSDATE", "TRIGGER", "UID",
    "VALIDATE", "VARCHAR", "VARCHAR2", "VIEW", "WHENEVER",
];

const fn dialect_reserved(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::MySql => MYSQL_RESERVED,
        Dialect::PostgreSql => POSTGRES_RESERVED,
        Dialect::SqlServer => SQLSERVER_RESERVED,
        Dialect::Oracle => ORACLE_RESERVED,
    }
}

/// Returns whether an identifier is a reserved word in the dialect
/// (case-insensitive).
#[must_use]
pub fn is_reserved_keyword(dialect: Dialect, identifier: &str) -> bool {
    let upper = identifier.trim().to_ascii_uppercase();
    let word = upper.as_str();
    COMMON_RESERVED.contains(&word) || dialect_reserved(dialect).contains(&word)
}

/// Returns field names that occur more than once, compared trimmed and
/// case-insensitively. Each duplicate is reported once, spelled and ordered
/// as its first occurrence.
#[must_use]
pub fn find_duplicate_fields(fields: &[NormalizedField]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for field in fields {
        *counts.entry(field.name.trim().to_lowercase()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    fields
        .iter()
        .map(|field| field.name.trim())
        .filter(|name| {
            let key = name.to_lowercase();
            counts.get(&key).is_some_and(|&count| count > 1) && reported.insert(key)
        })
        .map(str::to_string)
        .collect()
}

/// A problem found in a table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// The table name (or one of its segments) is a reserved word.
    ReservedTableName(String),
    /// A field name is a reserved word.
    ReservedFieldName(String),
    /// A field name is used more than once.
    DuplicateField(String),
    /// An index references a field the table does not have.
    UnknownIndexField {
        /// Index name (or `PRIMARY`).
        index: String,
        /// The missing field.
        field: String,
    },
    /// More than one index is marked as the primary key.
    MultiplePrimaryKeys(usize),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedTableName(name) => write!(f, "table name '{name}' is a reserved word"),
            Self::ReservedFieldName(name) => write!(f, "field name '{name}' is a reserved word"),
            Self::DuplicateField(name) => write!(f, "field '{name}' is defined more than once"),
            Self::UnknownIndexField { index, field } => {
                write!(f, "index '{index}' references unknown field '{field}'")
            }
            Self::MultiplePrimaryKeys(count) => {
                write!(f, "{count} indexes are marked as primary key")
            }
        }
    }
}

/// Runs every check against a table definition.
#[must_use]
pub fn check_table(dialect: Dialect, table: &TableDefinition) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for segment in table.name.split('.').map(str::trim) {
        if !segment.is_empty() && is_reserved_keyword(dialect, segment) {
            warnings.push(ValidationWarning::ReservedTableName(segment.to_string()));
        }
    }

    for field in &table.fields {
        if is_reserved_keyword(dialect, &field.name) {
            warnings.push(ValidationWarning::ReservedFieldName(
                field.name.trim().to_string(),
            ));
        }
    }

    warnings.extend(
        find_duplicate_fields(&table.fields)
            .into_iter()
            .map(ValidationWarning::DuplicateField),
    );

    let known: HashSet<String> = table
        .fields
        .iter()
        .map(|f| f.name.trim().to_lowercase())
        .collect();
    for index in &table.indexes {
        let index_name = if index.is_primary {
            "PRIMARY"
        } else {
            index.name.trim()
        };
        for field in &index.fields {
            if !known.contains(&field.name.trim().to_lowercase()) {
                warnings.push(ValidationWarning::UnknownIndexField {
                    index: index_name.to_string(),
                    field: field.name.trim().to_string(),
                });
            }
        }
    }

    let primary_keys = table.indexes.iter().filter(|i| i.is_primary).count();
    if primary_keys > 1 {
        warnings.push(ValidationWarning::MultiplePrimaryKeys(primary_keys));
    }

    warnings
}
