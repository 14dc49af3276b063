//! Per-dialect DDL statement generation.
//!
//! [`DdlStrategy`] carries the shared algorithm as default methods; each
//! dialect overrides the hooks where its grammar differs (identity
//! keyword, inline versus separate comments).

mod mysql;
mod oracle;
mod postgres;
mod sqlserver;

pub use mysql::MySqlStrategy;
pub use oracle::OracleStrategy;
pub use postgres::PostgresStrategy;
pub use sqlserver::SqlServerStrategy;

use crate::capability;
use crate::defaults::{escape_literal, format_constant_default};
use crate::dialect::Dialect;
use crate::mapping;
use crate::schema::{DefaultKind, IndexDefinition, NormalizedField, OnUpdate};
use crate::types::{CanonicalType, ParsedType, canonicalize};

/// Trait for dialect-specific DDL generation.
pub trait DdlStrategy: Send + Sync {
    /// Returns the dialect this strategy renders.
    fn dialect(&self) -> Dialect;

    /// Generates the CREATE TABLE statement, followed by any separate
    /// comment statements the dialect needs.
    fn generate_table_ddl(
        &self,
        table_name: &str,
        table_comment: &str,
        fields: &[NormalizedField],
    ) -> String {
        let columns: Vec<String> = fields
            .iter()
            .map(|f| format!("  {}", self.column_definition(f)))
            .collect();

        let mut sql = format!(
            "CREATE TABLE {} (\n{}\n){};",
            self.format_table_name(table_name),
            columns.join(",\n"),
            self.table_options(table_comment)
        );

        let comments = self.comment_statements(table_name, table_comment, fields);
        if !comments.is_empty() {
            sql.push_str("\n\n");
            sql.push_str(&comments.join("\n"));
        }

        sql
    }

    /// Generates SQL for an index, or `ALTER TABLE ... ADD PRIMARY KEY` for
    /// the primary key.
    fn generate_index_ddl(&self, table_name: &str, index: &IndexDefinition) -> String {
        let table = self.format_table_name(table_name);

        if index.is_primary {
            let cols: Vec<String> = index
                .fields
                .iter()
                .map(|f| self.format_field_name(&f.name))
                .collect();
            return format!("ALTER TABLE {} ADD PRIMARY KEY ({});", table, cols.join(", "));
        }

        let mut sql = String::from("CREATE ");
        if index.unique {
            sql.push_str("UNIQUE ");
        }
        let cols: Vec<String> = index
            .fields
            .iter()
            .map(|f| format!("{} {}", self.format_field_name(&f.name), f.direction.as_sql()))
            .collect();
        sql.push_str(&format!(
            "INDEX {} ON {} ({});",
            index.name.trim(),
            table,
            cols.join(", ")
        ));
        sql
    }

    /// Generates a SELECT grant for one principal.
    fn generate_grant(&self, table_name: &str, principal: &str) -> String {
        format!(
            "GRANT SELECT ON {} TO {};",
            table_name.trim(),
            principal.trim()
        )
    }

    /// Normalizes a possibly qualified table name: segments are trimmed and
    /// empty segments dropped.
    fn format_table_name(&self, name: &str) -> String {
        qualified_segments(name).join(".")
    }

    /// Field names are emitted as entered, without quoting. Reserved words
    /// are reported by [`crate::validate`] before synthesis.
    fn format_field_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Maps a parsed type to this dialect.
    fn map_type(&self, parsed: &ParsedType) -> String {
        mapping::map_type(parsed, self.dialect())
    }

    /// Generates one column line (without indentation).
    fn column_definition(&self, field: &NormalizedField) -> String {
        let dialect = self.dialect();
        let parsed = field.parsed_type();
        let canonical = canonicalize(&parsed.base_type);

        let mut sql = format!(
            "{} {}",
            self.format_field_name(&field.name),
            self.map_type(&parsed)
        );

        if field.default_kind == DefaultKind::AutoIncrement
            && capability::supports_auto_increment(dialect, &canonical)
        {
            if let Some(keyword) = self.auto_increment_keyword() {
                sql.push(' ');
                sql.push_str(keyword);
            }
        }

        sql.push_str(if field.nullable { " NULL" } else { " NOT NULL" });
        sql.push_str(&self.default_clause(field, &canonical));

        if field.on_update == OnUpdate::CurrentTimestamp
            && capability::supports_on_update_current_timestamp(dialect, &canonical)
        {
            sql.push_str(" ON UPDATE CURRENT_TIMESTAMP");
        }

        sql.push_str(&self.inline_column_comment(&field.comment));
        sql
    }

    /// Renders the ` DEFAULT ...` clause, or an empty string.
    fn default_clause(&self, field: &NormalizedField, canonical: &CanonicalType) -> String {
        let dialect = self.dialect();
        match field.default_kind {
            DefaultKind::None | DefaultKind::AutoIncrement => String::new(),
            DefaultKind::Constant => format_constant_default(canonical, &field.default_value),
            DefaultKind::CurrentTimestamp => {
                if capability::supports_current_timestamp(dialect, canonical) {
                    String::from(" DEFAULT CURRENT_TIMESTAMP")
                } else {
                    String::new()
                }
            }
            DefaultKind::Uuid => capability::uuid_default(dialect, canonical)
                .map(|expr| format!(" DEFAULT {expr}"))
                .unwrap_or_default(),
        }
    }

    /// Keyword appended to auto-increment columns, if the dialect has one.
    fn auto_increment_keyword(&self) -> Option<&'static str> {
        None
    }

    /// Comment attached to a column line, if the dialect supports it.
    fn inline_column_comment(&self, _comment: &str) -> String {
        String::new()
    }

    /// Text between the closing parenthesis and the semicolon.
    fn table_options(&self, _table_comment: &str) -> String {
        String::new()
    }

    /// Comment statements emitted after CREATE TABLE.
    fn comment_statements(
        &self,
        _table_name: &str,
        _table_comment: &str,
        _fields: &[NormalizedField],
    ) -> Vec<String> {
        Vec::new()
    }
}

/// Returns the built-in strategy for a dialect.
#[must_use]
pub fn builtin(dialect: Dialect) -> Box<dyn DdlStrategy> {
    match dialect {
        Dialect::MySql => Box::new(MySqlStrategy::new()),
        Dialect::PostgreSql => Box::new(PostgresStrategy::new()),
        Dialect::SqlServer => Box::new(SqlServerStrategy::new()),
        Dialect::Oracle => Box::new(OracleStrategy::new()),
    }
}

/// Trimmed, non-empty segments of a dot-qualified name.
fn qualified_segments(name: &str) -> Vec<&str> {
    name.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// `COMMENT ON TABLE` / `COMMENT ON COLUMN` statements, shared by the
/// dialects that keep comments out of the CREATE TABLE body.
fn comment_on_statements<S: DdlStrategy + ?Sized>(
    strategy: &S,
    table_name: &str,
    table_comment: &str,
    fields: &[NormalizedField],
) -> Vec<String> {
    let table = strategy.format_table_name(table_name);
    let mut statements = Vec::new();

    let table_comment = table_comment.trim();
    if !table_comment.is_empty() {
        statements.push(format!(
            "COMMENT ON TABLE {} IS '{}';",
            table,
            escape_literal(table_comment)
        ));
    }

    for field in fields {
        let comment = field.comment.trim();
        if comment.is_empty() {
            continue;
        }
        statements.push(format!(
            "COMMENT ON COLUMN {}.{} IS '{}';",
            table,
            strategy.format_field_name(&field.name),
            escape_literal(comment)
        ));
    }

    statements
}
