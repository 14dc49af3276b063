//! SQL Server DDL strategy.

use super::{DdlStrategy, qualified_segments};
use crate::defaults::escape_literal;
use crate::dialect::Dialect;
use crate::schema::NormalizedField;

/// SQL Server strategy: identity columns and `MS_Description` extended
/// properties for comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerStrategy;

impl SqlServerStrategy {
    /// Creates a new SQL Server strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates an `sp_addextendedproperty` call describing a table, or one
    /// of its columns when `column` is given.
    ///
    /// Without a schema qualifier the level-0 name is `SCHEMA_NAME()`.
    #[must_use]
    pub fn extended_property(&self, table_name: &str, column: Option<&str>, value: &str) -> String {
        let segments = qualified_segments(table_name);
        let (schema, table) = match segments.as_slice() {
            [] => (None, ""),
            [table] => (None, *table),
            [.., schema, table] => (Some(*schema), *table),
        };

        let level0 = schema.map_or_else(
            || String::from("SCHEMA_NAME()"),
            |s| format!("N'{}'", escape_literal(s)),
        );

        let mut sql = format!(
            "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'{}', \
             @level0type = N'SCHEMA', @level0name = {}, \
             @level1type = N'TABLE', @level1name = N'{}'",
            escape_literal(value),
            level0,
            escape_literal(table)
        );
        if let Some(column) = column {
            sql.push_str(&format!(
                ", @level2type = N'COLUMN', @level2name = N'{}'",
                escape_literal(&self.format_field_name(column))
            ));
        }
        sql.push(';');
        sql
    }
}

impl DdlStrategy for SqlServerStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::SqlServer
    }

    fn auto_increment_keyword(&self) -> Option<&'static str> {
        Some("IDENTITY(1,1)")
    }

    fn comment_statements(
        &self,
        table_name: &str,
        table_comment: &str,
        fields: &[NormalizedField],
    ) -> Vec<String> {
        let mut statements = Vec::new();

        let table_comment = table_comment.trim();
        if !table_comment.is_empty() {
            statements.push(self.extended_property(table_name, None, table_comment));
        }

        for field in fields {
            let comment = field.comment.trim();
            if !comment.is_empty() {
                statements.push(self.extended_property(table_name, Some(&field.name), comment));
            }
        }

        statements
    }
}
