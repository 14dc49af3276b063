//! MySQL DDL strategy.

use super::DdlStrategy;
use crate::defaults::escape_literal;
use crate::dialect::Dialect;

/// MySQL strategy: inline column comments, table comment as a table option.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlStrategy;

impl MySqlStrategy {
    /// Creates a new MySQL strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DdlStrategy for MySqlStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn auto_increment_keyword(&self) -> Option<&'static str> {
        Some("AUTO_INCREMENT")
    }

    fn inline_column_comment(&self, comment: &str) -> String {
        let comment = comment.trim();
        if comment.is_empty() {
            return String::new();
        }
        format!(" COMMENT '{}'", escape_literal(comment))
    }

    fn table_options(&self, table_comment: &str) -> String {
        let comment = table_comment.trim();
        if comment.is_empty() {
            return String::new();
        }
        format!(" COMMENT='{}'", escape_literal(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NormalizedField;

    #[test]
    fn test_mysql_create_table() {
        let fields = vec![
            NormalizedField::new("id", "int").not_null().auto_increment(),
            NormalizedField::new("name", "varchar(255)"),
        ];
        assert_eq!(
            MySqlStrategy::new().generate_table_ddl("users", "", &fields),
            "CREATE TABLE users (\n  id INT AUTO_INCREMENT NOT NULL,\n  name VARCHAR(255) NULL\n);"
        );
    }

    #[test]
    fn test_mysql_inline_comments() {
        let fields = vec![NormalizedField::new("title", "varchar(100)").comment("Book's title")];
        assert_eq!(
            MySqlStrategy::new().generate_table_ddl("books", "O'Reilly books", &fields),
            "CREATE TABLE books (\n  title VARCHAR(100) NULL COMMENT 'Book''s title'\n) COMMENT='O''Reilly books';"
        );
    }

    #[test]
    fn test_mysql_timestamps() {
        let field = NormalizedField::new("updated_at", "timestamp")
            .not_null()
            .default_current_timestamp()
            .on_update_current_timestamp();
        assert_eq!(
            MySqlStrategy::new().column_definition(&field),
            "updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP"
        );

        // DATE columns cannot default to CURRENT_TIMESTAMP on MySQL.
        let field = NormalizedField::new("day", "date")
            .default_current_timestamp()
            .on_update_current_timestamp();
        assert_eq!(
            MySqlStrategy::new().column_definition(&field),
            "day DATE NULL"
        );
    }

    #[test]
    fn test_mysql_auto_increment_needs_integer() {
        let field = NormalizedField::new("code", "varchar(10)").auto_increment();
        assert_eq!(
            MySqlStrategy::new().column_definition(&field),
            "code VARCHAR(10) NULL"
        );

        let field = NormalizedField::new("id", "bigint unsigned")
            .not_null()
            .auto_increment();
        assert_eq!(
            MySqlStrategy::new().column_definition(&field),
            "id BIGINT UNSIGNED AUTO_INCREMENT NOT NULL"
        );
    }

    #[test]
    fn test_mysql_defaults() {
        let strategy = MySqlStrategy::new();
        let field = NormalizedField::new("status", "varchar(16)")
            .not_null()
            .default_value("it's new");
        assert_eq!(
            strategy.column_definition(&field),
            "status VARCHAR(16) NOT NULL DEFAULT 'it''s new'"
        );

        let field = NormalizedField::new("qty", "int").default_value("0");
        assert_eq!(strategy.column_definition(&field), "qty INT NULL DEFAULT 0");

        let field = NormalizedField::new("token", "uuid").default_uuid();
        assert_eq!(
            strategy.column_definition(&field),
            "token CHAR(36) NULL DEFAULT (UUID())"
        );
    }
}
