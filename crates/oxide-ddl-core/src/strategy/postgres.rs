//! PostgreSQL DDL strategy.

use super::{DdlStrategy, comment_on_statements};
use crate::dialect::Dialect;
use crate::schema::NormalizedField;

/// PostgreSQL strategy: comments go into `COMMENT ON` statements.
///
/// Auto-increment is not rendered; use the `serial` type for generated keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresStrategy;

impl PostgresStrategy {
    /// Creates a new PostgreSQL strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DdlStrategy for PostgresStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSql
    }

    fn comment_statements(
        &self,
        table_name: &str,
        table_comment: &str,
        fields: &[NormalizedField],
    ) -> Vec<String> {
        comment_on_statements(self, table_name, table_comment, fields)
    }
}
