//! Oracle DDL strategy.

use super::{DdlStrategy, comment_on_statements};
use crate::dialect::Dialect;
use crate::schema::NormalizedField;

/// Oracle strategy: comments go into `COMMENT ON` statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleStrategy;

impl OracleStrategy {
    /// Creates a new Oracle strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DdlStrategy for OracleStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
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
