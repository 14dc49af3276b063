//! Top-level DDL and DCL assembly.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::registry::StrategyRegistry;
use crate::schema::{IndexDefinition, NormalizedField, TableDefinition};

/// Placeholder returned when the table name is blank.
pub const MISSING_TABLE_NAME: &str = "-- missing table name";

/// Placeholder returned when there are no fields.
pub const MISSING_FIELDS: &str = "-- missing field definitions";

/// Entry point that turns table descriptions into SQL text.
///
/// Input is expected to be partially filled while a user edits it, so
/// missing pieces produce placeholder comments rather than errors.
#[derive(Debug, Default)]
pub struct SchemaSynthesizer {
    registry: StrategyRegistry,
}

impl SchemaSynthesizer {
    /// Creates a synthesizer over the given registry.
    #[must_use]
    pub const fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Returns the strategy registry.
    #[must_use]
    pub const fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Returns the strategy registry for substitution.
    pub const fn registry_mut(&mut self) -> &mut StrategyRegistry {
        &mut self.registry
    }

    /// Builds the table DDL, followed by one statement per index.
    ///
    /// The table block and the index block are separated by a blank line;
    /// index statements keep their input order, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedDialect`](crate::DdlError::UnsupportedDialect)
    /// if the registry has no strategy for `dialect`.
    pub fn build_ddl(
        &self,
        dialect: Dialect,
        table_name: &str,
        table_comment: &str,
        fields: &[NormalizedField],
        indexes: &[IndexDefinition],
    ) -> Result<String> {
        if table_name.trim().is_empty() {
            return Ok(MISSING_TABLE_NAME.to_string());
        }
        if fields.is_empty() {
            return Ok(MISSING_FIELDS.to_string());
        }

        let strategy = self.registry.resolve(dialect)?;
        debug!(
            dialect = %dialect,
            table = table_name.trim(),
            fields = fields.len(),
            indexes = indexes.len(),
            "building table DDL"
        );

        let mut sql = strategy.generate_table_ddl(table_name, table_comment, fields);
        if !indexes.is_empty() {
            let index_sql: Vec<String> = indexes
                .iter()
                .map(|index| strategy.generate_index_ddl(table_name, index))
                .collect();
            sql.push_str("\n\n");
            sql.push_str(&index_sql.join("\n"));
        }

        Ok(sql)
    }

    /// Builds one `GRANT SELECT` per principal, newline separated.
    ///
    /// Returns an empty string when the table name or the principal list is
    /// empty. Blank principals are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::UnsupportedDialect`](crate::DdlError::UnsupportedDialect)
    /// if the registry has no strategy for `dialect`.
    pub fn build_dcl<P: AsRef<str>>(
        &self,
        dialect: Dialect,
        table_name: &str,
        principals: &[P],
    ) -> Result<String> {
        if table_name.trim().is_empty() || principals.is_empty() {
            return Ok(String::new());
        }

        let strategy = self.registry.resolve(dialect)?;
        let grants: Vec<String> = principals
            .iter()
            .map(|principal| principal.as_ref())
            .filter(|principal| !principal.trim().is_empty())
            .map(|principal| strategy.generate_grant(table_name, principal))
            .collect();

        debug!(dialect = %dialect, grants = grants.len(), "building grants");
        Ok(grants.join("\n"))
    }

    /// Builds the DDL for a bundled table definition.
    ///
    /// # Errors
    ///
    /// See [`SchemaSynthesizer::build_ddl`].
    pub fn build_table(&self, dialect: Dialect, table: &TableDefinition) -> Result<String> {
        self.build_ddl(
            dialect,
            &table.name,
            &table.comment,
            &table.fields,
            &table.indexes,
        )
    }

    /// Builds the grants for a bundled table definition.
    ///
    /// # Errors
    ///
    /// See [`SchemaSynthesizer::build_dcl`].
    pub fn build_table_dcl(&self, dialect: Dialect, table: &TableDefinition) -> Result<String> {
        self.build_dcl(dialect, &table.name, &table.principals)
    }
}

/// Builds DDL with the built-in strategies.
///
/// # Errors
///
/// Never fails in practice: every dialect has a built-in strategy.
pub fn build_ddl(
    dialect: Dialect,
    table_name: &str,
    table_comment: &str,
    fields: &[NormalizedField],
    indexes: &[IndexDefinition],
) -> Result<String> {
    SchemaSynthesizer::default().build_ddl(dialect, table_name, table_comment, fields, indexes)
}

/// Builds grants with the built-in strategies.
///
/// # Errors
///
/// Never fails in practice: every dialect has a built-in strategy.
pub fn build_dcl<P: AsRef<str>>(
    dialect: Dialect,
    table_name: &str,
    principals: &[P],
) -> Result<String> {
    SchemaSynthesizer::default().build_dcl(dialect, table_name, principals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DdlError;
    use crate::schema::IndexField;

    fn users() -> Vec<NormalizedField> {
        vec![
            NormalizedField::new("id", "int").not_null().auto_increment(),
            NormalizedField::new("name", "varchar(255)"),
        ]
    }

    #[test]
    fn test_placeholders() {
        let synth = SchemaSynthesizer::default();
        assert_eq!(
            synth.build_ddl(Dialect::MySql, "  ", "", &users(), &[]).unwrap(),
            MISSING_TABLE_NAME
        );
        assert_eq!(
            synth.build_ddl(Dialect::MySql, "users", "", &[], &[]).unwrap(),
            MISSING_FIELDS
        );
    }

    #[test]
    fn test_placeholders_win_over_missing_strategy() {
        let synth = SchemaSynthesizer::new(StrategyRegistry::empty());
        assert_eq!(
            synth.build_ddl(Dialect::MySql, "", "", &[], &[]).unwrap(),
            MISSING_TABLE_NAME
        );
        assert!(matches!(
            synth.build_ddl(Dialect::MySql, "users", "", &users(), &[]),
            Err(DdlError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn test_indexes_follow_table() {
        let indexes = vec![
            IndexDefinition::primary(vec![IndexField::asc("id")]),
            IndexDefinition::new("idx_name", vec![IndexField::asc("name")]),
        ];
        let sql = build_ddl(Dialect::MySql, "users", "", &users(), &indexes).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE users (\n  id INT AUTO_INCREMENT NOT NULL,\n  name VARCHAR(255) NULL\n);\n\n\
             ALTER TABLE users ADD PRIMARY KEY (id);\n\
             CREATE INDEX idx_name ON users (name ASC);"
        );
    }

    #[test]
    fn test_dcl() {
        for dialect in Dialect::ALL {
            assert_eq!(
                build_dcl(dialect, "users", &["CBD_READ"]).unwrap(),
                "GRANT SELECT ON users TO CBD_READ;"
            );
        }
        assert_eq!(
            build_dcl(Dialect::Oracle, " app.users ", &["A", " ", "B "]).unwrap(),
            "GRANT SELECT ON app.users TO A;\nGRANT SELECT ON app.users TO B;"
        );
    }

    #[test]
    fn test_dcl_empty_inputs() {
        let none: [&str; 0] = [];
        assert_eq!(build_dcl(Dialect::MySql, "users", &none).unwrap(), "");
        assert_eq!(build_dcl(Dialect::MySql, " ", &["X"]).unwrap(), "");
    }

    #[test]
    fn test_build_table_definition() {
        let table = TableDefinition::new("users")
            .field(NormalizedField::new("id", "int").not_null())
            .principal("READER");
        let synth = SchemaSynthesizer::default();
        assert_eq!(
            synth.build_table(Dialect::PostgreSql, &table).unwrap(),
            "CREATE TABLE users (\n  id INTEGER NOT NULL\n);"
        );
        assert_eq!(
            synth.build_table_dcl(Dialect::PostgreSql, &table).unwrap(),
            "GRANT SELECT ON users TO READER;"
        );
    }
}
