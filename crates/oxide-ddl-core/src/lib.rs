//! # oxide-ddl-core
//!
//! Deterministic DDL and DCL synthesis for MySQL, PostgreSQL, SQL Server
//! and Oracle from a single canonical table description.
//!
//! The pipeline runs strictly downward:
//! - [`types`] parses user-entered type strings and canonicalizes aliases
//! - [`mapping`] renders a canonical type for one dialect
//! - [`defaults`] and [`capability`] decide `DEFAULT`, identity and
//!   `ON UPDATE` clauses
//! - [`strategy`] assembles CREATE TABLE, comment and index statements
//! - [`SchemaSynthesizer`] picks a strategy from its [`StrategyRegistry`]
//!   and concatenates the result
//!
//! ## Example
//!
//! ```rust
//! use oxide_ddl_core::{Dialect, IndexDefinition, IndexField, NormalizedField, SchemaSynthesizer};
//!
//! let fields = vec![
//!     NormalizedField::new("id", "int").not_null().auto_increment(),
//!     NormalizedField::new("name", "varchar(255)"),
//! ];
//! let indexes = vec![IndexDefinition::primary(vec![IndexField::asc("id")])];
//!
//! let synth = SchemaSynthesizer::default();
//! let sql = synth
//!     .build_ddl(Dialect::MySql, "users", "", &fields, &indexes)
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE users (\n  id INT AUTO_INCREMENT NOT NULL,\n  name VARCHAR(255) NULL\n);\n\n\
//!      ALTER TABLE users ADD PRIMARY KEY (id);"
//! );
//!
//! let grants = synth.build_dcl(Dialect::Oracle, "users", &["CBD_READ"]).unwrap();
//! assert_eq!(grants, "GRANT SELECT ON users TO CBD_READ;");
//! ```
//!
//! ## Quoting
//!
//! Identifiers are emitted as entered; use [`validate`] to flag reserved
//! words first. Every user-supplied text placed inside a SQL string literal
//! (comments, quoted defaults) has its single quotes doubled.

pub mod capability;
pub mod defaults;
pub mod dialect;
pub mod error;
pub mod mapping;
pub mod registry;
pub mod schema;
pub mod strategy;
pub mod synth;
pub mod types;
pub mod validate;

pub use dialect::Dialect;
pub use error::{DdlError, Result};
pub use mapping::{field_type_for, map_type};
pub use registry::StrategyRegistry;
pub use schema::{
    DefaultKind, IndexDefinition, IndexField, NormalizedField, OnUpdate, SortDirection,
    TableDefinition,
};
pub use strategy::{
    DdlStrategy, MySqlStrategy, OracleStrategy, PostgresStrategy, SqlServerStrategy,
};
pub use synth::{SchemaSynthesizer, build_dcl, build_ddl};
pub use types::{CanonicalType, ParsedType, canonicalize};
pub use validate::{ValidationWarning, check_table, find_duplicate_fields, is_reserved_keyword};
