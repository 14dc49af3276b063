//! End-to-end synthesis scenarios across the four dialects.

mod common;
use common::*;

use oxide_ddl_core::{Dialect, IndexDefinition, IndexField, NormalizedField, field_type_for};

fn users_fields() -> Vec<NormalizedField> {
    vec![
        NormalizedField::new("id", "int").not_null().auto_increment(),
        NormalizedField::new("name", "varchar(255)"),
    ]
}

#[test]
fn mysql_users_table() {
    let sql = ddl(Dialect::MySql, "users", "", &users_fields(), &[]);
    assert!(sql.starts_with(
        "CREATE TABLE users (\n  id INT AUTO_INCREMENT NOT NULL,\n  name VARCHAR(255) NULL\n);"
    ));
}

#[test]
fn users_table_in_every_dialect() {
    let expected = [
        (
            Dialect::MySql,
            "CREATE TABLE users (\n  id INT AUTO_INCREMENT NOT NULL,\n  name VARCHAR(255) NULL\n);",
        ),
        (
            Dialect::PostgreSql,
            "CREATE TABLE users (\n  id INTEGER NOT NULL,\n  name VARCHAR(255) NULL\n);",
        ),
        (
            Dialect::SqlServer,
            "CREATE TABLE users (\n  id INT IDENTITY(1,1) NOT NULL,\n  name VARCHAR(255) NULL\n);",
        ),
        (
            Dialect::Oracle,
            "CREATE TABLE users (\n  id NUMBER(10) NOT NULL,\n  name VARCHAR2(255) NULL\n);",
        ),
    ];
    for (dialect, sql) in expected {
        assert_eq!(ddl(dialect, "users", "", &users_fields(), &[]), sql);
    }
}

#[test]
fn oracle_clob_collapse() {
    assert_eq!(field_type_for(Dialect::Oracle, "longtext"), "CLOB");
    assert_eq!(field_type_for(Dialect::Oracle, "int"), "NUMBER(10)");
}

#[test]
fn sqlserver_datetime_unification() {
    for raw in ["datetime", "datetime2", "timestamp"] {
        assert_eq!(field_type_for(Dialect::SqlServer, raw), "DATETIME2");
    }
}

#[test]
fn primary_key_ddl() {
    let index = IndexDefinition::primary(vec![
        IndexField::asc("id"),
        IndexField::desc("created_at"),
    ]);
    for dialect in Dialect::ALL {
        let sql = ddl(dialect, "users", "", &users_fields(), &[index.clone()]);
        assert!(
            sql.ends_with("\n\nALTER TABLE users ADD PRIMARY KEY (id, created_at);"),
            "{dialect}: {sql}"
        );
    }
}

#[test]
fn dcl_in_every_dialect() {
    for dialect in Dialect::ALL {
        assert_eq!(
            dcl(dialect, "users", &["CBD_READ"]),
            "GRANT SELECT ON users TO CBD_READ;"
        );
    }
}

#[test]
fn mysql_orders_table() {
    let table = orders_table();
    let sql = ddl(
        Dialect::MySql,
        &table.name,
        &table.comment,
        &table.fields,
        &table.indexes,
    );
    assert_eq!(
        sql,
        "CREATE TABLE sales.orders (\n\
         \x20 id BIGINT AUTO_INCREMENT NOT NULL COMMENT 'Surrogate key',\n\
         \x20 ref CHAR(36) NOT NULL DEFAULT (UUID()),\n\
         \x20 status VARCHAR(20) NOT NULL DEFAULT 'new',\n\
         \x20 total DECIMAL(12, 2) NULL DEFAULT 0,\n\
         \x20 updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP\n\
         ) COMMENT='Customer''s orders';\n\
         \n\
         ALTER TABLE sales.orders ADD PRIMARY KEY (id);\n\
         CREATE UNIQUE INDEX ux_orders_ref ON sales.orders (ref ASC);\n\
         CREATE INDEX ix_orders_status ON sales.orders (status ASC, updated_at DESC);"
    );
}

#[test]
fn postgres_orders_table() {
    let table = orders_table();
    let sql = ddl(
        Dialect::PostgreSql,
        &table.name,
        &table.comment,
        &table.fields,
        &table.indexes,
    );
    assert_eq!(
        sql,
        "CREATE TABLE sales.orders (\n\
         \x20 id BIGINT NOT NULL,\n\
         \x20 ref UUID NOT NULL DEFAULT gen_random_uuid(),\n\
         \x20 status VARCHAR(20) NOT NULL DEFAULT 'new',\n\
         \x20 total DECIMAL(12, 2) NULL DEFAULT 0,\n\
         \x20 updated_at TIMESTAMP WITHOUT TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP\n\
         );\n\
         \n\
         COMMENT ON TABLE sales.orders IS 'Customer''s orders';\n\
         COMMENT ON COLUMN sales.orders.id IS 'Surrogate key';\n\
         \n\
         ALTER TABLE sales.orders ADD PRIMARY KEY (id);\n\
         CREATE UNIQUE INDEX ux_orders_ref ON sales.orders (ref ASC);\n\
         CREATE INDEX ix_orders_status ON sales.orders (status ASC, updated_at DESC);"
    );
}

#[test]
fn sqlserver_orders_table() {
    let table = orders_table();
    let sql = ddl(
        Dialect::SqlServer,
        &table.name,
        &table.comment,
        &table.fields,
        &table.indexes,
    );
    assert!(sql.starts_with(
        "CREATE TABLE sales.orders (\n  id BIGINT IDENTITY(1,1) NOT NULL,\n  \
         ref UNIQUEIDENTIFIER NOT NULL DEFAULT NEWID(),\n"
    ));
    assert!(sql.contains("  updated_at DATETIME2 NOT NULL DEFAULT CURRENT_TIMESTAMP\n);"));
    assert!(sql.contains(
        "@value = N'Customer''s orders', @level0type = N'SCHEMA', @level0name = N'sales', \
         @level1type = N'TABLE', @level1name = N'orders';"
    ));
    assert!(sql.contains(
        "@value = N'Surrogate key', @level0type = N'SCHEMA', @level0name = N'sales', \
         @level1type = N'TABLE', @level1name = N'orders', @level2type = N'COLUMN', \
         @level2name = N'id';"
    ));
    assert!(!sql.contains("ON UPDATE"));
    assert!(!sql.contains("COMMENT"));
}

#[test]
fn oracle_orders_table() {
    let table = orders_table();
    let sql = ddl(
        Dialect::Oracle,
        &table.name,
        &table.comment,
        &table.fields,
        &table.indexes,
    );
    assert!(sql.starts_with(
        "CREATE TABLE sales.orders (\n  id NUMBER(19) NOT NULL,\n  ref CHAR(36) NOT NULL,\n"
    ));
    assert!(sql.contains("  total NUMBER(12, 2) NULL DEFAULT 0,\n"));
    assert!(sql.contains("COMMENT ON COLUMN sales.orders.id IS 'Surrogate key';"));
}

#[test]
fn comments_are_escaped_everywhere() {
    let fields = vec![NormalizedField::new("a", "int").comment("it's")];
    for dialect in Dialect::ALL {
        let sql = ddl(dialect, "t", "Bob's table", &fields, &[]);
        assert!(sql.contains("it''s"), "{dialect}: {sql}");
        assert!(sql.contains("Bob''s table"), "{dialect}: {sql}");
        assert!(!sql.contains("it's"), "{dialect}: {sql}");
    }
}

#[test]
fn placeholders_for_partial_input() {
    for dialect in Dialect::ALL {
        assert_eq!(
            ddl(dialect, "", "", &users_fields(), &[]),
            "-- missing table name"
        );
        assert_eq!(ddl(dialect, "users", "", &[], &[]), "-- missing field definitions");
        assert_eq!(dcl(dialect, "users", &[]), "");
    }
}

#[test]
fn blank_principals_are_skipped_in_order() {
    for dialect in Dialect::ALL {
        assert_eq!(
            dcl(dialect, "users", &["", "READER", "   ", " WRITER "]),
            "GRANT SELECT ON users TO READER;\nGRANT SELECT ON users TO WRITER;"
        );
        assert_eq!(dcl(dialect, "users", &[" ", ""]), "");
    }
}

#[test]
fn constant_defaults_on_document_types_are_not_quoted() {
    let fields = vec![
        NormalizedField::new("token", "uuid").default_value("abc"),
        NormalizedField::new("payload", "jsonb").default_value("'{}'"),
    ];
    assert_eq!(
        ddl(Dialect::PostgreSql, "events", "", &fields, &[]),
        "CREATE TABLE events (\n  token UUID NULL DEFAULT abc,\n  payload JSONB NULL DEFAULT '{}'\n);"
    );
}
