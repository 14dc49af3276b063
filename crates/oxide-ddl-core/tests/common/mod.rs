#![allow(dead_code)]

use oxide_ddl_core::{
    Dialect, IndexDefinition, IndexField, NormalizedField, SchemaSynthesizer, TableDefinition,
};

pub fn ddl(
    dialect: Dialect,
    table: &str,
    comment: &str,
    fields: &[NormalizedField],
    indexes: &[IndexDefinition],
) -> String {
    SchemaSynthesizer::default()
        .build_ddl(dialect, table, comment, fields, indexes)
        .unwrap_or_else(|e| panic!("Failed to build DDL for {dialect}: {e}"))
}

pub fn dcl(dialect: Dialect, table: &str, principals: &[&str]) -> String {
    SchemaSynthesizer::default()
        .build_dcl(dialect, table, principals)
        .unwrap_or_else(|e| panic!("Failed to build DCL for {dialect}: {e}"))
}

/// A table touching every clause kind: identity, constant and generated
/// defaults, on-update, comments and indexes.
pub fn orders_table() -> TableDefinition {
    TableDefinition::new("sales.orders")
        .comment("Customer's orders")
        .field(
            NormalizedField::new("id", "bigint")
                .not_null()
                .auto_increment()
                .comment("Surrogate key"),
        )
        .field(NormalizedField::new("ref", "uuid").not_null().default_uuid())
        .field(
            NormalizedField::new("status", "varchar(20)")
                .not_null()
                .default_value("new"),
        )
        .field(NormalizedField::new("total", "decimal(12,2)").default_value("0"))
        .field(
            NormalizedField::new("updated_at", "timestamp")
                .not_null()
                .default_current_timestamp()
                .on_update_current_timestamp(),
        )
        .index(IndexDefinition::primary(vec![IndexField::asc("id")]))
        .index(
            IndexDefinition::new("ux_orders_ref", vec![IndexField::asc("ref")]).unique(),
        )
        .index(IndexDefinition::new(
            "ix_orders_status",
            vec![IndexField::asc("status"), IndexField::desc("updated_at")],
        ))
        .principal("SALES_READ")
}
