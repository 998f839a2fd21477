use sea_orm_migration::prelude::*;

use crate::schema_ops::{drop_column_if_exists, ensure_column, ColumnSpec};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Nullable here: persons rows may legitimately have no nickname.
        ensure_column(
            manager,
            &ColumnSpec {
                table: "persons",
                column: "nama_panggilan",
                sql_type: "VARCHAR(100)",
                not_null: false,
                default: None,
                after: Some("nama_belakang"),
            },
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_column_if_exists(manager, "persons", "nama_panggilan").await
    }
}
