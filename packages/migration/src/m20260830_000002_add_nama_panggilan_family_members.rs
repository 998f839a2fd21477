use sea_orm_migration::prelude::*;

use crate::schema_ops::{drop_column_if_exists, ensure_column, report_missing_columns, ColumnSpec};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Full column set family_members is supposed to carry. Used only for the
/// advisory gap report; nothing beyond nama_panggilan is created here.
const EXPECTED_COLUMNS: &[&str] = &[
    "id",
    "family_id",
    "nama_depan",
    "nama_panggilan",
    "nama_belakang",
    "gender",
    "tanggal_lahir",
    "tanggal_meninggal",
    "status",
    "ayah_id",
    "ibu_id",
    "pekerjaan",
    "alamat",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Production rows predate the nickname field. Existing rows get the
        // 'Panggilan' placeholder; real values are backfilled by the app.
        ensure_column(
            manager,
            &ColumnSpec {
                table: "family_members",
                column: "nama_panggilan",
                sql_type: "VARCHAR(100)",
                not_null: true,
                default: Some("Panggilan"),
                after: Some("nama_depan"),
            },
        )
        .await?;

        report_missing_columns(manager, "family_members", EXPECTED_COLUMNS).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_column_if_exists(manager, "family_members", "nama_panggilan").await
    }
}
