use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum FamilyMembers {
    Table,
    Id,
    FamilyId,
    NamaDepan,
    NamaBelakang,
    Gender,
    TanggalLahir,
    TanggalMeninggal,
    Status,
    AyahId,
    IbuId,
    Pekerjaan,
    Alamat,
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
    NamaDepan,
    NamaBelakang,
    Gender,
    TanggalLahir,
    Alamat,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // family_members: the pre-nickname production schema. nama_panggilan
        // is added by a follow-up migration.
        manager
            .create_table(
                Table::create()
                    .table(FamilyMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FamilyMembers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(FamilyMembers::FamilyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FamilyMembers::NamaDepan)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FamilyMembers::NamaBelakang)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FamilyMembers::Gender).string_len(20).null())
                    .col(ColumnDef::new(FamilyMembers::TanggalLahir).date().null())
                    .col(
                        ColumnDef::new(FamilyMembers::TanggalMeninggal)
                            .date()
                            .null(),
                    )
                    .col(ColumnDef::new(FamilyMembers::Status).string_len(50).null())
                    .col(ColumnDef::new(FamilyMembers::AyahId).big_integer().null())
                    .col(ColumnDef::new(FamilyMembers::IbuId).big_integer().null())
                    .col(ColumnDef::new(FamilyMembers::Pekerjaan).string().null())
                    .col(ColumnDef::new(FamilyMembers::Alamat).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_members_ayah_id")
                            .from(FamilyMembers::Table, FamilyMembers::AyahId)
                            .to(FamilyMembers::Table, FamilyMembers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_members_ibu_id")
                            .from(FamilyMembers::Table, FamilyMembers::IbuId)
                            .to(FamilyMembers::Table, FamilyMembers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // index on family_members.family_id
        manager
            .create_index(
                Index::create()
                    .name("ix_family_members_family_id")
                    .table(FamilyMembers::Table)
                    .col(FamilyMembers::FamilyId)
                    .to_owned(),
            )
            .await?;

        // persons
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Persons::NamaDepan)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Persons::NamaBelakang)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Persons::Gender).string_len(20).null())
                    .col(ColumnDef::new(Persons::TanggalLahir).date().null())
                    .col(ColumnDef::new(Persons::Alamat).string().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_family_members_family_id")
                    .table(FamilyMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FamilyMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}
