use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressRecords::MemberId).uuid().not_null())
                    .col(ColumnDef::new(ProgressRecords::WeightKg).double())
                    .col(ColumnDef::new(ProgressRecords::BodyFatPct).double())
                    .col(ColumnDef::new(ProgressRecords::ChestCm).double())
                    .col(ColumnDef::new(ProgressRecords::WaistCm).double())
                    .col(ColumnDef::new(ProgressRecords::HipsCm).double())
                    .col(ColumnDef::new(ProgressRecords::ArmsCm).double())
                    .col(ColumnDef::new(ProgressRecords::ThighsCm).double())
                    .col(ColumnDef::new(ProgressRecords::PhotoUrl).string())
                    .col(ColumnDef::new(ProgressRecords::Notes).text())
                    .col(
                        ColumnDef::new(ProgressRecords::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProgressRecords::Table, ProgressRecords::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ProgressRecords::Table)
                    .col(ProgressRecords::MemberId)
                    .col(ProgressRecords::RecordedAt)
                    .name("idx_progress_records_member_id_recorded_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProgressRecords {
    Table,
    Id,
    MemberId,
    WeightKg,
    BodyFatPct,
    ChestCm,
    WaistCm,
    HipsCm,
    ArmsCm,
    ThighsCm,
    PhotoUrl,
    Notes,
    RecordedAt,
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
}
