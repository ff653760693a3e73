use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memberships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Memberships::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Memberships::MemberId).uuid().not_null())
                    .col(ColumnDef::new(Memberships::PlanId).uuid().not_null())
                    .col(
                        ColumnDef::new(Memberships::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Memberships::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Memberships::Status).string().not_null())
                    .col(
                        ColumnDef::new(Memberships::FrozenDays)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Memberships::LastNotificationDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Memberships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Memberships::Table, Memberships::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Memberships::Table, Memberships::PlanId)
                            .to(MembershipPlans::Table, MembershipPlans::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Memberships::Table)
                    .col(Memberships::MemberId)
                    .name("idx_memberships_member_id")
                    .to_owned(),
            )
            .await?;
        // The expiry sweep filters on status and a narrow end_date window.
        manager
            .create_index(
                Index::create()
                    .table(Memberships::Table)
                    .col(Memberships::EndDate)
                    .col(Memberships::Status)
                    .name("idx_memberships_end_date_status")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memberships::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Memberships {
    Table,
    Id,
    MemberId,
    PlanId,
    StartDate,
    EndDate,
    Status,
    FrozenDays,
    LastNotificationDate,
    CreatedAt,
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
}

#[derive(Iden)]
enum MembershipPlans {
    Table,
    Id,
}
