use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MembershipPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MembershipPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MembershipPlans::Name).string().not_null())
                    .col(
                        ColumnDef::new(MembershipPlans::DurationDays)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::BasePricePaise)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::GstPercent)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::FinalPricePaise)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MembershipPlans::Description).text())
                    .col(
                        ColumnDef::new(MembershipPlans::Features)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MembershipPlans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MembershipPlans::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MembershipPlans {
    Table,
    Id,
    Name,
    DurationDays,
    BasePricePaise,
    GstPercent,
    FinalPricePaise,
    Description,
    Features,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
