use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkoutPlans::Name).string().not_null())
                    .col(ColumnDef::new(WorkoutPlans::PlanType).string().not_null())
                    .col(ColumnDef::new(WorkoutPlans::Description).text())
                    .col(ColumnDef::new(WorkoutPlans::Days).json_binary().not_null())
                    .col(
                        ColumnDef::new(WorkoutPlans::DaysPerWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkoutPlans::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(WorkoutPlans::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkoutPlans::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutPlans::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkoutPlans {
    Table,
    Id,
    Name,
    PlanType,
    Description,
    Days,
    DaysPerWeek,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
