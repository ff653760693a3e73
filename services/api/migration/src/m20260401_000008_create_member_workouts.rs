use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberWorkouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MemberWorkouts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MemberWorkouts::MemberId).uuid().not_null())
                    // Nullable: deleting a workout plan keeps the assignment
                    // history rows with a null plan reference.
                    .col(ColumnDef::new(MemberWorkouts::WorkoutPlanId).uuid())
                    .col(
                        ColumnDef::new(MemberWorkouts::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MemberWorkouts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MemberWorkouts::Table, MemberWorkouts::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MemberWorkouts::Table, MemberWorkouts::WorkoutPlanId)
                            .to(WorkoutPlans::Table, WorkoutPlans::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(MemberWorkouts::Table)
                    .col(MemberWorkouts::MemberId)
                    .name("idx_member_workouts_member_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberWorkouts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MemberWorkouts {
    Table,
    Id,
    MemberId,
    WorkoutPlanId,
    AssignedAt,
    IsActive,
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
}

#[derive(Iden)]
enum WorkoutPlans {
    Table,
    Id,
}
