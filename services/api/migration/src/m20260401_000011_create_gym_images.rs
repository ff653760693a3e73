use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GymImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GymImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GymImages::Title).string())
                    .col(ColumnDef::new(GymImages::Category).string().not_null())
                    .col(ColumnDef::new(GymImages::ImageUrl).string().not_null())
                    .col(ColumnDef::new(GymImages::Visibility).string().not_null())
                    .col(
                        ColumnDef::new(GymImages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GymImages::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GymImages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GymImages {
    Table,
    Id,
    Title,
    Category,
    ImageUrl,
    Visibility,
    SortOrder,
    UploadedAt,
}
