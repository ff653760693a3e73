use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GymSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GymSettings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GymSettings::GymName).string().not_null())
                    .col(ColumnDef::new(GymSettings::Tagline).string())
                    .col(ColumnDef::new(GymSettings::Address).text().not_null())
                    .col(ColumnDef::new(GymSettings::Phone).string())
                    .col(ColumnDef::new(GymSettings::Email).string())
                    .col(ColumnDef::new(GymSettings::Website).string())
                    .col(ColumnDef::new(GymSettings::Gstin).string())
                    .col(ColumnDef::new(GymSettings::LogoUrl).string())
                    .col(ColumnDef::new(GymSettings::WorkingHours).json_binary())
                    .col(ColumnDef::new(GymSettings::Currency).string().not_null())
                    .col(ColumnDef::new(GymSettings::Timezone).string().not_null())
                    .col(ColumnDef::new(GymSettings::SocialLinks).json_binary())
                    .col(
                        ColumnDef::new(GymSettings::Notifications)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GymSettings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GymSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GymSettings {
    Table,
    Id,
    GymName,
    Tagline,
    Address,
    Phone,
    Email,
    Website,
    Gstin,
    LogoUrl,
    WorkingHours,
    Currency,
    Timezone,
    SocialLinks,
    Notifications,
    UpdatedAt,
}
