use sea_orm::entity::prelude::*;

/// Singleton configuration row. JSON columns hold the nested maps
/// (working hours, social links, notification toggles).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gym_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub gym_name: String,
    pub tagline: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gstin: Option<String>,
    pub logo_url: Option<String>,
    pub working_hours: Option<Json>,
    pub currency: String,
    pub timezone: String,
    pub social_links: Option<Json>,
    pub notifications: Json,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
