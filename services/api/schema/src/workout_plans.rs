use sea_orm::entity::prelude::*;

/// Workout template. `days` holds the ordered day/exercise structure as JSON.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workout_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub plan_type: String,
    pub description: Option<String>,
    pub days: Json,
    pub days_per_week: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_workouts::Entity")]
    MemberWorkouts,
}

impl Related<super::member_workouts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberWorkouts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
