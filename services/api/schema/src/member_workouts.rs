use sea_orm::entity::prelude::*;

/// Assignment of a workout plan to a member. At most one active per member;
/// assigning a new plan deactivates the previous row. `workout_plan_id` goes
/// null when the plan itself is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member_workouts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub member_id: Uuid,
    pub workout_plan_id: Option<Uuid>,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::workout_plans::Entity",
        from = "Column::WorkoutPlanId",
        to = "super::workout_plans::Column::Id"
    )]
    WorkoutPlan,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::workout_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
