use sea_orm::entity::prelude::*;

/// Gym member profile, one per MEMBER-role user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human-readable code (`LD-001`), allocated from the member-code counter.
    #[sea_orm(unique)]
    pub member_code: String,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub gender: String,
    pub date_of_birth: Date,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
    pub join_date: Date,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::memberships::Entity")]
    Memberships,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::member_workouts::Entity")]
    MemberWorkouts,
    #[sea_orm(has_many = "super::progress_records::Entity")]
    ProgressRecords,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::member_workouts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberWorkouts.def()
    }
}

impl Related<super::progress_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
