use sea_orm::entity::prelude::*;

/// One record per transaction, created together with its membership.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// `INV-<year>-NNNN`, allocated atomically from the per-year counter.
    #[sea_orm(unique)]
    pub invoice_number: String,
    pub member_id: Uuid,
    pub membership_id: Uuid,
    pub amount_paise: i64,
    pub gst_amount_paise: i64,
    pub method: String,
    pub gateway_order_id: Option<String>,
    /// Unique: a gateway payment can only ever be recorded once.
    #[sea_orm(unique)]
    pub gateway_payment_id: Option<String>,
    pub status: String,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
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
        belongs_to = "super::memberships::Entity",
        from = "Column::MembershipId",
        to = "super::memberships::Column::Id"
    )]
    Membership,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
