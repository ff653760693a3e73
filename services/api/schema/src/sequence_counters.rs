use sea_orm::entity::prelude::*;

/// Monotonic counters keyed by scope, e.g. `invoice-2026` or `member-code`.
/// Rows are only touched through the upsert in the repository layer so the
/// returned value is unique even under concurrent allocation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sequence_counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub scope: String,
    pub value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
