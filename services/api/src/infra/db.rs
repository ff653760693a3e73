use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{DateTime, Datelike as _, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr, TransactionError, TransactionTrait,
    sea_query::{Expr, extension::postgres::PgExpr as _},
};
use uuid::Uuid;

use liftdesk_domain::checkin::AttendanceMethod;
use liftdesk_domain::gallery::{ImageCategory, ImageVisibility};
use liftdesk_domain::member::{Gender, format_member_code};
use liftdesk_domain::membership::{MembershipStatus, end_date as membership_end_date};
use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::payment::{PaymentMethod, PaymentStatus, format_invoice_number};
use liftdesk_domain::user::{UserRole, UserStatus};
use liftdesk_domain::workout::WorkoutPlanType;
use liftdesk_schema::{
    attendance, gym_images, gym_settings, member_workouts, members, membership_plans, memberships,
    payments, progress_records, users, workout_plans,
};

use crate::domain::repository::{
    AttendanceListFilter, AttendanceRepository, GalleryRepository, GymImageChanges, MemberChanges,
    MemberListFilter, MemberRepository, MembershipRepository, NewMember, NewMembershipPayment,
    PaymentListFilter, PaymentRepository, PlanChanges, PlanDeleteOutcome, PlanRepository,
    ProgressRepository, SettingsRepository, UserRepository, WorkoutChanges, WorkoutRepository,
};
use crate::domain::types::{
    Attendance, AttendanceWithMember, GymImage, GymSettings, Member, MemberOverview,
    MemberWithUser, MemberWorkout, MemberWorkoutWithPlan, Membership, MembershipDetail,
    MembershipPlan, MembershipWithPlan, Payment, PaymentDetail, ProgressRecord, User, WorkoutPlan,
};
use crate::error::ApiError;

/// Next value for `scope` via an upsert on `sequence_counters`. Runs on the
/// caller's transaction so the row that consumes the value commits (or rolls
/// back) together with the counter bump.
async fn next_sequence(txn: &DatabaseTransaction, scope: &str) -> Result<i64, DbErr> {
    use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

    #[derive(Debug, FromQueryResult)]
    struct CounterRow {
        value: i64,
    }

    let row = CounterRow::find_by_statement(Statement::from_sql_and_values(
        txn.get_database_backend(),
        r#"
        INSERT INTO sequence_counters (scope, value) VALUES ($1, 1)
        ON CONFLICT (scope) DO UPDATE SET value = sequence_counters.value + 1
        RETURNING value
        "#,
        [scope.into()],
    ))
    .one(txn)
    .await?;
    row.map(|r| r.value)
        .ok_or_else(|| DbErr::Custom(format!("sequence upsert returned no row for {scope}")))
}

/// Members plus their users, keyed by member id. Used to hydrate rows that
/// reference members without dragging a three-way join through sea-orm.
async fn members_by_id(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, MemberWithUser>, ApiError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = members::Entity::find()
        .find_also_related(users::Entity)
        .filter(members::Column::Id.is_in(ids))
        .all(db)
        .await
        .context("load members by id")?;
    Ok(rows
        .into_iter()
        .filter_map(|(member, user)| {
            let user = user?;
            Some((
                member.id,
                MemberWithUser {
                    member: member_from_model(member),
                    user: user_from_model(user),
                },
            ))
        })
        .collect())
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .context("find user by mobile")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user password")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        mobile: model.mobile,
        password_hash: model.password_hash,
        role: UserRole::parse(&model.role).unwrap_or(UserRole::Member),
        status: UserStatus::parse(&model.status).unwrap_or(UserStatus::Inactive),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Member repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMemberRepository {
    pub db: DatabaseConnection,
}

impl MemberRepository for DbMemberRepository {
    async fn list(
        &self,
        filter: MemberListFilter,
        page: PageRequest,
    ) -> Result<(Vec<MemberOverview>, u64), ApiError> {
        let page = page.clamped();
        let mut query = members::Entity::find().find_also_related(users::Entity);
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(Expr::col((users::Entity, users::Column::FullName)).ilike(pattern.clone()))
                    .add(Expr::col((users::Entity, users::Column::Mobile)).ilike(pattern.clone()))
                    .add(Expr::col((members::Entity, members::Column::MemberCode)).ilike(pattern)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(users::Column::Status.eq(status.as_str()));
        }

        let total = query.clone().count(&self.db).await.context("count members")?;
        let rows = query
            .order_by_desc(members::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list members")?;

        // One extra query for the page's current memberships instead of one
        // per row.
        let ids: Vec<Uuid> = rows.iter().map(|(member, _)| member.id).collect();
        let mut current: HashMap<Uuid, MembershipWithPlan> = HashMap::new();
        if !ids.is_empty() {
            let membership_rows = memberships::Entity::find()
                .find_also_related(membership_plans::Entity)
                .filter(memberships::Column::MemberId.is_in(ids))
                .filter(memberships::Column::Status.eq(MembershipStatus::Active.as_str()))
                .order_by_desc(memberships::Column::EndDate)
                .all(&self.db)
                .await
                .context("list current memberships")?;
            for (membership, plan) in membership_rows {
                let Some(plan) = plan else { continue };
                let member_id = membership.member_id;
                // Rows arrive latest end_date first; keep the first per member.
                current.entry(member_id).or_insert_with(|| MembershipWithPlan {
                    membership: membership_from_model(membership),
                    plan: plan_from_model(plan),
                });
            }
        }

        let overviews = rows
            .into_iter()
            .filter_map(|(member, user)| {
                let user = user?;
                let current_membership = current.remove(&member.id);
                Some(MemberOverview {
                    member: member_from_model(member),
                    user: user_from_model(user),
                    current_membership,
                })
            })
            .collect();
        Ok((overviews, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MemberWithUser>, ApiError> {
        let row = members::Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find member by id")?;
        Ok(member_with_user(row))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<MemberWithUser>, ApiError> {
        let row = members::Entity::find()
            .filter(members::Column::UserId.eq(user_id))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find member by user id")?;
        Ok(member_with_user(row))
    }

    async fn find_by_code(&self, member_code: &str) -> Result<Option<MemberWithUser>, ApiError> {
        let row = members::Entity::find()
            .filter(members::Column::MemberCode.eq(member_code))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find member by code")?;
        Ok(member_with_user(row))
    }

    async fn create(&self, input: NewMember) -> Result<MemberWithUser, ApiError> {
        let (member, user) = self
            .db
            .transaction::<_, (members::Model, users::Model), DbErr>(|txn| {
                let input = input.clone();
                Box::pin(async move {
                    let now = Utc::now();
                    let seq = next_sequence(txn, "member-code").await?;
                    let user = users::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        full_name: Set(input.full_name),
                        email: Set(input.email),
                        mobile: Set(input.mobile),
                        password_hash: Set(input.password_hash),
                        role: Set(UserRole::Member.as_str().to_owned()),
                        status: Set(UserStatus::Active.as_str().to_owned()),
                        created_at: Set(now),
                        updated_at: Set(now),
                    }
                    .insert(txn)
                    .await?;
                    let member = members::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        member_code: Set(format_member_code(seq)),
                        user_id: Set(user.id),
                        gender: Set(input.gender.as_str().to_owned()),
                        date_of_birth: Set(input.date_of_birth),
                        height_cm: Set(input.height_cm),
                        weight_kg: Set(input.weight_kg),
                        fitness_goal: Set(input.fitness_goal),
                        medical_notes: Set(input.medical_notes),
                        emergency_contact: Set(input.emergency_contact),
                        join_date: Set(input.join_date),
                        created_at: Set(now),
                        updated_at: Set(now),
                    }
                    .insert(txn)
                    .await?;
                    Ok((member, user))
                })
            })
            .await
            .context("create member")?;
        Ok(MemberWithUser {
            member: member_from_model(member),
            user: user_from_model(user),
        })
    }

    async fn update(&self, id: Uuid, changes: MemberChanges) -> Result<MemberWithUser, ApiError> {
        let row = self
            .db
            .transaction::<_, Option<(members::Model, users::Model)>, DbErr>(|txn| {
                let changes = changes.clone();
                Box::pin(async move {
                    let Some((member, Some(user))) = members::Entity::find_by_id(id)
                        .find_also_related(users::Entity)
                        .one(txn)
                        .await?
                    else {
                        return Ok(None);
                    };
                    let now = Utc::now();

                    let mut user_am = users::ActiveModel {
                        id: Set(user.id),
                        ..Default::default()
                    };
                    if let Some(v) = changes.full_name {
                        user_am.full_name = Set(v);
                    }
                    if let Some(v) = changes.email {
                        user_am.email = Set(Some(v));
                    }
                    if let Some(v) = changes.mobile {
                        user_am.mobile = Set(v);
                    }
                    if let Some(v) = changes.status {
                        user_am.status = Set(v.as_str().to_owned());
                    }
                    user_am.updated_at = Set(now);
                    let user = user_am.update(txn).await?;

                    let mut member_am = members::ActiveModel {
                        id: Set(member.id),
                        ..Default::default()
                    };
                    if let Some(v) = changes.gender {
                        member_am.gender = Set(v.as_str().to_owned());
                    }
                    if let Some(v) = changes.date_of_birth {
                        member_am.date_of_birth = Set(v);
                    }
                    if let Some(v) = changes.height_cm {
                        member_am.height_cm = Set(Some(v));
                    }
                    if let Some(v) = changes.weight_kg {
                        member_am.weight_kg = Set(Some(v));
                    }
                    if let Some(v) = changes.fitness_goal {
                        member_am.fitness_goal = Set(Some(v));
                    }
                    if let Some(v) = changes.medical_notes {
                        member_am.medical_notes = Set(Some(v));
                    }
                    if let Some(v) = changes.emergency_contact {
                        member_am.emergency_contact = Set(Some(v));
                    }
                    member_am.updated_at = Set(now);
                    let member = member_am.update(txn).await?;

                    Ok(Some((member, user)))
                })
            })
            .await
            .context("update member")?;
        let (member, user) = row.ok_or(ApiError::NotFound("Member"))?;
        Ok(MemberWithUser {
            member: member_from_model(member),
            user: user_from_model(user),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        // The member row hangs off the user row, so deleting the user
        // cascades through the member and everything under it.
        let Some(member) = members::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find member for delete")?
        else {
            return Ok(false);
        };
        let result = users::Entity::delete_by_id(member.user_id)
            .exec(&self.db)
            .await
            .context("delete member user")?;
        Ok(result.rows_affected > 0)
    }

    async fn count_total(&self) -> Result<u64, ApiError> {
        let total = members::Entity::find()
            .count(&self.db)
            .await
            .context("count all members")?;
        Ok(total)
    }

    async fn count_active(&self, now: DateTime<Utc>) -> Result<u64, ApiError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        #[derive(Debug, FromQueryResult)]
        struct CountRow {
            count: i64,
        }

        let row = CountRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT COUNT(DISTINCT member_id) AS count FROM memberships
            WHERE status = $1 AND end_date > $2
            "#,
            [MembershipStatus::Active.as_str().into(), now.into()],
        ))
        .one(&self.db)
        .await
        .context("count active members")?;
        Ok(row.map(|r| r.count as u64).unwrap_or(0))
    }

    async fn count_joined_since(&self, since: NaiveDate) -> Result<u64, ApiError> {
        let total = members::Entity::find()
            .filter(members::Column::JoinDate.gte(since))
            .count(&self.db)
            .await
            .context("count recent joins")?;
        Ok(total)
    }
}

fn member_with_user(row: Option<(members::Model, Option<users::Model>)>) -> Option<MemberWithUser> {
    row.and_then(|(member, user)| {
        let user = user?;
        Some(MemberWithUser {
            member: member_from_model(member),
            user: user_from_model(user),
        })
    })
}

fn member_from_model(model: members::Model) -> Member {
    Member {
        id: model.id,
        member_code: model.member_code,
        user_id: model.user_id,
        gender: Gender::parse(&model.gender).unwrap_or(Gender::Other),
        date_of_birth: model.date_of_birth,
        height_cm: model.height_cm,
        weight_kg: model.weight_kg,
        fitness_goal: model.fitness_goal,
        medical_notes: model.medical_notes,
        emergency_contact: model.emergency_contact,
        join_date: model.join_date,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Plan repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanRepository {
    pub db: DatabaseConnection,
}

impl PlanRepository for DbPlanRepository {
    async fn list(&self, include_inactive: bool) -> Result<Vec<MembershipPlan>, ApiError> {
        let mut query = membership_plans::Entity::find();
        if !include_inactive {
            query = query.filter(membership_plans::Column::IsActive.eq(true));
        }
        let models = query
            .order_by_asc(membership_plans::Column::DurationDays)
            .all(&self.db)
            .await
            .context("list membership plans")?;
        Ok(models.into_iter().map(plan_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MembershipPlan>, ApiError> {
        let model = membership_plans::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find membership plan")?;
        Ok(model.map(plan_from_model))
    }

    async fn create(&self, plan: &MembershipPlan) -> Result<(), ApiError> {
        membership_plans::ActiveModel {
            id: Set(plan.id),
            name: Set(plan.name.clone()),
            duration_days: Set(plan.duration_days),
            base_price_paise: Set(plan.base_price_paise),
            gst_percent: Set(plan.gst_percent),
            final_price_paise: Set(plan.final_price_paise),
            description: Set(plan.description.clone()),
            features: Set(serde_json::json!(plan.features)),
            is_active: Set(plan.is_active),
            created_at: Set(plan.created_at),
            updated_at: Set(plan.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create membership plan")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: PlanChanges) -> Result<MembershipPlan, ApiError> {
        let mut am = membership_plans::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(v) = changes.name {
            am.name = Set(v);
        }
        if let Some(v) = changes.duration_days {
            am.duration_days = Set(v);
        }
        if let Some(v) = changes.base_price_paise {
            am.base_price_paise = Set(v);
        }
        if let Some(v) = changes.final_price_paise {
            am.final_price_paise = Set(v);
        }
        if let Some(v) = changes.gst_percent {
            am.gst_percent = Set(v);
        }
        if let Some(v) = changes.description {
            am.description = Set(Some(v));
        }
        if let Some(v) = changes.features {
            am.features = Set(serde_json::json!(v));
        }
        if let Some(v) = changes.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now());
        let model = am
            .update(&self.db)
            .await
            .context("update membership plan")?;
        Ok(plan_from_model(model))
    }

    async fn delete_if_unused(&self, id: Uuid) -> Result<PlanDeleteOutcome, ApiError> {
        let outcome = self
            .db
            .transaction::<_, PlanDeleteOutcome, DbErr>(|txn| {
                Box::pin(async move {
                    let active = memberships::Entity::find()
                        .filter(memberships::Column::PlanId.eq(id))
                        .filter(
                            memberships::Column::Status.eq(MembershipStatus::Active.as_str()),
                        )
                        .count(txn)
                        .await?;
                    if active > 0 {
                        return Ok(PlanDeleteOutcome::ActiveMemberships(active));
                    }
                    let total = memberships::Entity::find()
                        .filter(memberships::Column::PlanId.eq(id))
                        .count(txn)
                        .await?;
                    if total > 0 {
                        return Ok(PlanDeleteOutcome::HasHistory);
                    }
                    membership_plans::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(PlanDeleteOutcome::Deleted)
                })
            })
            .await
            .context("delete membership plan")?;
        Ok(outcome)
    }
}

fn plan_from_model(model: membership_plans::Model) -> MembershipPlan {
    MembershipPlan {
        id: model.id,
        name: model.name,
        duration_days: model.duration_days,
        base_price_paise: model.base_price_paise,
        gst_percent: model.gst_percent,
        final_price_paise: model.final_price_paise,
        description: model.description,
        features: serde_json::from_value(model.features).unwrap_or_default(),
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Membership repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMembershipRepository {
    pub db: DatabaseConnection,
}

impl MembershipRepository for DbMembershipRepository {
    async fn current_for_member(
        &self,
        member_id: Uuid,
    ) -> Result<Option<MembershipWithPlan>, ApiError> {
        let row = memberships::Entity::find()
            .find_also_related(membership_plans::Entity)
            .filter(memberships::Column::MemberId.eq(member_id))
            .filter(memberships::Column::Status.eq(MembershipStatus::Active.as_str()))
            .order_by_desc(memberships::Column::EndDate)
            .one(&self.db)
            .await
            .context("find current membership")?;
        Ok(row.and_then(|(membership, plan)| {
            let plan = plan?;
            Some(MembershipWithPlan {
                membership: membership_from_model(membership),
                plan: plan_from_model(plan),
            })
        }))
    }

    async fn list_for_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<MembershipWithPlan>, ApiError> {
        let rows = memberships::Entity::find()
            .find_also_related(membership_plans::Entity)
            .filter(memberships::Column::MemberId.eq(member_id))
            .order_by_desc(memberships::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list memberships for member")?;
        Ok(rows
            .into_iter()
            .filter_map(|(membership, plan)| {
                let plan = plan?;
                Some(MembershipWithPlan {
                    membership: membership_from_model(membership),
                    plan: plan_from_model(plan),
                })
            })
            .collect())
    }

    async fn expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MembershipDetail>, ApiError> {
        let rows = memberships::Entity::find()
            .find_also_related(membership_plans::Entity)
            .filter(memberships::Column::Status.eq(MembershipStatus::Active.as_str()))
            .filter(memberships::Column::EndDate.gte(from))
            .filter(memberships::Column::EndDate.lte(to))
            .order_by_asc(memberships::Column::EndDate)
            .all(&self.db)
            .await
            .context("list expiring memberships")?;

        let member_ids: Vec<Uuid> = rows.iter().map(|(m, _)| m.member_id).collect();
        let members = members_by_id(&self.db, member_ids).await?;

        let mut details = Vec::with_capacity(rows.len());
        for (membership, plan) in rows {
            let Some(plan) = plan else { continue };
            let Some(mw) = members.get(&membership.member_id) else {
                continue;
            };
            details.push(MembershipDetail {
                membership: membership_from_model(membership),
                plan: plan_from_model(plan),
                member: mw.member.clone(),
                user: mw.user.clone(),
            });
        }
        Ok(details)
    }

    async fn stamp_notification(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError> {
        memberships::ActiveModel {
            id: Set(id),
            last_notification_date: Set(Some(at)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("stamp membership notification")?;
        Ok(())
    }
}

fn membership_from_model(model: memberships::Model) -> Membership {
    Membership {
        id: model.id,
        member_id: model.member_id,
        plan_id: model.plan_id,
        start_date: model.start_date,
        end_date: model.end_date,
        status: MembershipStatus::parse(&model.status).unwrap_or(MembershipStatus::Expired),
        frozen_days: model.frozen_days,
        last_notification_date: model.last_notification_date,
        created_at: model.created_at,
    }
}

// ── Payment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPaymentRepository {
    pub db: DatabaseConnection,
}

impl DbPaymentRepository {
    /// Joins payment rows out to member, user, membership and plan with two
    /// batched lookups. Rows whose references are gone are dropped.
    async fn hydrate(&self, models: Vec<payments::Model>) -> Result<Vec<PaymentDetail>, ApiError> {
        let member_ids: Vec<Uuid> = models.iter().map(|m| m.member_id).collect();
        let members = members_by_id(&self.db, member_ids).await?;

        let membership_ids: Vec<Uuid> = models.iter().map(|m| m.membership_id).collect();
        let mut memberships_with_plans: HashMap<Uuid, (Membership, MembershipPlan)> =
            HashMap::new();
        if !membership_ids.is_empty() {
            let rows = memberships::Entity::find()
                .find_also_related(membership_plans::Entity)
                .filter(memberships::Column::Id.is_in(membership_ids))
                .all(&self.db)
                .await
                .context("load payment memberships")?;
            for (membership, plan) in rows {
                let Some(plan) = plan else { continue };
                let membership_id = membership.id;
                memberships_with_plans.insert(
                    membership_id,
                    (membership_from_model(membership), plan_from_model(plan)),
                );
            }
        }

        let mut details = Vec::with_capacity(models.len());
        for model in models {
            let Some(mw) = members.get(&model.member_id) else {
                continue;
            };
            let Some((membership, plan)) = memberships_with_plans.get(&model.membership_id)
            else {
                continue;
            };
            details.push(PaymentDetail {
                payment: payment_from_model(model),
                member: mw.member.clone(),
                user: mw.user.clone(),
                membership: membership.clone(),
                plan: plan.clone(),
            });
        }
        Ok(details)
    }
}

impl PaymentRepository for DbPaymentRepository {
    async fn list(
        &self,
        filter: PaymentListFilter,
        page: PageRequest,
    ) -> Result<(Vec<PaymentDetail>, u64), ApiError> {
        let page = page.clamped();
        let mut query = payments::Entity::find();
        if let Some(member_id) = filter.member_id {
            query = query.filter(payments::Column::MemberId.eq(member_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(payments::Column::Status.eq(status.as_str()));
        }
        if let Some(from) = filter.from {
            query = query.filter(payments::Column::CreatedAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(payments::Column::CreatedAt.lte(to));
        }

        let total = query.clone().count(&self.db).await.context("count payments")?;
        let models = query
            .order_by_desc(payments::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list payments")?;
        let details = self.hydrate(models).await?;
        Ok((details, total))
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<PaymentDetail>, ApiError> {
        let Some(model) = payments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find payment")?
        else {
            return Ok(None);
        };
        Ok(self.hydrate(vec![model]).await?.into_iter().next())
    }

    async fn record_membership_payment(
        &self,
        input: NewMembershipPayment,
    ) -> Result<(Payment, Membership), ApiError> {
        let result = self
            .db
            .transaction::<_, (payments::Model, memberships::Model), DbErr>(|txn| {
                let input = input.clone();
                Box::pin(async move {
                    let year = input.now.year();
                    let seq = next_sequence(txn, &format!("invoice-{year}")).await?;

                    let membership = memberships::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        member_id: Set(input.member_id),
                        plan_id: Set(input.plan.id),
                        start_date: Set(input.now),
                        end_date: Set(membership_end_date(input.now, input.plan.duration_days)),
                        status: Set(MembershipStatus::Active.as_str().to_owned()),
                        frozen_days: Set(0),
                        last_notification_date: Set(None),
                        created_at: Set(input.now),
                    }
                    .insert(txn)
                    .await?;

                    let payment = payments::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        invoice_number: Set(format_invoice_number(year, seq)),
                        member_id: Set(input.member_id),
                        membership_id: Set(membership.id),
                        amount_paise: Set(input.plan.final_price_paise),
                        gst_amount_paise: Set(0),
                        method: Set(input.method.as_str().to_owned()),
                        gateway_order_id: Set(input.gateway_order_id),
                        gateway_payment_id: Set(input.gateway_payment_id),
                        status: Set(PaymentStatus::Completed.as_str().to_owned()),
                        paid_at: Set(Some(input.now)),
                        created_at: Set(input.now),
                    }
                    .insert(txn)
                    .await?;

                    Ok((payment, membership))
                })
            })
            .await;
        let (payment, membership) = match result {
            Ok(pair) => pair,
            // A replayed gateway payment id trips the unique index.
            Err(TransactionError::Transaction(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                return Err(ApiError::Conflict(
                    "This payment has already been recorded".to_owned(),
                ));
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context("record membership payment")
                    .into());
            }
        };
        Ok((payment_from_model(payment), membership_from_model(membership)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = payments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete payment")?;
        Ok(result.rows_affected > 0)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<PaymentDetail>, ApiError> {
        let models = payments::Entity::find()
            .order_by_desc(payments::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent payments")?;
        self.hydrate(models).await
    }

    async fn revenue_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        #[derive(Debug, FromQueryResult)]
        struct SumRow {
            total: i64,
        }

        let row = SumRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"
            SELECT COALESCE(SUM(amount_paise), 0)::BIGINT AS total FROM payments
            WHERE status = $1 AND created_at >= $2 AND created_at < $3
            "#,
            [
                PaymentStatus::Completed.as_str().into(),
                from.into(),
                to.into(),
            ],
        ))
        .one(&self.db)
        .await
        .context("sum revenue")?;
        Ok(row.map(|r| r.total).unwrap_or(0))
    }
}

fn payment_from_model(model: payments::Model) -> Payment {
    Payment {
        id: model.id,
        invoice_number: model.invoice_number,
        member_id: model.member_id,
        membership_id: model.membership_id,
        amount_paise: model.amount_paise,
        gst_amount_paise: model.gst_amount_paise,
        method: PaymentMethod::parse(&model.method).unwrap_or(PaymentMethod::Cash),
        gateway_order_id: model.gateway_order_id,
        gateway_payment_id: model.gateway_payment_id,
        status: PaymentStatus::parse(&model.status).unwrap_or(PaymentStatus::Failed),
        paid_at: model.paid_at,
        created_at: model.created_at,
    }
}

// ── Attendance repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAttendanceRepository {
    pub db: DatabaseConnection,
}

impl AttendanceRepository for DbAttendanceRepository {
    async fn open_session(&self, member_id: Uuid) -> Result<Option<Attendance>, ApiError> {
        let model = attendance::Entity::find()
            .filter(attendance::Column::MemberId.eq(member_id))
            .filter(attendance::Column::CheckOutTime.is_null())
            .order_by_desc(attendance::Column::CheckInTime)
            .one(&self.db)
            .await
            .context("find open attendance session")?;
        Ok(model.map(attendance_from_model))
    }

    async fn create(&self, record: &Attendance) -> Result<(), ApiError> {
        attendance::ActiveModel {
            id: Set(record.id),
            member_id: Set(record.member_id),
            check_in_time: Set(record.check_in_time),
            check_out_time: Set(record.check_out_time),
            method: Set(record.method.as_str().to_owned()),
        }
        .insert(&self.db)
        .await
        .context("create attendance record")?;
        Ok(())
    }

    async fn close_session(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError> {
        attendance::ActiveModel {
            id: Set(id),
            check_out_time: Set(Some(at)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("close attendance session")?;
        Ok(())
    }

    async fn list(
        &self,
        filter: AttendanceListFilter,
        page: PageRequest,
    ) -> Result<(Vec<AttendanceWithMember>, u64), ApiError> {
        let page = page.clamped();
        let mut query = attendance::Entity::find();
        if let Some(date) = filter.date {
            let from = date.and_time(NaiveTime::MIN).and_utc();
            let to = from + Duration::days(1);
            query = query
                .filter(attendance::Column::CheckInTime.gte(from))
                .filter(attendance::Column::CheckInTime.lt(to));
        }
        if let Some(member_id) = filter.member_id {
            query = query.filter(attendance::Column::MemberId.eq(member_id));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count attendance")?;
        let models = query
            .order_by_desc(attendance::Column::CheckInTime)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list attendance")?;

        let member_ids: Vec<Uuid> = models.iter().map(|m| m.member_id).collect();
        let members = members_by_id(&self.db, member_ids).await?;

        let rows = models
            .into_iter()
            .filter_map(|model| {
                let mw = members.get(&model.member_id)?;
                Some(AttendanceWithMember {
                    attendance: attendance_from_model(model),
                    member: mw.member.clone(),
                    user: mw.user.clone(),
                })
            })
            .collect();
        Ok((rows, total))
    }

    async fn list_for_member(
        &self,
        member_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<Attendance>, u64), ApiError> {
        let page = page.clamped();
        let query = attendance::Entity::find()
            .filter(attendance::Column::MemberId.eq(member_id));
        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count member attendance")?;
        let models = query
            .order_by_desc(attendance::Column::CheckInTime)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list member attendance")?;
        Ok((models.into_iter().map(attendance_from_model).collect(), total))
    }

    async fn recent_for_member(
        &self,
        member_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Attendance>, ApiError> {
        let models = attendance::Entity::find()
            .filter(attendance::Column::MemberId.eq(member_id))
            .order_by_desc(attendance::Column::CheckInTime)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent member attendance")?;
        Ok(models.into_iter().map(attendance_from_model).collect())
    }

    async fn count_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, ApiError> {
        let total = attendance::Entity::find()
            .filter(attendance::Column::CheckInTime.gte(from))
            .filter(attendance::Column::CheckInTime.lt(to))
            .count(&self.db)
            .await
            .context("count attendance in range")?;
        Ok(total)
    }

    async fn count_for_member_between(
        &self,
        member_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, ApiError> {
        let total = attendance::Entity::find()
            .filter(attendance::Column::MemberId.eq(member_id))
            .filter(attendance::Column::CheckInTime.gte(from))
            .filter(attendance::Column::CheckInTime.lt(to))
            .count(&self.db)
            .await
            .context("count member attendance in range")?;
        Ok(total)
    }

    async fn count_open(&self) -> Result<u64, ApiError> {
        let total = attendance::Entity::find()
            .filter(attendance::Column::CheckOutTime.is_null())
            .count(&self.db)
            .await
            .context("count open sessions")?;
        Ok(total)
    }
}

fn attendance_from_model(model: attendance::Model) -> Attendance {
    Attendance {
        id: model.id,
        member_id: model.member_id,
        check_in_time: model.check_in_time,
        check_out_time: model.check_out_time,
        method: AttendanceMethod::parse(&model.method).unwrap_or(AttendanceMethod::Manual),
    }
}

// ── Workout repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWorkoutRepository {
    pub db: DatabaseConnection,
}

impl WorkoutRepository for DbWorkoutRepository {
    async fn list(&self, only_active: bool) -> Result<Vec<WorkoutPlan>, ApiError> {
        let mut query = workout_plans::Entity::find();
        if only_active {
            query = query.filter(workout_plans::Column::IsActive.eq(true));
        }
        let models = query
            .order_by_desc(workout_plans::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list workout plans")?;
        Ok(models.into_iter().map(workout_plan_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkoutPlan>, ApiError> {
        let model = workout_plans::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find workout plan")?;
        Ok(model.map(workout_plan_from_model))
    }

    async fn create(&self, plan: &WorkoutPlan) -> Result<(), ApiError> {
        workout_plans::ActiveModel {
            id: Set(plan.id),
            name: Set(plan.name.clone()),
            plan_type: Set(plan.plan_type.as_str().to_owned()),
            description: Set(plan.description.clone()),
            days: Set(serde_json::json!(plan.days)),
            days_per_week: Set(plan.days_per_week),
            is_active: Set(plan.is_active),
            created_at: Set(plan.created_at),
            updated_at: Set(plan.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create workout plan")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: WorkoutChanges) -> Result<WorkoutPlan, ApiError> {
        let mut am = workout_plans::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(v) = changes.name {
            am.name = Set(v);
        }
        if let Some(v) = changes.plan_type {
            am.plan_type = Set(v.as_str().to_owned());
        }
        if let Some(v) = changes.description {
            am.description = Set(Some(v));
        }
        if let Some(v) = changes.days {
            am.days = Set(serde_json::json!(v));
        }
        if let Some(v) = changes.days_per_week {
            am.days_per_week = Set(v);
        }
        if let Some(v) = changes.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.context("update workout plan")?;
        Ok(workout_plan_from_model(model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        // Assignment rows survive the delete: they are deactivated here and
        // the FK nulls their plan reference.
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    member_workouts::Entity::update_many()
                        .filter(member_workouts::Column::WorkoutPlanId.eq(id))
                        .filter(member_workouts::Column::IsActive.eq(true))
                        .col_expr(member_workouts::Column::IsActive, Expr::value(false))
                        .exec(txn)
                        .await?;

                    let result = workout_plans::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete workout plan")?;
        Ok(deleted)
    }

    async fn assign(
        &self,
        member_id: Uuid,
        workout_plan_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<MemberWorkout, ApiError> {
        let model = self
            .db
            .transaction::<_, member_workouts::Model, DbErr>(|txn| {
                Box::pin(async move {
                    member_workouts::Entity::update_many()
                        .filter(member_workouts::Column::MemberId.eq(member_id))
                        .filter(member_workouts::Column::IsActive.eq(true))
                        .col_expr(member_workouts::Column::IsActive, Expr::value(false))
                        .exec(txn)
                        .await?;

                    member_workouts::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        member_id: Set(member_id),
                        workout_plan_id: Set(Some(workout_plan_id)),
                        assigned_at: Set(at),
                        is_active: Set(true),
                    }
                    .insert(txn)
                    .await
                })
            })
            .await
            .context("assign workout plan")?;
        Ok(member_workout_from_model(model))
    }

    async fn active_assignment(
        &self,
        member_id: Uuid,
    ) -> Result<Option<MemberWorkoutWithPlan>, ApiError> {
        let row = member_workouts::Entity::find()
            .find_also_related(workout_plans::Entity)
            .filter(member_workouts::Column::MemberId.eq(member_id))
            .filter(member_workouts::Column::IsActive.eq(true))
            .order_by_desc(member_workouts::Column::AssignedAt)
            .one(&self.db)
            .await
            .context("find active workout assignment")?;
        Ok(row.and_then(|(assignment, plan)| {
            let plan = plan?;
            Some(MemberWorkoutWithPlan {
                assignment: member_workout_from_model(assignment),
                plan: workout_plan_from_model(plan),
            })
        }))
    }
}

fn workout_plan_from_model(model: workout_plans::Model) -> WorkoutPlan {
    WorkoutPlan {
        id: model.id,
        name: model.name,
        plan_type: WorkoutPlanType::parse(&model.plan_type).unwrap_or(WorkoutPlanType::Custom),
        description: model.description,
        days: serde_json::from_value(model.days).unwrap_or_default(),
        days_per_week: model.days_per_week,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn member_workout_from_model(model: member_workouts::Model) -> MemberWorkout {
    MemberWorkout {
        id: model.id,
        member_id: model.member_id,
        workout_plan_id: model.workout_plan_id,
        assigned_at: model.assigned_at,
        is_active: model.is_active,
    }
}

// ── Progress repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProgressRepository {
    pub db: DatabaseConnection,
}

impl ProgressRepository for DbProgressRepository {
    async fn create(&self, record: &ProgressRecord) -> Result<(), ApiError> {
        progress_records::ActiveModel {
            id: Set(record.id),
            member_id: Set(record.member_id),
            weight_kg: Set(record.weight_kg),
            body_fat_pct: Set(record.body_fat_pct),
            chest_cm: Set(record.chest_cm),
            waist_cm: Set(record.waist_cm),
            hips_cm: Set(record.hips_cm),
            arms_cm: Set(record.arms_cm),
            thighs_cm: Set(record.thighs_cm),
            photo_url: Set(record.photo_url.clone()),
            notes: Set(record.notes.clone()),
            recorded_at: Set(record.recorded_at),
        }
        .insert(&self.db)
        .await
        .context("create progress record")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProgressRecord>, ApiError> {
        let model = progress_records::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find progress record")?;
        Ok(model.map(progress_from_model))
    }

    async fn list_for_member(
        &self,
        member_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<ProgressRecord>, u64), ApiError> {
        let page = page.clamped();
        let query = progress_records::Entity::find()
            .filter(progress_records::Column::MemberId.eq(member_id));
        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count progress records")?;
        let models = query
            .order_by_desc(progress_records::Column::RecordedAt)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list progress records")?;
        Ok((models.into_iter().map(progress_from_model).collect(), total))
    }

    async fn recent_for_member(
        &self,
        member_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ProgressRecord>, ApiError> {
        let models = progress_records::Entity::find()
            .filter(progress_records::Column::MemberId.eq(member_id))
            .order_by_desc(progress_records::Column::RecordedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent progress records")?;
        Ok(models.into_iter().map(progress_from_model).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = progress_records::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete progress record")?;
        Ok(result.rows_affected > 0)
    }
}

fn progress_from_model(model: progress_records::Model) -> ProgressRecord {
    ProgressRecord {
        id: model.id,
        member_id: model.member_id,
        weight_kg: model.weight_kg,
        body_fat_pct: model.body_fat_pct,
        chest_cm: model.chest_cm,
        waist_cm: model.waist_cm,
        hips_cm: model.hips_cm,
        arms_cm: model.arms_cm,
        thighs_cm: model.thighs_cm,
        photo_url: model.photo_url,
        notes: model.notes,
        recorded_at: model.recorded_at,
    }
}

// ── Gallery repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGalleryRepository {
    pub db: DatabaseConnection,
}

impl GalleryRepository for DbGalleryRepository {
    async fn list(
        &self,
        category: Option<ImageCategory>,
        public_only: bool,
    ) -> Result<Vec<GymImage>, ApiError> {
        let mut query = gym_images::Entity::find();
        if let Some(category) = category {
            query = query.filter(gym_images::Column::Category.eq(category.as_str()));
        }
        if public_only {
            query = query.filter(gym_images::Column::Visibility.eq(ImageVisibility::Public.as_str()));
        }
        let models = query
            .order_by_asc(gym_images::Column::SortOrder)
            .order_by_desc(gym_images::Column::UploadedAt)
            .all(&self.db)
            .await
            .context("list gym images")?;
        Ok(models.into_iter().map(image_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GymImage>, ApiError> {
        let model = gym_images::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find gym image")?;
        Ok(model.map(image_from_model))
    }

    async fn create(&self, image: &GymImage) -> Result<(), ApiError> {
        gym_images::ActiveModel {
            id: Set(image.id),
            title: Set(image.title.clone()),
            category: Set(image.category.as_str().to_owned()),
            image_url: Set(image.image_url.clone()),
            visibility: Set(image.visibility.as_str().to_owned()),
            sort_order: Set(image.sort_order),
            uploaded_at: Set(image.uploaded_at),
        }
        .insert(&self.db)
        .await
        .context("create gym image")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: GymImageChanges) -> Result<GymImage, ApiError> {
        let mut am = gym_images::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(v) = changes.title {
            am.title = Set(Some(v));
        }
        if let Some(v) = changes.category {
            am.category = Set(v.as_str().to_owned());
        }
        if let Some(v) = changes.visibility {
            am.visibility = Set(v.as_str().to_owned());
        }
        if let Some(v) = changes.sort_order {
            am.sort_order = Set(v);
        }
        let model = am.update(&self.db).await.context("update gym image")?;
        Ok(image_from_model(model))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<GymImage>, ApiError> {
        let Some(model) = gym_images::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find gym image for delete")?
        else {
            return Ok(None);
        };
        gym_images::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete gym image")?;
        Ok(Some(image_from_model(model)))
    }
}

fn image_from_model(model: gym_images::Model) -> GymImage {
    GymImage {
        id: model.id,
        title: model.title,
        category: ImageCategory::parse(&model.category).unwrap_or(ImageCategory::Gallery),
        image_url: model.image_url,
        visibility: ImageVisibility::parse(&model.visibility).unwrap_or(ImageVisibility::Public),
        sort_order: model.sort_order,
        uploaded_at: model.uploaded_at,
    }
}

// ── Settings repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSettingsRepository {
    pub db: DatabaseConnection,
}

impl SettingsRepository for DbSettingsRepository {
    async fn get(&self) -> Result<Option<GymSettings>, ApiError> {
        let model = gym_settings::Entity::find()
            .one(&self.db)
            .await
            .context("load gym settings")?;
        Ok(model.map(settings_from_model))
    }

    async fn upsert(&self, settings: &GymSettings) -> Result<GymSettings, ApiError> {
        let existing = gym_settings::Entity::find()
            .one(&self.db)
            .await
            .context("load gym settings for upsert")?;

        let mut am = gym_settings::ActiveModel {
            gym_name: Set(settings.gym_name.clone()),
            tagline: Set(settings.tagline.clone()),
            address: Set(settings.address.clone()),
            phone: Set(settings.phone.clone()),
            email: Set(settings.email.clone()),
            website: Set(settings.website.clone()),
            gstin: Set(settings.gstin.clone()),
            logo_url: Set(settings.logo_url.clone()),
            working_hours: Set(settings.working_hours.clone()),
            currency: Set(settings.currency.clone()),
            timezone: Set(settings.timezone.clone()),
            social_links: Set(settings.social_links.clone()),
            notifications: Set(serde_json::json!(settings.notifications)),
            updated_at: Set(settings.updated_at),
            ..Default::default()
        };
        let model = match existing {
            Some(existing) => {
                am.id = Set(existing.id);
                am.update(&self.db).await.context("update gym settings")?
            }
            None => {
                am.id = Set(Uuid::now_v7());
                am.insert(&self.db).await.context("insert gym settings")?
            }
        };
        Ok(settings_from_model(model))
    }
}

fn settings_from_model(model: gym_settings::Model) -> GymSettings {
    GymSettings {
        id: model.id,
        gym_name: model.gym_name,
        tagline: model.tagline,
        address: model.address,
        phone: model.phone,
        email: model.email,
        website: model.website,
        gstin: model.gstin,
        logo_url: model.logo_url,
        working_hours: model.working_hours,
        currency: model.currency,
        timezone: model.timezone,
        social_links: model.social_links,
        notifications: serde_json::from_value(model.notifications).unwrap_or_default(),
        updated_at: model.updated_at,
    }
}
