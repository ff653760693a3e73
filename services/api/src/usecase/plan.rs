use chrono::Utc;
use uuid::Uuid;

use liftdesk_domain::money::{gst_breakdown, rupees_to_paise};

use crate::domain::repository::{PlanChanges, PlanDeleteOutcome, PlanRepository};
use crate::domain::types::MembershipPlan;
use crate::error::ApiError;

// ── ListPlans / GetPlan ──────────────────────────────────────────────────────

pub struct ListPlansUseCase<P: PlanRepository> {
    pub plans: P,
}

impl<P: PlanRepository> ListPlansUseCase<P> {
    /// Plans come back shortest duration first.
    pub async fn execute(&self, include_inactive: bool) -> Result<Vec<MembershipPlan>, ApiError> {
        let mut plans = self.plans.list(include_inactive).await?;
        plans.sort_by_key(|plan| plan.duration_days);
        Ok(plans)
    }
}

pub struct GetPlanUseCase<P: PlanRepository> {
    pub plans: P,
}

impl<P: PlanRepository> GetPlanUseCase<P> {
    pub async fn execute(&self, plan_id: Uuid) -> Result<MembershipPlan, ApiError> {
        self.plans
            .find_by_id(plan_id)
            .await?
            .ok_or(ApiError::NotFound("Plan"))
    }
}

// ── CreatePlan ───────────────────────────────────────────────────────────────

pub struct CreatePlanInput {
    pub name: String,
    pub duration_days: i32,
    /// Wire price in rupees; stored as paise.
    pub price_rupees: f64,
    pub gst_percent: Option<i32>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
}

pub struct CreatePlanUseCase<P: PlanRepository> {
    pub plans: P,
}

impl<P: PlanRepository> CreatePlanUseCase<P> {
    pub async fn execute(&self, input: CreatePlanInput) -> Result<MembershipPlan, ApiError> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(ApiError::Validation("Plan name is required".to_owned()));
        }
        if input.duration_days <= 0 {
            return Err(ApiError::Validation(
                "Duration must be a positive number of days".to_owned(),
            ));
        }
        // Free plans are allowed; only negative prices are rejected.
        if input.price_rupees < 0.0 {
            return Err(ApiError::Validation("Price cannot be negative".to_owned()));
        }

        let breakdown = gst_breakdown(
            rupees_to_paise(input.price_rupees),
            input.gst_percent.unwrap_or(0),
        );
        let now = Utc::now();
        let plan = MembershipPlan {
            id: Uuid::now_v7(),
            name,
            duration_days: input.duration_days,
            base_price_paise: breakdown.base_paise,
            gst_percent: breakdown.gst_percent,
            final_price_paise: breakdown.total_paise,
            description: input.description,
            features: input.features,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        self.plans.create(&plan).await?;
        Ok(plan)
    }
}

// ── UpdatePlan ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdatePlanInput {
    pub name: Option<String>,
    pub duration_days: Option<i32>,
    pub price_rupees: Option<f64>,
    pub gst_percent: Option<i32>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

pub struct UpdatePlanUseCase<P: PlanRepository> {
    pub plans: P,
}

impl<P: PlanRepository> UpdatePlanUseCase<P> {
    pub async fn execute(
        &self,
        plan_id: Uuid,
        input: UpdatePlanInput,
    ) -> Result<MembershipPlan, ApiError> {
        let existing = self
            .plans
            .find_by_id(plan_id)
            .await?
            .ok_or(ApiError::NotFound("Plan"))?;

        let name = match input.name {
            Some(name) => {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(ApiError::Validation("Plan name is required".to_owned()));
                }
                Some(name)
            }
            None => None,
        };
        if matches!(input.duration_days, Some(d) if d <= 0) {
            return Err(ApiError::Validation(
                "Duration must be a positive number of days".to_owned(),
            ));
        }
        if matches!(input.price_rupees, Some(p) if p < 0.0) {
            return Err(ApiError::Validation("Price cannot be negative".to_owned()));
        }

        let mut changes = PlanChanges {
            name,
            duration_days: input.duration_days,
            description: input.description,
            features: input.features,
            is_active: input.is_active,
            ..Default::default()
        };
        // Any price or GST touch recomputes the whole breakdown.
        if input.price_rupees.is_some() || input.gst_percent.is_some() {
            let base = input
                .price_rupees
                .map(rupees_to_paise)
                .unwrap_or(existing.base_price_paise);
            let breakdown =
                gst_breakdown(base, input.gst_percent.unwrap_or(existing.gst_percent));
            changes.base_price_paise = Some(breakdown.base_paise);
            changes.gst_percent = Some(breakdown.gst_percent);
            changes.final_price_paise = Some(breakdown.total_paise);
        }

        self.plans.update(plan_id, changes).await
    }
}

// ── DeletePlan ───────────────────────────────────────────────────────────────

pub struct DeletePlanUseCase<P: PlanRepository> {
    pub plans: P,
}

impl<P: PlanRepository> DeletePlanUseCase<P> {
    pub async fn execute(&self, plan_id: Uuid) -> Result<(), ApiError> {
        if self.plans.find_by_id(plan_id).await?.is_none() {
            return Err(ApiError::NotFound("Plan"));
        }
        match self.plans.delete_if_unused(plan_id).await? {
            PlanDeleteOutcome::Deleted => Ok(()),
            PlanDeleteOutcome::ActiveMemberships(n) => Err(ApiError::PlanInUse(n)),
            PlanDeleteOutcome::HasHistory => Err(ApiError::Conflict(
                "Cannot delete plan with membership history. Deactivate it instead.".to_owned(),
            )),
        }
    }
}
