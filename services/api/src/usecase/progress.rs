use chrono::Utc;
use uuid::Uuid;

use liftdesk_domain::pagination::PageRequest;

use crate::domain::repository::{MemberRepository, ProgressRepository};
use crate::domain::types::ProgressRecord;
use crate::error::ApiError;

#[derive(Default)]
pub struct ProgressInput {
    pub weight_kg: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub arms_cm: Option<f64>,
    pub thighs_cm: Option<f64>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

fn build_record(member_id: Uuid, input: ProgressInput) -> Result<ProgressRecord, ApiError> {
    let measurements = [
        input.weight_kg,
        input.body_fat_pct,
        input.chest_cm,
        input.waist_cm,
        input.hips_cm,
        input.arms_cm,
        input.thighs_cm,
    ];
    if measurements.iter().all(Option::is_none) {
        return Err(ApiError::Validation(
            "At least one measurement is required".to_owned(),
        ));
    }
    if measurements.iter().flatten().any(|&v| v <= 0.0) {
        return Err(ApiError::Validation(
            "Measurements must be positive numbers".to_owned(),
        ));
    }
    Ok(ProgressRecord {
        id: Uuid::now_v7(),
        member_id,
        weight_kg: input.weight_kg,
        body_fat_pct: input.body_fat_pct,
        chest_cm: input.chest_cm,
        waist_cm: input.waist_cm,
        hips_cm: input.hips_cm,
        arms_cm: input.arms_cm,
        thighs_cm: input.thighs_cm,
        photo_url: input.photo_url,
        notes: input.notes,
        recorded_at: Utc::now(),
    })
}

// ── RecordProgress ───────────────────────────────────────────────────────────

/// Admin-side entry against an explicit member id.
pub struct RecordProgressUseCase<P: ProgressRepository, M: MemberRepository> {
    pub progress: P,
    pub members: M,
}

impl<P: ProgressRepository, M: MemberRepository> RecordProgressUseCase<P, M> {
    pub async fn execute(
        &self,
        member_id: Uuid,
        input: ProgressInput,
    ) -> Result<ProgressRecord, ApiError> {
        if self.members.find_by_id(member_id).await?.is_none() {
            return Err(ApiError::NotFound("Member"));
        }
        let record = build_record(member_id, input)?;
        self.progress.create(&record).await?;
        Ok(record)
    }
}

/// Member-side entry resolved from the authenticated user.
pub struct RecordOwnProgressUseCase<P: ProgressRepository, M: MemberRepository> {
    pub progress: P,
    pub members: M,
}

impl<P: ProgressRepository, M: MemberRepository> RecordOwnProgressUseCase<P, M> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: ProgressInput,
    ) -> Result<ProgressRecord, ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        let record = build_record(mw.member.id, input)?;
        self.progress.create(&record).await?;
        Ok(record)
    }
}

// ── Progress history ─────────────────────────────────────────────────────────

pub struct MemberProgressUseCase<P: ProgressRepository, M: MemberRepository> {
    pub progress: P,
    pub members: M,
}

impl<P: ProgressRepository, M: MemberRepository> MemberProgressUseCase<P, M> {
    pub async fn execute(
        &self,
        member_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<ProgressRecord>, u64), ApiError> {
        if self.members.find_by_id(member_id).await?.is_none() {
            return Err(ApiError::NotFound("Member"));
        }
        self.progress.list_for_member(member_id, page).await
    }
}

pub struct OwnProgressUseCase<P: ProgressRepository, M: MemberRepository> {
    pub progress: P,
    pub members: M,
}

impl<P: ProgressRepository, M: MemberRepository> OwnProgressUseCase<P, M> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<ProgressRecord>, u64), ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        self.progress.list_for_member(mw.member.id, page).await
    }
}

// ── DeleteProgress ───────────────────────────────────────────────────────────

pub struct DeleteProgressUseCase<P: ProgressRepository, M: MemberRepository> {
    pub progress: P,
    pub members: M,
}

impl<P: ProgressRepository, M: MemberRepository> DeleteProgressUseCase<P, M> {
    /// Member-role callers pass their user id in `restrict_to_user` and may
    /// only delete their own entries. Admins pass `None`.
    pub async fn execute(
        &self,
        record_id: Uuid,
        restrict_to_user: Option<Uuid>,
    ) -> Result<(), ApiError> {
        let record = self
            .progress
            .find_by_id(record_id)
            .await?
            .ok_or(ApiError::NotFound("Progress record"))?;
        if let Some(user_id) = restrict_to_user {
            let mw = self
                .members
                .find_by_user_id(user_id)
                .await?
                .ok_or(ApiError::NotFound("Member profile"))?;
            if record.member_id != mw.member.id {
                return Err(ApiError::Forbidden);
            }
        }
        if !self.progress.delete(record_id).await? {
            return Err(ApiError::NotFound("Progress record"));
        }
        Ok(())
    }
}
