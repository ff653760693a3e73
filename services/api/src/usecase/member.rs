use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use liftdesk_domain::checkin::CheckinPayload;
use liftdesk_domain::member::{Gender, normalize_phone, phone_local_part};
use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::user::UserStatus;

use crate::domain::repository::{
    AttendanceRepository, MemberChanges, MemberListFilter, MemberRepository,
    MembershipRepository, NewMember, UserRepository,
};
use crate::domain::types::{MemberOverview, MemberWithUser, MembershipWithPlan};
use crate::error::ApiError;
use crate::usecase::auth::MIN_PASSWORD_LEN;
use crate::usecase::dashboard::month_range;

fn validate_mobile(raw: &str) -> Result<String, ApiError> {
    let normalized = normalize_phone(raw);
    let local = phone_local_part(&normalized);
    if local.len() != 10 || !local.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::Validation(
            "Valid 10-digit mobile number is required".to_owned(),
        ));
    }
    Ok(normalized)
}

// ── ListMembers ──────────────────────────────────────────────────────────────

pub struct ListMembersUseCase<M: MemberRepository> {
    pub members: M,
}

impl<M: MemberRepository> ListMembersUseCase<M> {
    pub async fn execute(
        &self,
        filter: MemberListFilter,
        page: PageRequest,
    ) -> Result<(Vec<MemberOverview>, u64), ApiError> {
        self.members.list(filter, page).await
    }
}

// ── CreateMember ─────────────────────────────────────────────────────────────

pub struct CreateMemberInput {
    pub full_name: String,
    pub email: Option<String>,
    pub mobile: String,
    /// Defaults to the 10-digit local part of the mobile number.
    pub password: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
    /// Defaults to today when omitted.
    pub join_date: Option<NaiveDate>,
}

pub struct CreateMemberUseCase<U: UserRepository, M: MemberRepository> {
    pub users: U,
    pub members: M,
}

impl<U: UserRepository, M: MemberRepository> CreateMemberUseCase<U, M> {
    pub async fn execute(&self, input: CreateMemberInput) -> Result<MemberWithUser, ApiError> {
        let full_name = input.full_name.trim().to_owned();
        if full_name.is_empty() {
            return Err(ApiError::Validation("Name is required".to_owned()));
        }
        let mobile = validate_mobile(&input.mobile)?;
        let password = match input.password {
            Some(password) => {
                if password.len() < MIN_PASSWORD_LEN {
                    return Err(ApiError::Validation(format!(
                        "Password must be at least {MIN_PASSWORD_LEN} characters"
                    )));
                }
                password
            }
            None => phone_local_part(&mobile).to_owned(),
        };

        if self.users.find_by_mobile(&mobile).await?.is_some() {
            return Err(ApiError::Conflict(
                "A user with this mobile number already exists".to_owned(),
            ));
        }
        if let Some(email) = input.email.as_deref() {
            if self.users.find_by_email(email).await?.is_some() {
                return Err(ApiError::Conflict(
                    "A user with this email already exists".to_owned(),
                ));
            }
        }

        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST).context("hash password")?;
        self.members
            .create(NewMember {
                full_name,
                email: input.email,
                mobile,
                password_hash,
                gender: input.gender,
                date_of_birth: input.date_of_birth,
                height_cm: input.height_cm,
                weight_kg: input.weight_kg,
                fitness_goal: input.fitness_goal,
                medical_notes: input.medical_notes,
                emergency_contact: input.emergency_contact,
                join_date: input.join_date.unwrap_or_else(|| Utc::now().date_naive()),
            })
            .await
    }
}

// ── GetMember ────────────────────────────────────────────────────────────────

pub struct MemberProfile {
    pub overview: MemberOverview,
    pub visits_this_month: u64,
}

pub struct GetMemberUseCase<M: MemberRepository, S: MembershipRepository, A: AttendanceRepository>
{
    pub members: M,
    pub memberships: S,
    pub attendance: A,
}

impl<M: MemberRepository, S: MembershipRepository, A: AttendanceRepository>
    GetMemberUseCase<M, S, A>
{
    pub async fn execute(&self, member_id: Uuid) -> Result<MemberProfile, ApiError> {
        let mw = self
            .members
            .find_by_id(member_id)
            .await?
            .ok_or(ApiError::NotFound("Member"))?;
        let current_membership = self.memberships.current_for_member(mw.member.id).await?;
        let (month_from, month_to) = month_range(Utc::now());
        let visits_this_month = self
            .attendance
            .count_for_member_between(mw.member.id, month_from, month_to)
            .await?;
        Ok(MemberProfile {
            overview: MemberOverview {
                member: mw.member,
                user: mw.user,
                current_membership,
            },
            visits_this_month,
        })
    }
}

// ── UpdateMember ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateMemberInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub status: Option<UserStatus>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
}

pub struct UpdateMemberUseCase<U: UserRepository, M: MemberRepository> {
    pub users: U,
    pub members: M,
}

impl<U: UserRepository, M: MemberRepository> UpdateMemberUseCase<U, M> {
    pub async fn execute(
        &self,
        member_id: Uuid,
        input: UpdateMemberInput,
    ) -> Result<MemberWithUser, ApiError> {
        let existing = self
            .members
            .find_by_id(member_id)
            .await?
            .ok_or(ApiError::NotFound("Member"))?;

        let full_name = match input.full_name {
            Some(name) => {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(ApiError::Validation("Name is required".to_owned()));
                }
                Some(name)
            }
            None => None,
        };

        let mobile = match input.mobile {
            Some(raw) => {
                let normalized = validate_mobile(&raw)?;
                if let Some(other) = self.users.find_by_mobile(&normalized).await? {
                    if other.id != existing.user.id {
                        return Err(ApiError::Conflict(
                            "A user with this mobile number already exists".to_owned(),
                        ));
                    }
                }
                Some(normalized)
            }
            None => None,
        };

        if let Some(email) = input.email.as_deref() {
            if let Some(other) = self.users.find_by_email(email).await? {
                if other.id != existing.user.id {
                    return Err(ApiError::Conflict(
                        "A user with this email already exists".to_owned(),
                    ));
                }
            }
        }

        self.members
            .update(
                member_id,
                MemberChanges {
                    full_name,
                    email: input.email,
                    mobile,
                    status: input.status,
                    gender: input.gender,
                    date_of_birth: input.date_of_birth,
                    height_cm: input.height_cm,
                    weight_kg: input.weight_kg,
                    fitness_goal: input.fitness_goal,
                    medical_notes: input.medical_notes,
                    emergency_contact: input.emergency_contact,
                },
            )
            .await
    }
}

// ── DeleteMember ─────────────────────────────────────────────────────────────

pub struct DeleteMemberUseCase<M: MemberRepository> {
    pub members: M,
}

impl<M: MemberRepository> DeleteMemberUseCase<M> {
    pub async fn execute(&self, member_id: Uuid) -> Result<(), ApiError> {
        if !self.members.delete(member_id).await? {
            return Err(ApiError::NotFound("Member"));
        }
        Ok(())
    }
}

// ── MemberQr ─────────────────────────────────────────────────────────────────

pub struct QrOutput {
    /// JSON string to encode into the QR image.
    pub payload: String,
    pub member_code: String,
}

fn qr_for(mw: &MemberWithUser) -> QrOutput {
    let payload = CheckinPayload::new(
        mw.member.member_code.clone(),
        mw.member.id,
        Utc::now().timestamp_millis(),
    );
    QrOutput {
        payload: payload.encode(),
        member_code: mw.member.member_code.clone(),
    }
}

/// Admin-side QR fetch for any member.
pub struct MemberQrUseCase<M: MemberRepository> {
    pub members: M,
}

impl<M: MemberRepository> MemberQrUseCase<M> {
    pub async fn execute(&self, member_id: Uuid) -> Result<QrOutput, ApiError> {
        let mw = self
            .members
            .find_by_id(member_id)
            .await?
            .ok_or(ApiError::NotFound("Member"))?;
        Ok(qr_for(&mw))
    }
}

/// A member's own QR, resolved from the authenticated user.
pub struct OwnQrUseCase<M: MemberRepository> {
    pub members: M,
}

impl<M: MemberRepository> OwnQrUseCase<M> {
    pub async fn execute(&self, user_id: Uuid) -> Result<QrOutput, ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        Ok(qr_for(&mw))
    }
}

// ── Own profile / memberships ────────────────────────────────────────────────

pub struct GetOwnProfileUseCase<M: MemberRepository, S: MembershipRepository> {
    pub members: M,
    pub memberships: S,
}

impl<M: MemberRepository, S: MembershipRepository> GetOwnProfileUseCase<M, S> {
    pub async fn execute(&self, user_id: Uuid) -> Result<MemberOverview, ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        let current_membership = self.memberships.current_for_member(mw.member.id).await?;
        Ok(MemberOverview {
            member: mw.member,
            user: mw.user,
            current_membership,
        })
    }
}

pub struct OwnMembershipsUseCase<M: MemberRepository, S: MembershipRepository> {
    pub members: M,
    pub memberships: S,
}

impl<M: MemberRepository, S: MembershipRepository> OwnMembershipsUseCase<M, S> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<MembershipWithPlan>, ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        self.memberships.list_for_member(mw.member.id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use liftdesk_domain::user::UserRole;

    use super::*;
    use crate::domain::types::{Member, MembershipDetail, User};

    struct MockUserRepo {
        user: Option<User>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn find_by_mobile(&self, _mobile: &str) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn update_password(&self, _id: Uuid, _hash: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    struct MockMemberRepo {
        existing: Option<MemberWithUser>,
        created: std::sync::Mutex<Option<NewMember>>,
    }

    impl MockMemberRepo {
        fn with(existing: Option<MemberWithUser>) -> Self {
            Self {
                existing,
                created: std::sync::Mutex::new(None),
            }
        }
    }

    impl MemberRepository for MockMemberRepo {
        async fn list(
            &self,
            _filter: MemberListFilter,
            _page: PageRequest,
        ) -> Result<(Vec<MemberOverview>, u64), ApiError> {
            Ok((Vec::new(), 0))
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<MemberWithUser>, ApiError> {
            Ok(self.existing.clone())
        }
        async fn find_by_user_id(&self, _user_id: Uuid) -> Result<Option<MemberWithUser>, ApiError> {
            Ok(self.existing.clone())
        }
        async fn find_by_code(&self, _code: &str) -> Result<Option<MemberWithUser>, ApiError> {
            Ok(self.existing.clone())
        }
        async fn create(&self, input: NewMember) -> Result<MemberWithUser, ApiError> {
            let mw = member_with_user(&input.full_name, &input.mobile);
            *self.created.lock().unwrap() = Some(input);
            Ok(mw)
        }
        async fn update(
            &self,
            _id: Uuid,
            _changes: MemberChanges,
        ) -> Result<MemberWithUser, ApiError> {
            self.existing.clone().ok_or(ApiError::NotFound("Member"))
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
            Ok(self.existing.is_some())
        }
        async fn count_total(&self) -> Result<u64, ApiError> {
            Ok(0)
        }
        async fn count_active(&self, _now: DateTime<Utc>) -> Result<u64, ApiError> {
            Ok(0)
        }
        async fn count_joined_since(&self, _since: NaiveDate) -> Result<u64, ApiError> {
            Ok(0)
        }
    }

    struct MockAttendanceRepo;

    impl crate::domain::repository::AttendanceRepository for MockAttendanceRepo {
        async fn open_session(
            &self,
            _member_id: Uuid,
        ) -> Result<Option<crate::domain::types::Attendance>, ApiError> {
            Ok(None)
        }
        async fn create(
            &self,
            _record: &crate::domain::types::Attendance,
        ) -> Result<(), ApiError> {
            Ok(())
        }
        async fn close_session(&self, _id: Uuid, _at: DateTime<Utc>) -> Result<(), ApiError> {
            Ok(())
        }
        async fn list(
            &self,
            _filter: crate::domain::repository::AttendanceListFilter,
            _page: PageRequest,
        ) -> Result<(Vec<crate::domain::types::AttendanceWithMember>, u64), ApiError> {
            Ok((Vec::new(), 0))
        }
        async fn list_for_member(
            &self,
            _member_id: Uuid,
            _page: PageRequest,
        ) -> Result<(Vec<crate::domain::types::Attendance>, u64), ApiError> {
            Ok((Vec::new(), 0))
        }
        async fn recent_for_member(
            &self,
            _member_id: Uuid,
            _limit: u64,
        ) -> Result<Vec<crate::domain::types::Attendance>, ApiError> {
            Ok(Vec::new())
        }
        async fn count_between(
            &self,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<u64, ApiError> {
            Ok(0)
        }
        async fn count_for_member_between(
            &self,
            _member_id: Uuid,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<u64, ApiError> {
            Ok(14)
        }
        async fn count_open(&self) -> Result<u64, ApiError> {
            Ok(0)
        }
    }

    struct MockMembershipRepo;

    impl MembershipRepository for MockMembershipRepo {
        async fn current_for_member(
            &self,
            _member_id: Uuid,
        ) -> Result<Option<MembershipWithPlan>, ApiError> {
            Ok(None)
        }
        async fn list_for_member(
            &self,
            _member_id: Uuid,
        ) -> Result<Vec<MembershipWithPlan>, ApiError> {
            Ok(Vec::new())
        }
        async fn expiring_between(
            &self,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<MembershipDetail>, ApiError> {
            Ok(Vec::new())
        }
        async fn stamp_notification(&self, _id: Uuid, _at: DateTime<Utc>) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn member_with_user(name: &str, mobile: &str) -> MemberWithUser {
        let now = Utc::now();
        let user_id = Uuid::now_v7();
        MemberWithUser {
            member: Member {
                id: Uuid::now_v7(),
                member_code: "LD-001".into(),
                user_id,
                gender: Gender::Female,
                date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 12).unwrap(),
                height_cm: None,
                weight_kg: None,
                fitness_goal: None,
                medical_notes: None,
                emergency_contact: None,
                join_date: now.date_naive(),
                created_at: now,
                updated_at: now,
            },
            user: User {
                id: user_id,
                full_name: name.into(),
                email: None,
                mobile: mobile.into(),
                password_hash: String::new(),
                role: UserRole::Member,
                status: liftdesk_domain::user::UserStatus::Active,
                created_at: now,
                updated_at: now,
            },
        }
    }

    fn create_input() -> CreateMemberInput {
        CreateMemberInput {
            full_name: "Asha Rao".into(),
            email: None,
            mobile: "98765 43210".into(),
            password: Some("secret123".into()),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 12).unwrap(),
            height_cm: Some(164.0),
            weight_kg: Some(58.5),
            fitness_goal: None,
            medical_notes: None,
            emergency_contact: None,
            join_date: None,
        }
    }

    #[tokio::test]
    async fn should_create_member_with_normalized_mobile() {
        let usecase = CreateMemberUseCase {
            users: MockUserRepo { user: None },
            members: MockMemberRepo::with(None),
        };
        usecase.execute(create_input()).await.unwrap();
        let created = usecase.members.created.lock().unwrap().take().unwrap();
        assert_eq!(created.mobile, "+919876543210");
        assert_ne!(created.password_hash, "secret123");
        assert!(created.join_date <= Utc::now().date_naive());
    }

    #[tokio::test]
    async fn should_reject_duplicate_mobile() {
        let existing = member_with_user("Someone Else", "+919876543210");
        let usecase = CreateMemberUseCase {
            users: MockUserRepo {
                user: Some(existing.user),
            },
            members: MockMemberRepo::with(None),
        };
        let result = usecase.execute(create_input()).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_reject_short_mobile() {
        let usecase = CreateMemberUseCase {
            users: MockUserRepo { user: None },
            members: MockMemberRepo::with(None),
        };
        let mut input = create_input();
        input.mobile = "12345".into();
        let result = usecase.execute(input).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let usecase = CreateMemberUseCase {
            users: MockUserRepo { user: None },
            members: MockMemberRepo::with(None),
        };
        let mut input = create_input();
        input.full_name = "   ".into();
        let result = usecase.execute(input).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_allow_keeping_own_mobile_on_update() {
        let existing = member_with_user("Asha Rao", "+919876543210");
        let usecase = UpdateMemberUseCase {
            users: MockUserRepo {
                user: Some(existing.user.clone()),
            },
            members: MockMemberRepo::with(Some(existing)),
        };
        let result = usecase
            .execute(
                Uuid::now_v7(),
                UpdateMemberInput {
                    mobile: Some("9876543210".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_default_password_to_mobile_local_part() {
        let usecase = CreateMemberUseCase {
            users: MockUserRepo { user: None },
            members: MockMemberRepo::with(None),
        };
        let mut input = create_input();
        input.password = None;
        usecase.execute(input).await.unwrap();
        let created = usecase.members.created.lock().unwrap().take().unwrap();
        assert!(bcrypt::verify("9876543210", &created.password_hash).unwrap());
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_member() {
        let usecase = GetMemberUseCase {
            members: MockMemberRepo::with(None),
            memberships: MockMembershipRepo,
            attendance: MockAttendanceRepo,
        };
        let result = usecase.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ApiError::NotFound("Member"))));
    }

    #[tokio::test]
    async fn should_include_monthly_visit_count_in_profile() {
        let usecase = GetMemberUseCase {
            members: MockMemberRepo::with(Some(member_with_user("Asha Rao", "+919876543210"))),
            memberships: MockMembershipRepo,
            attendance: MockAttendanceRepo,
        };
        let profile = usecase.execute(Uuid::now_v7()).await.unwrap();
        assert_eq!(profile.visits_this_month, 14);
    }

    #[tokio::test]
    async fn should_build_scannable_qr_payload() {
        let usecase = OwnQrUseCase {
            members: MockMemberRepo::with(Some(member_with_user("Asha Rao", "+919876543210"))),
        };
        let output = usecase.execute(Uuid::now_v7()).await.unwrap();
        let parsed = CheckinPayload::parse(&output.payload).unwrap();
        assert_eq!(parsed.member_code, "LD-001");
        assert_eq!(output.member_code, "LD-001");
    }
}
