use chrono::Utc;
use uuid::Uuid;

use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::payment::PaymentMethod;

use crate::domain::repository::{
    MemberRepository, NewMembershipPayment, PaymentGatewayPort, PaymentListFilter,
    PaymentRepository, PlanRepository, SettingsRepository,
};
use crate::domain::types::{Membership, Payment, PaymentDetail};
use crate::error::ApiError;
use crate::invoice::render_invoice;

// ── ListPayments ─────────────────────────────────────────────────────────────

pub struct ListPaymentsUseCase<Y: PaymentRepository> {
    pub payments: Y,
}

impl<Y: PaymentRepository> ListPaymentsUseCase<Y> {
    pub async fn execute(
        &self,
        filter: PaymentListFilter,
        page: PageRequest,
    ) -> Result<(Vec<PaymentDetail>, u64), ApiError> {
        self.payments.list(filter, page).await
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub member_id: Uuid,
    pub plan_id: Uuid,
}

pub struct CreateOrderOutput {
    pub order_id: String,
    pub amount_paise: i64,
    pub currency: String,
    /// Public key id the checkout widget needs.
    pub key_id: String,
}

pub struct CreateOrderUseCase<G: PaymentGatewayPort, M: MemberRepository, P: PlanRepository> {
    pub gateway: Option<G>,
    pub members: M,
    pub plans: P,
}

impl<G: PaymentGatewayPort, M: MemberRepository, P: PlanRepository> CreateOrderUseCase<G, M, P> {
    pub async fn execute(&self, input: CreateOrderInput) -> Result<CreateOrderOutput, ApiError> {
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(ApiError::GatewayUnavailable);
        };
        let member = self
            .members
            .find_by_id(input.member_id)
            .await?
            .ok_or(ApiError::NotFound("Member"))?;
        let plan = self
            .plans
            .find_by_id(input.plan_id)
            .await?
            .ok_or(ApiError::NotFound("Plan"))?;
        if !plan.is_active {
            return Err(ApiError::Validation("Plan is not active".to_owned()));
        }

        let receipt = format!("{}-{}", member.member.member_code, Utc::now().timestamp());
        let order = gateway.create_order(plan.final_price_paise, &receipt).await?;
        Ok(CreateOrderOutput {
            order_id: order.order_id,
            amount_paise: order.amount_paise,
            currency: order.currency,
            key_id: gateway.key_id().to_owned(),
        })
    }
}

// ── VerifyPayment ────────────────────────────────────────────────────────────

pub struct VerifyPaymentInput {
    pub member_id: Uuid,
    pub plan_id: Uuid,
    pub gateway_order_id: String,
    pub gateway_payment_id: String,
    pub signature: String,
}

pub struct VerifyPaymentUseCase<
    G: PaymentGatewayPort,
    M: MemberRepository,
    P: PlanRepository,
    Y: PaymentRepository,
> {
    pub gateway: Option<G>,
    pub members: M,
    pub plans: P,
    pub payments: Y,
}

impl<G: PaymentGatewayPort, M: MemberRepository, P: PlanRepository, Y: PaymentRepository>
    VerifyPaymentUseCase<G, M, P, Y>
{
    pub async fn execute(
        &self,
        input: VerifyPaymentInput,
    ) -> Result<(Payment, Membership), ApiError> {
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(ApiError::GatewayUnavailable);
        };
        if !gateway.verify_signature(
            &input.gateway_order_id,
            &input.gateway_payment_id,
            &input.signature,
        ) {
            return Err(ApiError::InvalidSignature);
        }

        let member = self
            .members
            .find_by_id(input.member_id)
            .await?
            .ok_or(ApiError::NotFound("Member"))?;
        let plan = self
            .plans
            .find_by_id(input.plan_id)
            .await?
            .ok_or(ApiError::NotFound("Plan"))?;

        self.payments
            .record_membership_payment(NewMembershipPayment {
                member_id: member.member.id,
                plan,
                method: PaymentMethod::Gateway,
                gateway_order_id: Some(input.gateway_order_id),
                gateway_payment_id: Some(input.gateway_payment_id),
                now: Utc::now(),
            })
            .await
    }
}

// ── ManualPayment ────────────────────────────────────────────────────────────

pub struct ManualPaymentInput {
    pub member_id: Uuid,
    pub plan_id: Uuid,
    pub method: PaymentMethod,
}

pub struct ManualPaymentUseCase<M: MemberRepository, P: PlanRepository, Y: PaymentRepository> {
    pub members: M,
    pub plans: P,
    pub payments: Y,
}

impl<M: MemberRepository, P: PlanRepository, Y: PaymentRepository> ManualPaymentUseCase<M, P, Y> {
    pub async fn execute(
        &self,
        input: ManualPaymentInput,
    ) -> Result<(Payment, Membership), ApiError> {
        if input.method == PaymentMethod::Gateway {
            return Err(ApiError::Validation(
                "Use the gateway flow for online payments".to_owned(),
            ));
        }
        let member = self
            .members
            .find_by_id(input.member_id)
            .await?
            .ok_or(ApiError::NotFound("Member"))?;
        let plan = self
            .plans
            .find_by_id(input.plan_id)
            .await?
            .ok_or(ApiError::NotFound("Plan"))?;
        if !plan.is_active {
            return Err(ApiError::Validation("Plan is not active".to_owned()));
        }

        self.payments
            .record_membership_payment(NewMembershipPayment {
                member_id: member.member.id,
                plan,
                method: input.method,
                gateway_order_id: None,
                gateway_payment_id: None,
                now: Utc::now(),
            })
            .await
    }
}

// ── MemberPayments ───────────────────────────────────────────────────────────

pub struct MemberPaymentsUseCase<Y: PaymentRepository, M: MemberRepository> {
    pub payments: Y,
    pub members: M,
}

impl<Y: PaymentRepository, M: MemberRepository> MemberPaymentsUseCase<Y, M> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<PaymentDetail>, u64), ApiError> {
        let member = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        self.payments
            .list(
                PaymentListFilter {
                    member_id: Some(member.member.id),
                    status: None,
                    from: None,
                    to: None,
                },
                page,
            )
            .await
    }
}

// ── RenderInvoice ────────────────────────────────────────────────────────────

pub struct InvoiceOutput {
    pub invoice_number: String,
    /// Plain-text invoice body.
    pub text: String,
}

pub struct RenderInvoiceUseCase<Y: PaymentRepository, S: SettingsRepository> {
    pub payments: Y,
    pub settings: S,
}

impl<Y: PaymentRepository, S: SettingsRepository> RenderInvoiceUseCase<Y, S> {
    /// `restrict_to_user` limits access to the paying member's own user id;
    /// admins pass `None`.
    pub async fn execute(
        &self,
        payment_id: Uuid,
        restrict_to_user: Option<Uuid>,
    ) -> Result<InvoiceOutput, ApiError> {
        let detail = self
            .payments
            .find_detail(payment_id)
            .await?
            .ok_or(ApiError::NotFound("Payment"))?;
        if let Some(user_id) = restrict_to_user {
            if detail.user.id != user_id {
                return Err(ApiError::Forbidden);
            }
        }
        let settings = self
            .settings
            .get()
            .await?
            .unwrap_or_else(|| crate::domain::types::GymSettings::defaults(Utc::now()));
        Ok(InvoiceOutput {
            invoice_number: detail.payment.invoice_number.clone(),
            text: render_invoice(&detail, &settings),
        })
    }
}

// ── DeletePayment ────────────────────────────────────────────────────────────

pub struct DeletePaymentUseCase<Y: PaymentRepository> {
    pub payments: Y,
}

impl<Y: PaymentRepository> DeletePaymentUseCase<Y> {
    pub async fn execute(&self, payment_id: Uuid) -> Result<(), ApiError> {
        if !self.payments.delete(payment_id).await? {
            return Err(ApiError::NotFound("Payment"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate};

    use liftdesk_domain::member::Gender;
    use liftdesk_domain::membership::{MembershipStatus, end_date};
    use liftdesk_domain::payment::PaymentStatus;
    use liftdesk_domain::user::{UserRole, UserStatus};

    use super::*;
    use crate::domain::repository::GatewayOrder;
    use crate::domain::types::{Member, MemberWithUser, MembershipPlan, User};

    struct MockGateway {
        verify_ok: bool,
    }

    impl PaymentGatewayPort for MockGateway {
        async fn create_order(
            &self,
            amount_paise: i64,
            _receipt: &str,
        ) -> Result<GatewayOrder, ApiError> {
            Ok(GatewayOrder {
                order_id: "order_test123".into(),
                amount_paise,
                currency: "INR".into(),
            })
        }
        fn key_id(&self) -> &str {
            "rzp_test_key"
        }
        fn verify_signature(&self, _order_id: &str, _payment_id: &str, _signature: &str) -> bool {
            self.verify_ok
        }
    }

    struct MockMemberRepo {
        existing: Option<MemberWithUser>,
    }

    impl MemberRepository for MockMemberRepo {
        async fn list(
            &self,
            _filter: crate::domain::repository::MemberListFilter,
            _page: PageRequest,
        ) -> Result<(Vec<crate::domain::types::MemberOverview>, u64), ApiError> {
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
        async fn create(
            &self,
            _input: crate::domain::repository::NewMember,
        ) -> Result<MemberWithUser, ApiError> {
            unreachable!("not used here")
        }
        async fn update(
            &self,
            _id: Uuid,
            _changes: crate::domain::repository::MemberChanges,
        ) -> Result<MemberWithUser, ApiError> {
            unreachable!("not used here")
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
            Ok(false)
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

    struct MockPlanRepo {
        existing: Option<MembershipPlan>,
    }

    impl PlanRepository for MockPlanRepo {
        async fn list(&self, _include_inactive: bool) -> Result<Vec<MembershipPlan>, ApiError> {
            Ok(Vec::new())
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<MembershipPlan>, ApiError> {
            Ok(self.existing.clone())
        }
        async fn create(&self, _plan: &MembershipPlan) -> Result<(), ApiError> {
            Ok(())
        }
        async fn update(
            &self,
            _id: Uuid,
            _changes: crate::domain::repository::PlanChanges,
        ) -> Result<MembershipPlan, ApiError> {
            unreachable!("not used here")
        }
        async fn delete_if_unused(
            &self,
            _id: Uuid,
        ) -> Result<crate::domain::repository::PlanDeleteOutcome, ApiError> {
            unreachable!("not used here")
        }
    }

    struct MockPaymentRepo {
        recorded: std::sync::Mutex<Option<NewMembershipPayment>>,
    }

    impl MockPaymentRepo {
        fn new() -> Self {
            Self {
                recorded: std::sync::Mutex::new(None),
            }
        }
    }

    impl PaymentRepository for MockPaymentRepo {
        async fn list(
            &self,
            _filter: PaymentListFilter,
            _page: PageRequest,
        ) -> Result<(Vec<PaymentDetail>, u64), ApiError> {
            Ok((Vec::new(), 0))
        }
        async fn find_detail(&self, _id: Uuid) -> Result<Option<PaymentDetail>, ApiError> {
            Ok(None)
        }
        async fn record_membership_payment(
            &self,
            input: NewMembershipPayment,
        ) -> Result<(Payment, Membership), ApiError> {
            let membership = Membership {
                id: Uuid::now_v7(),
                member_id: input.member_id,
                plan_id: input.plan.id,
                start_date: input.now,
                end_date: end_date(input.now, input.plan.duration_days),
                status: MembershipStatus::Active,
                frozen_days: 0,
                last_notification_date: None,
                created_at: input.now,
            };
            let payment = Payment {
                id: Uuid::now_v7(),
                invoice_number: "INV-2026-0001".into(),
                member_id: input.member_id,
                membership_id: membership.id,
                amount_paise: input.plan.final_price_paise,
                gst_amount_paise: 0,
                method: input.method,
                gateway_order_id: input.gateway_order_id.clone(),
                gateway_payment_id: input.gateway_payment_id.clone(),
                status: PaymentStatus::Completed,
                paid_at: Some(input.now),
                created_at: input.now,
            };
            *self.recorded.lock().unwrap() = Some(input);
            Ok((payment, membership))
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
            Ok(false)
        }
        async fn recent(&self, _limit: u64) -> Result<Vec<PaymentDetail>, ApiError> {
            Ok(Vec::new())
        }
        async fn revenue_between(
            &self,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<i64, ApiError> {
            Ok(0)
        }
    }

    fn member_fixture() -> MemberWithUser {
        let now = Utc::now();
        let user_id = Uuid::now_v7();
        MemberWithUser {
            member: Member {
                id: Uuid::now_v7(),
                member_code: "LD-007".into(),
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
                full_name: "Asha Rao".into(),
                email: None,
                mobile: "+919876543210".into(),
                password_hash: String::new(),
                role: UserRole::Member,
                status: UserStatus::Active,
                created_at: now,
                updated_at: now,
            },
        }
    }

    fn plan_fixture(active: bool) -> MembershipPlan {
        let now = Utc::now();
        MembershipPlan {
            id: Uuid::now_v7(),
            name: "Quarterly".into(),
            duration_days: 90,
            base_price_paise: 350_000,
            gst_percent: 0,
            final_price_paise: 350_000,
            description: None,
            features: Vec::new(),
            is_active: active,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_require_configured_gateway_for_orders() {
        let usecase = CreateOrderUseCase::<MockGateway, _, _> {
            gateway: None,
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(true)),
            },
        };
        let result = usecase
            .execute(CreateOrderInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::GatewayUnavailable)));
    }

    #[tokio::test]
    async fn should_create_order_for_plan_price() {
        let usecase = CreateOrderUseCase {
            gateway: Some(MockGateway { verify_ok: true }),
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(true)),
            },
        };
        let output = usecase
            .execute(CreateOrderInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
            })
            .await
            .unwrap();
        assert_eq!(output.amount_paise, 350_000);
        assert_eq!(output.key_id, "rzp_test_key");
    }

    #[tokio::test]
    async fn should_reject_inactive_plan_for_orders() {
        let usecase = CreateOrderUseCase {
            gateway: Some(MockGateway { verify_ok: true }),
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(false)),
            },
        };
        let result = usecase
            .execute(CreateOrderInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_reject_bad_signature_without_recording() {
        let usecase = VerifyPaymentUseCase {
            gateway: Some(MockGateway { verify_ok: false }),
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(true)),
            },
            payments: MockPaymentRepo::new(),
        };
        let result = usecase
            .execute(VerifyPaymentInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
                gateway_order_id: "order_test123".into(),
                gateway_payment_id: "pay_test456".into(),
                signature: "tampered".into(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::InvalidSignature)));
        assert!(usecase.payments.recorded.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn should_record_gateway_payment_on_valid_signature() {
        let usecase = VerifyPaymentUseCase {
            gateway: Some(MockGateway { verify_ok: true }),
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(true)),
            },
            payments: MockPaymentRepo::new(),
        };
        let (payment, membership) = usecase
            .execute(VerifyPaymentInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
                gateway_order_id: "order_test123".into(),
                gateway_payment_id: "pay_test456".into(),
                signature: "ok".into(),
            })
            .await
            .unwrap();
        assert_eq!(payment.method, PaymentMethod::Gateway);
        assert_eq!(payment.gateway_payment_id.as_deref(), Some("pay_test456"));
        assert_eq!(membership.status, MembershipStatus::Active);
        let recorded = usecase.payments.recorded.lock().unwrap().take().unwrap();
        assert_eq!(recorded.method, PaymentMethod::Gateway);
    }

    #[tokio::test]
    async fn should_reject_gateway_method_for_manual_entry() {
        let usecase = ManualPaymentUseCase {
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(true)),
            },
            payments: MockPaymentRepo::new(),
        };
        let result = usecase
            .execute(ManualPaymentInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
                method: PaymentMethod::Gateway,
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_record_manual_cash_payment() {
        let usecase = ManualPaymentUseCase {
            members: MockMemberRepo {
                existing: Some(member_fixture()),
            },
            plans: MockPlanRepo {
                existing: Some(plan_fixture(true)),
            },
            payments: MockPaymentRepo::new(),
        };
        let (payment, _membership) = usecase
            .execute(ManualPaymentInput {
                member_id: Uuid::now_v7(),
                plan_id: Uuid::now_v7(),
                method: PaymentMethod::Cash,
            })
            .await
            .unwrap();
        assert_eq!(payment.method, PaymentMethod::Cash);
        assert!(payment.gateway_order_id.is_none());
    }
}
