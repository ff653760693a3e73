use std::sync::Arc;

use chrono::{Datelike, Duration};
use uuid::Uuid;

use liftdesk_api::error::ApiError;
use liftdesk_api::usecase::attendance::{CheckInInput, CheckInUseCase, CheckOutUseCase};
use liftdesk_api::usecase::dashboard::{AdminDashboardUseCase, MemberDashboardUseCase};
use liftdesk_api::usecase::member::{GetOwnProfileUseCase, OwnMembershipsUseCase};
use liftdesk_api::usecase::payment::{
    ManualPaymentInput, ManualPaymentUseCase, MemberPaymentsUseCase, RenderInvoiceUseCase,
};
use liftdesk_domain::checkin::AttendanceMethod;
use liftdesk_domain::membership::MembershipStatus;
use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::payment::{PaymentMethod, PaymentStatus};

use crate::helpers::{
    ActivePlans, DefaultSettings, EmptyProgress, EmptyWorkouts, InMemoryAttendance,
    InMemoryMembers, LedgerPayments, SharedMemberships, monthly_plan, quarterly_plan, test_member,
};

fn by_code(code: &str) -> CheckInInput {
    CheckInInput {
        payload: None,
        member_id: None,
        member_code: Some(code.to_owned()),
    }
}

// ── Payment activates the membership ─────────────────────────────────────────

#[tokio::test]
async fn should_turn_away_unpaid_member_then_admit_after_manual_payment() {
    let mw = test_member("pass1234");
    let plan = quarterly_plan();

    let memberships = SharedMemberships::empty();
    let checkin = CheckInUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        memberships: SharedMemberships {
            rows: memberships.rows_handle(),
        },
        attendance: InMemoryAttendance::empty(),
    };

    // Nothing on file yet.
    let before = checkin.execute(by_code("LD-001")).await;
    assert!(matches!(before, Err(ApiError::MembershipLapsed)));

    let record = ManualPaymentUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        plans: ActivePlans::new(vec![plan.clone()]),
        payments: LedgerPayments::new(vec![mw.clone()], memberships.rows_handle()),
    };
    let (payment, membership) = record
        .execute(ManualPaymentInput {
            member_id: mw.member.id,
            plan_id: plan.id,
            method: PaymentMethod::Cash,
        })
        .await
        .unwrap();

    assert_eq!(membership.status, MembershipStatus::Active);
    assert_eq!(membership.end_date - membership.start_date, Duration::days(90));
    assert_eq!(payment.amount_paise, 350_000);
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert!(payment.paid_at.is_some());

    // The recorded membership is live immediately.
    let admitted = checkin.execute(by_code("LD-001")).await.unwrap();
    assert_eq!(admitted.attendance.method, AttendanceMethod::Manual);
    assert_eq!(admitted.member.id, mw.member.id);
}

#[tokio::test]
async fn should_allocate_sequential_invoice_numbers() {
    let mw = test_member("pass1234");
    let gold = quarterly_plan();
    let monthly = monthly_plan();

    let memberships = SharedMemberships::empty();
    let ledger = LedgerPayments::new(vec![mw.clone()], memberships.rows_handle());
    let booked = ledger.payments_handle();

    let record = ManualPaymentUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        plans: ActivePlans::new(vec![gold.clone(), monthly.clone()]),
        payments: ledger,
    };
    for (plan_id, method) in [(gold.id, PaymentMethod::Upi), (monthly.id, PaymentMethod::Cash)] {
        record
            .execute(ManualPaymentInput {
                member_id: mw.member.id,
                plan_id,
                method,
            })
            .await
            .unwrap();
    }

    let booked = booked.lock().unwrap();
    assert_eq!(booked.len(), 2);
    let year = booked[0].created_at.year();
    assert_eq!(booked[0].invoice_number, format!("INV-{year}-0001"));
    assert_eq!(booked[1].invoice_number, format!("INV-{year}-0002"));
    assert!(booked.iter().all(|p| p.status == PaymentStatus::Completed));
}

// ── Attendance sessions ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_close_session_before_admitting_the_next_visit() {
    let mw = test_member("pass1234");
    let plan = quarterly_plan();

    let memberships = SharedMemberships::empty();
    let record = ManualPaymentUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        plans: ActivePlans::new(vec![plan.clone()]),
        payments: LedgerPayments::new(vec![mw.clone()], memberships.rows_handle()),
    };
    record
        .execute(ManualPaymentInput {
            member_id: mw.member.id,
            plan_id: plan.id,
            method: PaymentMethod::Upi,
        })
        .await
        .unwrap();

    let attendance = InMemoryAttendance::empty();
    let sessions = Arc::clone(&attendance.records);
    let checkin = CheckInUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        memberships,
        attendance,
    };

    checkin.execute(by_code("LD-001")).await.unwrap();
    let again = checkin.execute(by_code("LD-001")).await;
    assert!(matches!(again, Err(ApiError::AlreadyCheckedIn)));

    let checkout = CheckOutUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        attendance: InMemoryAttendance {
            records: Arc::clone(&sessions),
        },
    };
    let closed = checkout.execute(by_code("LD-001")).await.unwrap();
    assert!(closed.attendance.check_out_time.is_some());

    // A fresh visit opens a second session.
    checkin.execute(by_code("LD-001")).await.unwrap();
    let sessions = sessions.lock().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(
        sessions.iter().filter(|a| a.check_out_time.is_none()).count(),
        1
    );
}

// ── Invoices ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_invoice_for_the_paying_member_only() {
    let mw = test_member("pass1234");
    let plan = quarterly_plan();

    let memberships = SharedMemberships::empty();
    let ledger = LedgerPayments::new(vec![mw.clone()], memberships.rows_handle());
    let booked = ledger.payments_handle();

    let record = ManualPaymentUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        plans: ActivePlans::new(vec![plan.clone()]),
        payments: ledger,
    };
    let (payment, _) = record
        .execute(ManualPaymentInput {
            member_id: mw.member.id,
            plan_id: plan.id,
            method: PaymentMethod::BankTransfer,
        })
        .await
        .unwrap();

    let invoices = RenderInvoiceUseCase {
        payments: LedgerPayments {
            directory: vec![mw.clone()],
            memberships: memberships.rows_handle(),
            payments: booked,
        },
        settings: DefaultSettings,
    };

    let invoice = invoices
        .execute(payment.id, Some(mw.user.id))
        .await
        .unwrap();
    assert_eq!(invoice.invoice_number, payment.invoice_number);
    assert!(invoice.text.contains("Liftdesk Gym"));
    assert!(invoice.text.contains("Asha Rao (LD-001)"));
    assert!(invoice.text.contains(&payment.invoice_number));
    assert!(invoice.text.contains("₹3,500"));
    assert!(invoice.text.contains("BANK_TRANSFER"));

    // Some other signed-in member must not see it.
    let result = invoices.execute(payment.id, Some(Uuid::now_v7())).await;
    assert!(matches!(result, Err(ApiError::Forbidden)));
}

// ── Member-facing views ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_surface_latest_paid_plan_across_member_views() {
    let mw = test_member("pass1234");
    let gold = quarterly_plan();
    let monthly = monthly_plan();

    let memberships = SharedMemberships::empty();
    let ledger = LedgerPayments::new(vec![mw.clone()], memberships.rows_handle());
    let booked = ledger.payments_handle();
    let record = ManualPaymentUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        plans: ActivePlans::new(vec![gold.clone(), monthly.clone()]),
        payments: ledger,
    };
    for plan_id in [gold.id, monthly.id] {
        record
            .execute(ManualPaymentInput {
                member_id: mw.member.id,
                plan_id,
                method: PaymentMethod::Cash,
            })
            .await
            .unwrap();
    }

    let history = OwnMembershipsUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        memberships: SharedMemberships {
            rows: memberships.rows_handle(),
        },
    };
    let rows = history.execute(mw.user.id).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].membership.start_date >= rows[1].membership.start_date);

    // The quarterly runs longest, so it is the profile's current plan.
    let profile = GetOwnProfileUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        memberships: SharedMemberships {
            rows: memberships.rows_handle(),
        },
    }
    .execute(mw.user.id)
    .await
    .unwrap();
    let current = profile.current_membership.expect("active membership");
    assert_eq!(current.plan.name, "Gold Quarterly");

    let (details, total) = MemberPaymentsUseCase {
        payments: LedgerPayments {
            directory: vec![mw.clone()],
            memberships: memberships.rows_handle(),
            payments: booked,
        },
        members: InMemoryMembers::new(vec![mw.clone()]),
    }
    .execute(mw.user.id, PageRequest::default())
    .await
    .unwrap();
    assert_eq!(total, 2);
    assert_eq!(details.len(), 2);
    assert!(details.iter().all(|d| d.member.id == mw.member.id));
}

// ── Dashboards over shared state ─────────────────────────────────────────────

#[tokio::test]
async fn should_assemble_dashboards_after_a_payment_and_a_visit() {
    let mw = test_member("pass1234");
    let plan = quarterly_plan();

    let memberships = SharedMemberships::empty();
    let ledger = LedgerPayments::new(vec![mw.clone()], memberships.rows_handle());
    let booked = ledger.payments_handle();
    let record = ManualPaymentUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        plans: ActivePlans::new(vec![plan.clone()]),
        payments: ledger,
    };
    record
        .execute(ManualPaymentInput {
            member_id: mw.member.id,
            plan_id: plan.id,
            method: PaymentMethod::Cash,
        })
        .await
        .unwrap();

    let attendance = InMemoryAttendance::empty();
    let visits = Arc::clone(&attendance.records);
    CheckInUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        memberships: SharedMemberships {
            rows: memberships.rows_handle(),
        },
        attendance,
    }
    .execute(by_code("LD-001"))
    .await
    .unwrap();

    let admin = AdminDashboardUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        payments: LedgerPayments {
            directory: vec![mw.clone()],
            memberships: memberships.rows_handle(),
            payments: Arc::clone(&booked),
        },
        attendance: InMemoryAttendance {
            records: Arc::clone(&visits),
        },
        memberships: SharedMemberships {
            rows: memberships.rows_handle(),
        },
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(admin.total_members, 1);
    assert_eq!(admin.new_members_this_month, 1);
    assert_eq!(admin.checkins_today, 1);
    assert_eq!(admin.currently_in, 1);
    assert_eq!(admin.revenue_this_month_paise, 350_000);
    assert_eq!(admin.revenue_last_month_paise, 0);
    assert_eq!(admin.revenue_growth_pct, 100.0);
    assert_eq!(admin.recent_payments.len(), 1);

    let member = MemberDashboardUseCase {
        members: InMemoryMembers::new(vec![mw.clone()]),
        memberships: SharedMemberships {
            rows: memberships.rows_handle(),
        },
        attendance: InMemoryAttendance {
            records: Arc::clone(&visits),
        },
        progress: EmptyProgress,
        payments: LedgerPayments {
            directory: vec![mw.clone()],
            memberships: memberships.rows_handle(),
            payments: booked,
        },
        workouts: EmptyWorkouts,
    }
    .execute(mw.user.id)
    .await
    .unwrap();

    let current = member.current_membership.expect("active membership");
    assert_eq!(current.plan.id, plan.id);
    assert_eq!(member.visits_this_month, 1);
    assert_eq!(member.recent_attendance.len(), 1);
    assert!(member.recent_progress.is_empty());
    assert_eq!(member.recent_payments.len(), 1);
    assert!(member.workout.is_none());
}
