use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};
use liftdesk_domain::payment::{PaymentMethod, PaymentStatus};

use crate::domain::repository::PaymentListFilter;
use crate::error::ApiError;
use crate::handlers::common::{MembershipDto, PageQuery, PaymentDetailDto, PaymentDto, page_request};
use crate::response::{Envelope, Paginated};
use crate::state::AppState;
use crate::usecase::payment::{
    CreateOrderInput, CreateOrderUseCase, DeletePaymentUseCase, ListPaymentsUseCase,
    ManualPaymentInput, ManualPaymentUseCase, MemberPaymentsUseCase, RenderInvoiceUseCase,
    VerifyPaymentInput, VerifyPaymentUseCase,
};

/// Payment plus the membership it opened, returned by the recording flows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecordedResponse {
    pub payment: PaymentDto,
    pub membership: MembershipDto,
}

// ── GET /api/payments ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentListQuery {
    pub member_id: Option<Uuid>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn list_payments(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<PaymentListQuery>,
) -> Result<Json<Envelope<Paginated<PaymentDetailDto>>>, ApiError> {
    let page = page_request(query.page, query.limit);
    let filter = PaymentListFilter {
        member_id: query.member_id,
        // Unknown status values fall back to no filter.
        status: query.status.as_deref().and_then(PaymentStatus::parse),
        from: query
            .start_date
            .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        // End date is inclusive through 23:59:59.999.
        to: query.end_date.map(|d| {
            d.and_time(NaiveTime::MIN).and_utc() + Duration::days(1) - Duration::milliseconds(1)
        }),
    };
    let usecase = ListPaymentsUseCase {
        payments: state.payment_repo(),
    };
    let (items, total) = usecase.execute(filter, page).await?;
    let items = items.into_iter().map(PaymentDetailDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── POST /api/payments/order ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub member_id: Uuid,
    pub plan_id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    /// Amount in paise, as the checkout widget expects.
    pub amount: i64,
    pub currency: String,
    pub key_id: String,
}

pub async fn create_order(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<Envelope<OrderResponse>>, ApiError> {
    let usecase = CreateOrderUseCase {
        gateway: state.gateway.clone(),
        members: state.member_repo(),
        plans: state.plan_repo(),
    };
    let output = usecase
        .execute(CreateOrderInput {
            member_id: body.member_id,
            plan_id: body.plan_id,
        })
        .await?;
    Ok(Envelope::data(OrderResponse {
        order_id: output.order_id,
        amount: output.amount_paise,
        currency: output.currency,
        key_id: output.key_id,
    }))
}

// ── POST /api/payments/verify ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub member_id: Uuid,
    pub plan_id: Uuid,
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

pub async fn verify_payment(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<VerifyPaymentRequest>,
) -> Result<Json<Envelope<PaymentRecordedResponse>>, ApiError> {
    let usecase = VerifyPaymentUseCase {
        gateway: state.gateway.clone(),
        members: state.member_repo(),
        plans: state.plan_repo(),
        payments: state.payment_repo(),
    };
    let (payment, membership) = usecase
        .execute(VerifyPaymentInput {
            member_id: body.member_id,
            plan_id: body.plan_id,
            gateway_order_id: body.order_id,
            gateway_payment_id: body.payment_id,
            signature: body.signature,
        })
        .await?;
    Ok(Envelope::with_message(
        "Payment verified and membership activated",
        PaymentRecordedResponse {
            payment: PaymentDto::new(payment),
            membership: MembershipDto::bare(membership),
        },
    ))
}

// ── POST /api/payments/manual ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPaymentRequest {
    pub member_id: Uuid,
    pub plan_id: Uuid,
    pub method: PaymentMethod,
}

pub async fn record_manual_payment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<ManualPaymentRequest>,
) -> Result<(StatusCode, Json<Envelope<PaymentRecordedResponse>>), ApiError> {
    let usecase = ManualPaymentUseCase {
        members: state.member_repo(),
        plans: state.plan_repo(),
        payments: state.payment_repo(),
    };
    let (payment, membership) = usecase
        .execute(ManualPaymentInput {
            member_id: body.member_id,
            plan_id: body.plan_id,
            method: body.method,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message(
            "Payment recorded successfully",
            PaymentRecordedResponse {
                payment: PaymentDto::new(payment),
                membership: MembershipDto::bare(membership),
            },
        ),
    ))
}

// ── GET /api/payments/me ─────────────────────────────────────────────────────

pub async fn own_payments(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<Paginated<PaymentDetailDto>>>, ApiError> {
    let page = query.request();
    let usecase = MemberPaymentsUseCase {
        payments: state.payment_repo(),
        members: state.member_repo(),
    };
    let (items, total) = usecase.execute(auth.user_id, page).await?;
    let items = items.into_iter().map(PaymentDetailDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── GET /api/payments/member/{memberId} ──────────────────────────────────────

pub async fn member_payments(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<Paginated<PaymentDetailDto>>>, ApiError> {
    let page = query.request();
    let usecase = ListPaymentsUseCase {
        payments: state.payment_repo(),
    };
    let filter = PaymentListFilter {
        member_id: Some(member_id),
        ..Default::default()
    };
    let (items, total) = usecase.execute(filter, page).await?;
    let items = items.into_iter().map(PaymentDetailDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── GET /api/payments/{id}/invoice ───────────────────────────────────────────

pub async fn download_invoice(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let usecase = RenderInvoiceUseCase {
        payments: state.payment_repo(),
        settings: state.settings_repo(),
    };
    // Members may only fetch their own invoices.
    let restrict_to_user = (!auth.role.is_admin()).then_some(auth.user_id);
    let invoice = usecase.execute(id, restrict_to_user).await?;
    let disposition = format!("attachment; filename=\"{}.txt\"", invoice.invoice_number);
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        invoice.text,
    )
        .into_response())
}

// ── DELETE /api/payments/{id} ────────────────────────────────────────────────

pub async fn delete_payment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = DeletePaymentUseCase {
        payments: state.payment_repo(),
    };
    usecase.execute(id).await?;
    Ok(Envelope::message("Payment deleted successfully"))
}
