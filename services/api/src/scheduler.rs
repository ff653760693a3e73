//! Daily membership-expiry reminder sweep.
//!
//! Runs once per day at the configured hour, finds ACTIVE memberships ending
//! `expiry_reminder_days` from now and texts each member a renewal reminder.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::{info, warn};

use liftdesk_domain::membership::reminder_window;

use crate::domain::repository::{MembershipRepository, SettingsRepository, SmsSender};
use crate::domain::types::{GymSettings, Membership};
use crate::error::ApiError;
use crate::state::AppState;

/// Next occurrence of `hour:00` strictly after `now`.
fn next_run_after(now: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let today = now
        .date_naive()
        .and_time(NaiveTime::from_hms_opt(hour, 0, 0).expect("hour is clamped to 0..=23"))
        .and_utc();
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

fn notified_today(membership: &Membership, now: DateTime<Utc>) -> bool {
    membership
        .last_notification_date
        .is_some_and(|at| at.date_naive() == now.date_naive())
}

fn expiry_message(
    gym_name: &str,
    member_name: &str,
    plan_name: &str,
    end_date: DateTime<Utc>,
) -> String {
    format!(
        "Hi {member_name}, your {plan_name} at {gym_name} expires on {}. \
         Please renew to continue your fitness journey!",
        end_date.format("%d/%m/%Y")
    )
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    pub candidates: usize,
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One pass over the expiring memberships. Every send failure is logged and
/// skipped; the dedup stamp is written only after the SMS went out.
pub struct ExpirySweep<S: MembershipRepository, G: SettingsRepository, N: SmsSender> {
    pub memberships: S,
    pub settings: G,
    pub sms: N,
    pub lookahead_days: u32,
}

impl<S, G, N> ExpirySweep<S, G, N>
where
    S: MembershipRepository,
    G: SettingsRepository,
    N: SmsSender,
{
    pub async fn execute(&self, now: DateTime<Utc>) -> Result<SweepOutcome, ApiError> {
        let settings = self
            .settings
            .get()
            .await?
            .unwrap_or_else(|| GymSettings::defaults(now));
        if !settings.notifications.sms_alerts {
            info!("sms alerts disabled; skipping expiry sweep");
            return Ok(SweepOutcome::default());
        }

        let (from, to) = reminder_window(now.date_naive(), self.lookahead_days);
        let expiring = self
            .memberships
            .expiring_between(from.and_utc(), to.and_utc())
            .await?;

        let mut outcome = SweepOutcome {
            candidates: expiring.len(),
            ..SweepOutcome::default()
        };
        for detail in expiring {
            if notified_today(&detail.membership, now) {
                outcome.skipped += 1;
                continue;
            }
            let message = expiry_message(
                &settings.gym_name,
                &detail.user.full_name,
                &detail.plan.name,
                detail.membership.end_date,
            );
            match self.sms.send(&detail.user.mobile, &message).await {
                Ok(()) => {
                    if let Err(err) = self
                        .memberships
                        .stamp_notification(detail.membership.id, now)
                        .await
                    {
                        warn!(
                            membership_id = %detail.membership.id,
                            error = %err,
                            "failed to stamp notification date",
                        );
                    }
                    outcome.sent += 1;
                }
                Err(err) => {
                    warn!(
                        membership_id = %detail.membership.id,
                        error = %err,
                        "expiry reminder sms failed",
                    );
                    outcome.failed += 1;
                }
            }
        }
        Ok(outcome)
    }
}

/// Long-running task. Spawn next to the HTTP listener; it sleeps until the
/// next scheduled hour, sweeps, and repeats. Sweep errors are logged, never
/// propagated.
pub async fn run_expiry_scheduler(state: AppState) {
    let hour = state.config.expiry_reminder_hour.min(23);
    info!(
        hour,
        days_ahead = state.config.expiry_reminder_days,
        "expiry notification scheduler started",
    );
    loop {
        let now = Utc::now();
        let wait = (next_run_after(now, hour) - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        tokio::time::sleep(wait).await;

        let sweep = ExpirySweep {
            memberships: state.membership_repo(),
            settings: state.settings_repo(),
            sms: state.sms.clone(),
            lookahead_days: state.config.expiry_reminder_days,
        };
        match sweep.execute(Utc::now()).await {
            Ok(outcome) => info!(
                candidates = outcome.candidates,
                sent = outcome.sent,
                skipped = outcome.skipped,
                failed = outcome.failed,
                "expiry sweep finished",
            ),
            Err(err) => warn!(error = %err, "expiry sweep failed"),
        }
    }
}
