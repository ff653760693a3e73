//! Membership domain types and date arithmetic.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    Active,
    Expired,
    Frozen,
    Cancelled,
}

impl MembershipStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "EXPIRED" => Some(Self::Expired),
            "FROZEN" => Some(Self::Frozen),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Frozen => "FROZEN",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// A membership's end instant: exactly `start + duration_days`.
pub fn end_date(start: DateTime<Utc>, duration_days: i32) -> DateTime<Utc> {
    start + Duration::days(duration_days as i64)
}

/// Whole days left before `end`, rounding any partial day up; never negative.
///
/// `max(0, ceil((end - now) / 1 day))`.
pub fn days_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    let diff_ms = (end - now).num_milliseconds();
    if diff_ms <= 0 {
        0
    } else {
        // `i64::div_ceil` is still unstable (`int_roundings`); `diff_ms > 0`
        // here, so this is the same ceiling division.
        (diff_ms + DAY_MS - 1) / DAY_MS
    }
}

pub fn is_expired(end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    end < now
}

/// The single-day reminder window `days_ahead` days past `today`:
/// `[00:00:00.000, 23:59:59.999]` of that day, in the caller's clock.
///
/// Memberships whose `end_date` falls inside the window are due for an
/// expiry reminder.
pub fn reminder_window(today: NaiveDate, days_ahead: u32) -> (NaiveDateTime, NaiveDateTime) {
    let target = today + Duration::days(days_ahead as i64);
    let start = target.and_time(NaiveTime::MIN);
    let end = target.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
    (start, end)
}

/// Render an end date the way reminder SMS and invoices show it: DD/MM/YYYY.
pub fn format_date_indian(date: DateTime<Utc>) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn should_compute_end_date_exactly_duration_days_later() {
        let start = utc(2026, 1, 15, 9, 30, 0);
        for days in [1, 28, 30, 90, 180, 365] {
            let end = end_date(start, days);
            assert_eq!(end - start, Duration::days(days as i64));
        }
    }

    #[test]
    fn should_carry_time_of_day_through_end_date() {
        let start = utc(2026, 2, 27, 18, 45, 12);
        assert_eq!(end_date(start, 2), utc(2026, 3, 1, 18, 45, 12));
    }

    #[test]
    fn should_round_partial_days_up() {
        let end = utc(2026, 6, 10, 12, 0, 0);
        // 12 hours left -> 1 day
        assert_eq!(days_remaining(end, utc(2026, 6, 10, 0, 0, 0)), 1);
        // 2.5 days left -> 3 days
        assert_eq!(days_remaining(end, utc(2026, 6, 8, 0, 0, 0)), 3);
        // exactly 2 days -> 2
        assert_eq!(days_remaining(end, utc(2026, 6, 8, 12, 0, 0)), 2);
    }

    #[test]
    fn should_clamp_days_remaining_at_zero() {
        let end = utc(2026, 6, 10, 12, 0, 0);
        assert_eq!(days_remaining(end, end), 0);
        assert_eq!(days_remaining(end, utc(2026, 7, 1, 0, 0, 0)), 0);
    }

    #[test]
    fn should_span_the_whole_target_day() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let (start, end) = reminder_window(today, 3);
        assert_eq!(start.date(), NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
        assert_eq!(start.time(), NaiveTime::MIN);
        assert_eq!(end.date(), start.date());
        assert_eq!(
            end.time(),
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
    }

    #[test]
    fn should_cross_month_boundary_in_window() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let (start, _) = reminder_window(today, 3);
        assert_eq!(start.date(), NaiveDate::from_ymd_opt(2026, 9, 2).unwrap());
    }

    #[test]
    fn should_format_date_indian_style() {
        assert_eq!(format_date_indian(utc(2026, 3, 5, 0, 0, 0)), "05/03/2026");
        assert_eq!(format_date_indian(utc(2026, 12, 25, 23, 0, 0)), "25/12/2026");
    }

    #[test]
    fn should_parse_membership_status() {
        assert_eq!(
            MembershipStatus::parse("ACTIVE"),
            Some(MembershipStatus::Active)
        );
        assert_eq!(
            MembershipStatus::parse("CANCELLED"),
            Some(MembershipStatus::Cancelled)
        );
        assert_eq!(MembershipStatus::parse("PAUSED"), None);
    }
}
