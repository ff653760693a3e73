// Module name shadows the `serde` crate, so `::serde` names the external one.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds,
/// the timestamp shape every wire DTO uses.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// [`to_rfc3339_ms`] for optional timestamps (`paidAt`, `checkOutTime`, ...).
pub fn to_rfc3339_ms_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => to_rfc3339_ms(dt, s),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(::serde::Serialize)]
    struct Row {
        #[serde(serialize_with = "to_rfc3339_ms")]
        at: DateTime<Utc>,
        #[serde(serialize_with = "to_rfc3339_ms_opt")]
        maybe: Option<DateTime<Utc>>,
    }

    #[test]
    fn should_format_datetime_as_rfc3339_with_millis() {
        let dt = Utc.with_ymd_and_hms(2026, 2, 11, 11, 9, 0).unwrap();
        let row = Row {
            at: dt,
            maybe: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["at"], "2026-02-11T11:09:00.000Z");
        assert_eq!(json["maybe"], serde_json::Value::Null);
    }

    #[test]
    fn should_format_some_optional_timestamp() {
        let dt = Utc.with_ymd_and_hms(2026, 2, 11, 11, 9, 3).unwrap();
        let row = Row {
            at: dt,
            maybe: Some(dt),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["maybe"], "2026-02-11T11:09:03.000Z");
    }
}
