//! Check-in payloads and attendance method.
//!
//! A member's QR code encodes [`CheckinPayload`] as JSON. The QR image itself
//! is produced by whatever encoder the front-of-house uses; this service only
//! emits and validates the payload string.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Discriminator carried by every check-in payload. Scanners reject anything
/// else, so foreign QR codes cannot check anyone in.
pub const CHECKIN_PAYLOAD_TYPE: &str = "LIFTDESK_CHECKIN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceMethod {
    Qr,
    Manual,
}

impl AttendanceMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "QR" => Some(Self::Qr),
            "MANUAL" => Some(Self::Manual),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qr => "QR",
            Self::Manual => "MANUAL",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckinPayloadError {
    #[error("invalid check-in payload format")]
    Format,
    #[error("invalid check-in payload type")]
    Type,
}

/// The JSON envelope a member's QR code carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    pub member_code: String,
    pub member_id: Uuid,
    /// Unix millis at issue time; informational, not an expiry.
    pub issued_at: i64,
}

impl CheckinPayload {
    pub fn new(member_code: impl Into<String>, member_id: Uuid, issued_at: i64) -> Self {
        Self {
            payload_type: CHECKIN_PAYLOAD_TYPE.to_string(),
            member_code: member_code.into(),
            member_id,
            issued_at,
        }
    }

    /// Serialize to the string that gets encoded into the QR image.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a scanned string. Invalid JSON and foreign `type` values are
    /// rejected separately so the scanner UI can tell them apart.
    pub fn parse(raw: &str) -> Result<Self, CheckinPayloadError> {
        let payload: Self =
            serde_json::from_str(raw).map_err(|_| CheckinPayloadError::Format)?;
        if payload.payload_type != CHECKIN_PAYLOAD_TYPE {
            return Err(CheckinPayloadError::Type);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_payload() {
        let id = Uuid::new_v4();
        let payload = CheckinPayload::new("LD-007", id, 1_756_200_000_000);
        let parsed = CheckinPayload::parse(&payload.encode()).unwrap();
        assert_eq!(parsed, payload);
        assert_eq!(parsed.member_code, "LD-007");
        assert_eq!(parsed.member_id, id);
    }

    #[test]
    fn should_reject_foreign_payload_type() {
        let raw = format!(
            r#"{{"type":"OTHER_GYM","memberCode":"LD-001","memberId":"{}","issuedAt":0}}"#,
            Uuid::new_v4()
        );
        assert_eq!(
            CheckinPayload::parse(&raw),
            Err(CheckinPayloadError::Type)
        );
    }

    #[test]
    fn should_reject_malformed_json() {
        assert_eq!(
            CheckinPayload::parse("not json at all"),
            Err(CheckinPayloadError::Format)
        );
        assert_eq!(
            CheckinPayload::parse(r#"{"type":"LIFTDESK_CHECKIN"}"#),
            Err(CheckinPayloadError::Format)
        );
    }

    #[test]
    fn should_use_camel_case_field_names() {
        let payload = CheckinPayload::new("LD-001", Uuid::new_v4(), 42);
        let raw = payload.encode();
        assert!(raw.contains("\"memberCode\""));
        assert!(raw.contains("\"issuedAt\""));
        assert!(raw.contains("\"type\":\"LIFTDESK_CHECKIN\""));
    }
}
