//! Member domain types: codes, gender, phone normalization.

use serde::{Deserialize, Serialize};

/// Prefix for human-readable member codes (`LD-001`).
pub const MEMBER_CODE_PREFIX: &str = "LD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

/// Format a sequence number as a member code: `LD-001`, `LD-002`, ...
///
/// Zero-padded to three digits; wider sequences keep all their digits
/// (`LD-1000`).
pub fn format_member_code(seq: i64) -> String {
    format!("{MEMBER_CODE_PREFIX}-{seq:03}")
}

/// Extract the sequence number from a member code. `None` when the prefix or
/// number part does not match.
pub fn parse_member_code(code: &str) -> Option<i64> {
    let rest = code.strip_prefix(MEMBER_CODE_PREFIX)?.strip_prefix('-')?;
    rest.parse().ok()
}

/// Normalize a mobile number: strip whitespace, prefix `+91` when no country
/// code is present. Stored and compared in this form.
pub fn normalize_phone(phone: &str) -> String {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.starts_with('+') {
        cleaned
    } else {
        format!("+91{cleaned}")
    }
}

/// The 10-digit local part of a normalized mobile, used as the default
/// initial password for new member accounts.
pub fn phone_local_part(phone: &str) -> &str {
    phone.strip_prefix("+91").unwrap_or(phone)
}
