//! Payment domain types and invoice numbering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Gateway,
    Upi,
    Cash,
    BankTransfer,
}

impl PaymentMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GATEWAY" => Some(Self::Gateway),
            "UPI" => Some(Self::Upi),
            "CASH" => Some(Self::Cash),
            "BANK_TRANSFER" => Some(Self::BankTransfer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gateway => "GATEWAY",
            Self::Upi => "UPI",
            Self::Cash => "CASH",
            Self::BankTransfer => "BANK_TRANSFER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "COMPLETED" => Some(Self::Completed),
            "FAILED" => Some(Self::Failed),
            "REFUNDED" => Some(Self::Refunded),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }
}

/// Format an invoice number: `INV-<year>-<seq>`, sequence zero-padded to
/// four digits (`INV-2026-0001`). The sequence restarts at 1 each year; the
/// allocator keys its counter by year to make that happen.
pub fn format_invoice_number(year: i32, seq: i64) -> String {
    format!("INV-{year}-{seq:04}")
}

/// Split an invoice number back into `(year, seq)`. `None` when the shape
/// does not match.
pub fn parse_invoice_number(s: &str) -> Option<(i32, i64)> {
    let rest = s.strip_prefix("INV-")?;
    let (year, seq) = rest.split_once('-')?;
    if year.len() != 4 {
        return None;
    }
    Some((year.parse().ok()?, seq.parse().ok()?))
}
