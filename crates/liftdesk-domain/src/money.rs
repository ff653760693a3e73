//! Money arithmetic and formatting.
//!
//! Amounts are carried as **paise** (`i64` minor units) everywhere inside the
//! system; the wire presents rupees as JSON numbers, converted only at the
//! DTO boundary.

use serde::{Deserialize, Serialize};

/// Convert a wire rupee amount to paise, rounding to the nearest paisa.
pub fn rupees_to_paise(rupees: f64) -> i64 {
    (rupees * 100.0).round() as i64
}

/// Convert paise back to the wire rupee representation.
pub fn paise_to_rupees(paise: i64) -> f64 {
    paise as f64 / 100.0
}

/// GST split of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub base_paise: i64,
    pub gst_percent: i32,
    pub gst_amount_paise: i64,
    pub total_paise: i64,
}

/// GST is currently disabled: the breakdown forces percent and amount to 0
/// and `total = base`, regardless of the requested percent. The schema keeps
/// its GST columns so re-enabling is a logic change, not a migration.
pub fn gst_breakdown(base_paise: i64, _requested_percent: i32) -> GstBreakdown {
    GstBreakdown {
        base_paise,
        gst_percent: 0,
        gst_amount_paise: 0,
        total_paise: base_paise,
    }
}

/// Format paise as INR with Indian digit grouping: `₹1,50,000` and
/// `₹1,234.50`. Paise digits appear only when non-zero.
pub fn format_inr(paise: i64) -> String {
    let negative = paise < 0;
    let abs = paise.unsigned_abs();
    let rupees = abs / 100;
    let fraction = abs % 100;

    let grouped = group_indian(rupees);
    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{fraction:02}")
    }
}

// Indian grouping: last three digits, then pairs (1,50,000).
fn group_indian(mut n: u64) -> String {
    let low = n % 1000;
    n /= 1000;
    if n == 0 {
        return low.to_string();
    }
    let mut pairs = Vec::new();
    while n > 0 {
        pairs.push(n % 100);
        n /= 100;
    }
    let mut out = String::new();
    for (i, p) in pairs.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&p.to_string());
        } else {
            out.push_str(&format!(",{p:02}"));
        }
    }
    out.push_str(&format!(",{low:03}"));
    out
}
