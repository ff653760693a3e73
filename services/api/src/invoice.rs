//! Plain-text invoice rendering.
//!
//! The API returns invoices as printable text rather than PDFs; the client
//! wraps the text in a download. Amounts render through the shared INR
//! formatter so the invoice and the dashboards always agree.

use liftdesk_domain::membership::format_date_indian;
use liftdesk_domain::money::format_inr;

use crate::domain::types::{GymSettings, PaymentDetail};

const WIDTH: usize = 48;

/// Render a payment as a printable invoice.
pub fn render_invoice(detail: &PaymentDetail, settings: &GymSettings) -> String {
    let rule = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&center(&settings.gym_name));
    out.push('\n');
    if !settings.address.is_empty() {
        out.push_str(&center(&settings.address));
        out.push('\n');
    }
    if let Some(gstin) = &settings.gstin {
        out.push_str(&center(&format!("GSTIN: {gstin}")));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&format!("Invoice:  {}\n", detail.payment.invoice_number));
    let issued = detail.payment.paid_at.unwrap_or(detail.payment.created_at);
    out.push_str(&format!("Date:     {}\n", format_date_indian(issued)));
    out.push_str(&thin);
    out.push('\n');

    out.push_str("Billed to:\n");
    out.push_str(&format!(
        "  {} ({})\n",
        detail.user.full_name, detail.member.member_code
    ));
    out.push_str(&format!("  {}\n", detail.user.mobile));
    out.push_str(&thin);
    out.push('\n');

    out.push_str(&format!("Plan:     {}\n", detail.plan.name));
    out.push_str(&format!(
        "Period:   {} to {}\n",
        format_date_indian(detail.membership.start_date),
        format_date_indian(detail.membership.end_date),
    ));
    out.push_str(&thin);
    out.push('\n');

    let base = detail.payment.amount_paise - detail.payment.gst_amount_paise;
    out.push_str(&format!("Amount:   {}\n", format_inr(base)));
    out.push_str(&format!("GST:      {}\n", format_inr(detail.payment.gst_amount_paise)));
    out.push_str(&format!("Total:    {}\n", format_inr(detail.payment.amount_paise)));
    out.push_str(&format!("Method:   {}\n", detail.payment.method.as_str()));
    out.push_str(&format!("Status:   {}\n", detail.payment.status.as_str()));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&center("Thank you! Keep lifting."));
    out.push('\n');
    out
}

fn center(s: &str) -> String {
    let len = s.chars().count();
    if len >= WIDTH {
        return s.to_owned();
    }
    let pad = (WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), s)
}
