//! UPI app statement parser (text)
//!
//! Expected extracted-text rows, one transaction per line:
//!   Feb 05, 2024 10:32 am Paid to Zomato DEBIT ₹250
//!   06 Feb 2024 Received from RAVI KUMAR CREDIT ₹1,200.00
//!
//! Header and balance lines are skipped. Rows mentioning a debit word
//! become negative amounts.

use anyhow::Result;
use regex::Regex;
use statement_core::{RawTransaction, parse_amount};
use tracing::info;

const SKIP_MARKERS: &[&str] = &[
    "statement",
    "page",
    "transaction id",
    "opening balance",
    "closing balance",
];

const DEBIT_WORDS: &[&str] = &["paid", "payment", "sent", "debit"];

/// Parse extracted UPI statement text into raw records.
pub fn parse_upi_text(text: &str) -> Result<Vec<RawTransaction>> {
    const MON: &str = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*";
    let date_re = Regex::new(&format!(
        r"(?i)\b(\d{{1,2}}\s+{MON}\s+\d{{4}}|{MON}\s+\d{{1,2}},?\s+\d{{4}}|\d{{1,2}}-\d{{1,2}}-\d{{4}}|\d{{1,2}}/\d{{1,2}}/\d{{4}})"
    ))?;
    let marked_amount_re = Regex::new(r"(?:₹|\bRs\.?|\bINR)\s*(\d+(?:,\d+)*(?:\.\d{1,2})?)")?;
    let plain_amount_re = Regex::new(r"\b\d+(?:,\d+)*\.\d{2}\b")?;
    let time_re = Regex::new(r"(?i)\b\d{1,2}:\d{2}(?::\d{2})?\s*(?:am|pm)?")?;
    let type_re = Regex::new(r"(?i)\b(?:debit|credit)\b")?;

    let mut out = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if SKIP_MARKERS.iter().any(|m| lower.contains(m)) {
            continue;
        }

        let Some(date) = date_re.find(line) else {
            continue;
        };
        let after_date = &line[date.end()..];

        // Prefer a currency-marked amount; otherwise the last decimal number after the date.
        let (amount_text, amount_span) = match marked_amount_re.captures(after_date) {
            Some(caps) => {
                let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
                (caps[1].to_string(), whole)
            }
            None => match plain_amount_re.find_iter(after_date).last() {
                Some(m) => (m.as_str().to_string(), m.range()),
                None => continue,
            },
        };
        let Some(magnitude) = parse_amount(&amount_text) else {
            continue;
        };

        let is_debit = DEBIT_WORDS.iter().any(|w| lower.contains(w));
        let amount = if is_debit { -magnitude } else { magnitude };

        let mut rest = String::with_capacity(after_date.len());
        rest.push_str(&after_date[..amount_span.start]);
        rest.push(' ');
        rest.push_str(&after_date[amount_span.end..]);
        let rest = time_re.replace_all(&rest, " ");
        let rest = type_re.replace_all(&rest, " ");
        let description = rest.split_whitespace().collect::<Vec<_>>().join(" ");
        let description = if description.is_empty() {
            "Transaction".to_string()
        } else {
            description
        };

        out.push(RawTransaction::new(date.as_str(), description).with_amount(amount));
    }

    info!(transactions = out.len(), "parsed UPI statement text");
    Ok(out)
}
