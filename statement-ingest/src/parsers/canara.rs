//! Canara-style passbook parser (text)
//!
//! Expected extracted-text layout, one field per line:
//!   05-01-2024
//!   UPI/CR/401234/RAVI KUMAR
//!   /SBIN/ravi@okaxis
//!   1,500.00
//!   12,430.55
//!
//! A date line opens a record; following non-numeric lines are particulars;
//! a money line is the amount and a second consecutive money line is the
//! running balance.

use anyhow::{Result, bail};
use regex::Regex;
use statement_core::{RawTransaction, parse_amount};
use tracing::{debug, info};

const MIN_TEXT_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Credit,
    Debit,
    Unknown,
}

struct Markers {
    credit: Regex,
    debit: Regex,
    channel: Regex,
}

impl Markers {
    fn new() -> Result<Self> {
        Ok(Self {
            credit: Regex::new(r"\bCR\b|CREDIT|DEPOSIT|RECEIVED")?,
            debit: Regex::new(r"\bDR\b|DEBIT|WITHDRAWAL|PAID")?,
            channel: Regex::new(
                r"\b(?:CASH|TRANSFER|NEFT|RTGS|IMPS|UPI|CHEQUE|CHQ|WITHDRAWAL|DEPOSIT)\b",
            )?,
        })
    }

    /// Direction of a single amount line: explicit markers first, then any
    /// payment channel counts as money out.
    fn single(&self, particulars: &str) -> Direction {
        if self.credit.is_match(particulars) {
            Direction::Credit
        } else if self.debit.is_match(particulars) || self.channel.is_match(particulars) {
            Direction::Debit
        } else {
            Direction::Unknown
        }
    }

    /// Direction when an amount and a balance are both printed.
    fn with_balance(&self, particulars: &str) -> Direction {
        if self.credit.is_match(particulars) {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }
}

#[derive(Debug, Default)]
struct Pending {
    date: String,
    particulars: Vec<String>,
    deposits: f64,
    withdrawals: f64,
    balance: Option<f64>,
}

impl Pending {
    fn into_raw(self) -> RawTransaction {
        let mut raw = RawTransaction::new(self.date, self.particulars.join(" "))
            .with_deposits(self.deposits)
            .with_withdrawals(self.withdrawals);
        if let Some(b) = self.balance {
            raw = raw.with_balance(b);
        }
        raw
    }
}

/// Parse extracted passbook text into raw records.
pub fn parse_canara_text(text: &str) -> Result<Vec<RawTransaction>> {
    if text.trim().len() < MIN_TEXT_LEN {
        bail!("statement text too short ({} chars); is this a Canara statement?", text.trim().len());
    }

    let date_re = Regex::new(
        r"^(\d{2}-\d{2}-\d{4}|\d{2}/\d{2}/\d{4}|\d{2}\.\d{2}\.\d{4}|\d{2}-[A-Za-z]{3}-\d{2})",
    )?;
    let money_re = Regex::new(r"^[\d,]+\.\d{2}$")?;
    let opening_re = Regex::new(r"(?i)opening balance|balance (?:b/f|b/d)")?;
    let markers = Markers::new()?;

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut out = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let line = lines[idx];
        idx += 1;

        let date = match date_re.captures(line) {
            Some(caps) => caps[1].to_string(),
            None => continue,
        };

        let rest = line[date.len()..].trim();
        if opening_re.is_match(rest) {
            continue;
        }

        let mut current = Pending {
            date,
            ..Pending::default()
        };
        if !rest.is_empty() {
            current.particulars.push(rest.to_string());
        }

        while idx < lines.len() {
            let next = lines[idx];
            if date_re.is_match(next) {
                break;
            }
            idx += 1;

            if next.is_empty() || opening_re.is_match(next) {
                continue;
            }

            if !money_re.is_match(next) {
                current.particulars.push(next.to_string());
                continue;
            }

            let value = parse_amount(next).unwrap_or(0.0);
            let particulars = current.particulars.join("\n").to_uppercase();

            let balance_line = lines
                .get(idx)
                .filter(|l| money_re.is_match(l))
                .and_then(|l| parse_amount(l));

            let direction = match balance_line {
                Some(balance) => {
                    current.balance = Some(balance);
                    idx += 1;
                    markers.with_balance(&particulars)
                }
                None => markers.single(&particulars),
            };

            match direction {
                Direction::Credit => current.deposits = value,
                Direction::Debit => current.withdrawals = value,
                Direction::Unknown => current.balance = Some(value),
            }
            debug!(
                date = %current.date,
                deposits = current.deposits,
                withdrawals = current.withdrawals,
                balance = ?current.balance,
                "extracted amounts"
            );
        }

        out.push(current.into_raw());
    }

    if out.is_empty() {
        bail!("no transactions found; is this a Canara statement?");
    }

    info!(transactions = out.len(), "parsed Canara statement text");
    Ok(out)
}
