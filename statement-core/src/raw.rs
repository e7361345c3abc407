//! Raw statement records as handed over by an upstream extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parse::{in_range, parse_amount};

/// A numeric column as it arrives from a parser: a JSON number or text such
/// as `"45,000.00"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// The numeric value, or `None` when the column is not a usable amount.
    pub fn value(&self) -> Option<f64> {
        match self {
            RawAmount::Number(n) => Some(*n).filter(|v| in_range(*v)),
            RawAmount::Text(s) => parse_amount(s),
        }
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(n) => write!(f, "{n}"),
            RawAmount::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(v: f64) -> Self {
        RawAmount::Number(v)
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

/// One unvalidated statement line.
///
/// Either the `deposits`/`withdrawals` pair (passbook style) or a signed
/// `amount` (UPI style) carries the money.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub date: String,
    #[serde(default, alias = "particulars", alias = "transaction_details")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposits: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub withdrawals: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<RawAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<RawAmount>,
}

impl RawTransaction {
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_deposits(mut self, deposits: impl Into<RawAmount>) -> Self {
        self.deposits = Some(deposits.into());
        self
    }

    pub fn with_withdrawals(mut self, withdrawals: impl Into<RawAmount>) -> Self {
        self.withdrawals = Some(withdrawals.into());
        self
    }

    pub fn with_amount(mut self, amount: impl Into<RawAmount>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_balance(mut self, balance: impl Into<RawAmount>) -> Self {
        self.balance = Some(balance.into());
        self
    }
}
