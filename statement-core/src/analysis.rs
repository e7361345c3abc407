//! The analysis contract: the JSON shape every presentation surface reads.
//!
//! Field names are fixed (`transactions`, `summary`, `categoryBreakdown`,
//! `pageCount`, `accounts`), so every struct here serializes in camelCase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::transaction::Transaction;

/// Category label -> bucket, kept sorted so output is reproducible.
pub type CategoryBreakdown = BTreeMap<String, CategoryBucket>;

/// Aggregated absolute amount, count and share for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub category: String,
    /// Sum of absolute amounts
    pub amount: f64,
    pub count: usize,
    /// Share of the total absolute amount, 0-100
    pub percentage: f64,
}

impl CategoryBucket {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: 0.0,
            count: 0,
            percentage: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of positive amounts
    pub total_received: f64,
    /// Sum of negative amounts (kept negative)
    pub total_spent: f64,
    /// `total_received + total_spent`
    pub balance: f64,
    pub credit_count: usize,
    pub debit_count: usize,
    /// Length of the transaction list, zero-amount lines included
    pub total_transactions: usize,
    pub highest_amount: f64,
    pub lowest_amount: f64,
    pub highest_transaction: Option<Transaction>,
    pub lowest_transaction: Option<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub count: usize,
    pub total: f64,
}

/// Per-account roll-up shown next to the main summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_logo: Option<String>,
    pub account_number: String,
    pub payments_made: PaymentTotals,
    pub payments_received: PaymentTotals,
}

/// Account header found on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_name: String,
    pub account_number: String,
    pub bank_logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub category_breakdown: CategoryBreakdown,
    pub page_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<Account>>,
}
