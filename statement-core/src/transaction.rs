//! Normalized transaction type shared by every stage after the normalizer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::labels;

/// A validated statement line with a signed amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Calendar date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Narration, whitespace-collapsed
    pub description: String,
    /// Positive = credit (money received), negative = debit (money spent)
    pub amount: f64,
    /// Category label assigned by the categorizer
    pub category: String,
    /// Running balance when the statement printed one
    pub balance: Option<f64>,
}

impl Transaction {
    /// Create an uncategorized transaction (category `Others`, no balance).
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: labels::OTHERS.to_string(),
            balance: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_balance(mut self, balance: Option<f64>) -> Self {
        self.balance = balance;
        self
    }

    /// Returns true for money received
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true for money spent
    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_direction() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let spent = Transaction::new(date, "Amazon Shopping", -3500.0);
        assert!(spent.is_debit());
        assert!(!spent.is_credit());
        assert_eq!(spent.abs_amount(), 3500.0);
        assert_eq!(spent.category, labels::OTHERS);

        let zero = Transaction::new(date, "Mandate registration", 0.0);
        assert!(!zero.is_credit() && !zero.is_debit());
    }

    #[test]
    fn test_serializes_date_and_null_balance() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let txn = Transaction::new(date, "Salary Credit", 45000.0).with_category("Income");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["category"], "Income");
        assert!(json["balance"].is_null());
    }
}
