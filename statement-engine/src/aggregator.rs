//! Summary totals and per-category breakdown over categorized transactions.

use statement_core::{CategoryBreakdown, CategoryBucket, Summary, Transaction};

/// Aggregate in a single pass. Never fails; an empty slice yields a zeroed
/// summary and an empty breakdown.
///
/// Zero-amount transactions count towards `total_transactions` and their
/// category bucket but are neither credits nor debits.
pub fn aggregate(transactions: &[Transaction]) -> (Summary, CategoryBreakdown) {
    let mut summary = Summary {
        total_transactions: transactions.len(),
        ..Summary::default()
    };
    let mut breakdown = CategoryBreakdown::new();
    let mut highest: Option<&Transaction> = None;
    let mut lowest: Option<&Transaction> = None;

    for txn in transactions {
        if txn.is_credit() {
            summary.total_received += txn.amount;
            summary.credit_count += 1;
            // Strict comparison keeps the first of equal amounts.
            if highest.is_none_or(|h| txn.amount > h.amount) {
                highest = Some(txn);
            }
        } else if txn.is_debit() {
            summary.total_spent += txn.amount;
            summary.debit_count += 1;
            if lowest.is_none_or(|l| txn.amount < l.amount) {
                lowest = Some(txn);
            }
        }

        let bucket = breakdown
            .entry(txn.category.clone())
            .or_insert_with(|| CategoryBucket::new(txn.category.clone()));
        bucket.amount += txn.abs_amount();
        bucket.count += 1;
    }

    summary.balance = summary.total_received + summary.total_spent;
    summary.highest_amount = highest.map(|t| t.amount).unwrap_or(0.0);
    summary.lowest_amount = lowest.map(|t| t.amount).unwrap_or(0.0);
    summary.highest_transaction = highest.cloned();
    summary.lowest_transaction = lowest.cloned();

    apply_percentages(&mut breakdown);

    (summary, breakdown)
}

/// Percentages against the sum of bucket amounts; all zero when that sum is zero.
fn apply_percentages(breakdown: &mut CategoryBreakdown) {
    let total: f64 = breakdown.values().map(|b| b.amount).sum();
    for bucket in breakdown.values_mut() {
        bucket.percentage = if total > 0.0 {
            100.0 * bucket.amount / total
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(day: u32, description: &str, amount: f64, category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        Transaction::new(date, description, amount).with_category(category)
    }

    #[test]
    fn test_empty_input_is_zeroed() {
        let (summary, breakdown) = aggregate(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.total_transactions, 0);
        assert!(summary.highest_transaction.is_none());
        assert!(summary.lowest_transaction.is_none());
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_salary_and_shopping_scenario() {
        let txns = vec![
            txn(1, "Salary Credit", 45000.0, "Income"),
            txn(2, "Amazon Shopping", -3500.0, "Shopping"),
        ];
        let (summary, breakdown) = aggregate(&txns);

        assert_eq!(summary.total_received, 45000.0);
        assert_eq!(summary.total_spent, -3500.0);
        assert_eq!(summary.balance, 41500.0);
        assert_eq!(summary.credit_count, 1);
        assert_eq!(summary.debit_count, 1);
        assert_eq!(summary.total_transactions, 2);
        assert_eq!(summary.highest_amount, 45000.0);
        assert_eq!(summary.lowest_amount, -3500.0);

        let income = &breakdown["Income"];
        let shopping = &breakdown["Shopping"];
        assert_eq!(income.amount, 45000.0);
        assert_eq!(shopping.amount, 3500.0);
        assert!((income.percentage - 92.857).abs() < 0.01);
        assert!((shopping.percentage - 7.143).abs() < 0.01);
    }

    #[test]
    fn test_highest_tie_keeps_first() {
        let txns = vec![
            txn(1, "first bonus", 500.0, "Income"),
            txn(2, "second bonus", 500.0, "Income"),
            txn(3, "small", 20.0, "Income"),
        ];
        let (summary, _) = aggregate(&txns);
        let highest = summary.highest_transaction.unwrap();
        assert_eq!(highest.description, "first bonus");
        assert!(summary.lowest_transaction.is_none());
        assert_eq!(summary.lowest_amount, 0.0);
    }

    #[test]
    fn test_lowest_tie_keeps_first() {
        let txns = vec![
            txn(1, "rent a", -900.0, "Rent"),
            txn(2, "coffee", -90.0, "Food & Dining"),
            txn(3, "rent b", -900.0, "Rent"),
        ];
        let (summary, _) = aggregate(&txns);
        assert_eq!(summary.lowest_transaction.unwrap().description, "rent a");
        assert!(summary.highest_transaction.is_none());
    }

    #[test]
    fn test_zero_amount_counts_in_total_only() {
        let txns = vec![
            txn(1, "credit", 100.0, "Transfer"),
            txn(2, "mandate", 0.0, "Others"),
            txn(3, "debit", -40.0, "Transfer"),
        ];
        let (summary, breakdown) = aggregate(&txns);
        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.credit_count + summary.debit_count, 2);
        assert_eq!(breakdown["Others"].count, 1);
        assert_eq!(breakdown["Others"].percentage, 0.0);
        assert_eq!(breakdown["Transfer"].amount, 140.0);
        assert_eq!(breakdown["Transfer"].count, 2);
    }

    #[test]
    fn test_all_zero_amounts_no_division_by_zero() {
        let txns = vec![txn(1, "a", 0.0, "Others"), txn(2, "b", 0.0, "Others")];
        let (summary, breakdown) = aggregate(&txns);
        assert_eq!(summary.total_transactions, 2);
        assert_eq!(breakdown["Others"].percentage, 0.0);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let txns = vec![
            txn(1, "a", 1234.56, "Income"),
            txn(2, "b", -77.7, "Food & Dining"),
            txn(3, "c", -10.01, "Transfer"),
            txn(4, "d", -3333.33, "Rent"),
            txn(5, "e", 0.03, "Income"),
        ];
        let (_, breakdown) = aggregate(&txns);
        let sum: f64 = breakdown.values().map(|b| b.percentage).sum();
        assert!((sum - 100.0).abs() < 0.01, "sum was {sum}");
    }

    #[test]
    fn test_conservation_and_idempotence() {
        let txns = vec![
            txn(1, "a", 0.1, "Income"),
            txn(2, "b", 0.2, "Income"),
            txn(3, "c", -0.3, "Transfer"),
        ];
        let first = aggregate(&txns);
        let second = aggregate(&txns);
        assert_eq!(first, second);
        let summary = first.0;
        assert_eq!(summary.balance, summary.total_received + summary.total_spent);
    }
}
