//! Validate raw statement records and coerce them into signed transactions.

use statement_core::{
    InvalidTransactionError, RawAmount, RawTransaction, Transaction, parse_statement_date,
};

/// Output of [`normalize`]: accepted transactions in input order plus one
/// error per dropped record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub transactions: Vec<Transaction>,
    pub rejected: Vec<InvalidTransactionError>,
}

/// Normalize a batch. Invalid records are excluded, never zeroed.
pub fn normalize(raw: &[RawTransaction]) -> Normalized {
    let mut out = Normalized::default();
    for (index, record) in raw.iter().enumerate() {
        match normalize_one(index, record) {
            Ok(txn) => out.transactions.push(txn),
            Err(err) => out.rejected.push(err),
        }
    }
    out
}

/// Normalize a single record. `index` is only used for error reporting.
pub fn normalize_one(
    index: usize,
    raw: &RawTransaction,
) -> Result<Transaction, InvalidTransactionError> {
    let date = parse_statement_date(&raw.date).ok_or_else(|| {
        InvalidTransactionError::UnparseableDate {
            index,
            value: raw.date.clone(),
        }
    })?;

    let amount = signed_amount(index, raw)?;
    let balance = raw.balance.as_ref().and_then(RawAmount::value);

    Ok(Transaction::new(date, collapse_whitespace(&raw.description), amount).with_balance(balance))
}

/// Deposits win over withdrawals, the pair wins over `amount`.
fn signed_amount(index: usize, raw: &RawTransaction) -> Result<f64, InvalidTransactionError> {
    if raw.deposits.is_none() && raw.withdrawals.is_none() && raw.amount.is_none() {
        return Err(InvalidTransactionError::MissingAmount { index });
    }

    let deposits = column(raw.deposits.as_ref());
    let withdrawals = column(raw.withdrawals.as_ref());
    let amount = column(raw.amount.as_ref());

    for (field, value) in [("deposits", deposits), ("withdrawals", withdrawals)] {
        if let Some(Ok(v)) = value {
            if v < 0.0 {
                return Err(InvalidTransactionError::NegativeColumn { index, field, value: v });
            }
        }
    }

    let d = deposits.and_then(Result::ok);
    let w = withdrawals.and_then(Result::ok);
    let a = amount.and_then(Result::ok);

    if let (Some(d), Some(w)) = (d, w) {
        if d > 0.0 && w > 0.0 {
            return Err(InvalidTransactionError::AmbiguousDirection {
                index,
                deposits: d,
                withdrawals: w,
            });
        }
    }

    let chosen = match (d, w, a) {
        (Some(d), _, _) if d > 0.0 => Some(d),
        (_, Some(w), _) if w > 0.0 => Some(-w),
        (_, _, Some(a)) => Some(a),
        // Only zero columns were readable.
        (Some(_), _, None) | (_, Some(_), None) => Some(0.0),
        (None, None, None) => None,
    };

    let unreadable = [
        ("deposits", deposits, &raw.deposits),
        ("withdrawals", withdrawals, &raw.withdrawals),
        ("amount", amount, &raw.amount),
    ]
    .into_iter()
    .find_map(|(field, parsed, original)| match (parsed, original) {
        (Some(Err(())), Some(v)) => Some((field, v.to_string())),
        _ => None,
    });

    // A zero from the readable columns cannot stand in for an unreadable one.
    match (chosen, unreadable) {
        (Some(v), Some((field, value))) if v == 0.0 => {
            Err(InvalidTransactionError::NonNumeric { index, field, value })
        }
        (Some(v), _) => Ok(v),
        (None, Some((field, value))) => {
            Err(InvalidTransactionError::NonNumeric { index, field, value })
        }
        (None, None) => Err(InvalidTransactionError::MissingAmount { index }),
    }
}

/// `None` = column absent, `Some(Err(()))` = present but not a number.
fn column(value: Option<&RawAmount>) -> Option<Result<f64, ()>> {
    value.map(|v| v.value().ok_or(()))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deposit_and_withdrawal_signs() {
        let raw = vec![
            RawTransaction::new("2024-01-01", "Salary Credit")
                .with_deposits(45000.0)
                .with_withdrawals(0.0),
            RawTransaction::new("2024-01-02", "Amazon Shopping")
                .with_deposits(0.0)
                .with_withdrawals(3500.0),
        ];
        let out = normalize(&raw);
        assert!(out.rejected.is_empty());
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.transactions[0].amount, 45000.0);
        assert_eq!(out.transactions[0].date, ymd(2024, 1, 1));
        assert_eq!(out.transactions[1].amount, -3500.0);
    }

    #[test]
    fn test_signed_amount_column() {
        let raw = vec![
            RawTransaction::new("05 Feb 2024", "Paid to Zomato").with_amount(-250.0),
            RawTransaction::new("06 Feb 2024", "Received from Ravi").with_amount("1,200.00"),
        ];
        let out = normalize(&raw);
        assert_eq!(out.transactions[0].amount, -250.0);
        assert_eq!(out.transactions[1].amount, 1200.0);
    }

    #[test]
    fn test_deposits_take_precedence_over_amount() {
        let raw = [RawTransaction::new("2024-01-01", "NEFT credit")
            .with_deposits(500.0)
            .with_amount(-500.0)];
        let out = normalize(&raw);
        assert_eq!(out.transactions[0].amount, 500.0);
    }

    #[test]
    fn test_unparseable_date_is_excluded() {
        let raw = vec![
            RawTransaction::new("2024-01-01", "ok").with_amount(10.0),
            RawTransaction::new("yesterday", "bad").with_amount(10.0),
            RawTransaction::new("2024-01-03", "ok too").with_amount(-5.0),
        ];
        let out = normalize(&raw);
        assert_eq!(out.transactions.len(), raw.len() - 1);
        assert_eq!(out.rejected.len(), 1);
        assert_eq!(out.rejected[0].index(), 1);
        assert!(matches!(
            out.rejected[0],
            InvalidTransactionError::UnparseableDate { .. }
        ));
        // Order preserved
        assert_eq!(out.transactions[0].description, "ok");
        assert_eq!(out.transactions[1].description, "ok too");
    }

    #[test]
    fn test_missing_and_non_numeric_amounts() {
        let missing = normalize_one(0, &RawTransaction::new("2024-01-01", "nothing"));
        assert_eq!(
            missing,
            Err(InvalidTransactionError::MissingAmount { index: 0 })
        );

        let garbage = normalize_one(
            3,
            &RawTransaction::new("2024-01-01", "garbage").with_amount("twelve"),
        );
        assert!(matches!(
            garbage,
            Err(InvalidTransactionError::NonNumeric { index: 3, field: "amount", .. })
        ));
    }

    #[test]
    fn test_unreadable_column_is_not_zeroed() {
        let raw = [RawTransaction::new("2024-01-01", "Salary Credit")
            .with_deposits("45,OOO.00")
            .with_withdrawals("0.00")];
        let out = normalize(&raw);
        assert!(out.transactions.is_empty());
        assert_eq!(out.rejected.len(), 1);
        assert!(matches!(
            &out.rejected[0],
            InvalidTransactionError::NonNumeric { index: 0, field: "deposits", value }
                if value.contains("45,OOO.00")
        ));
    }

    #[test]
    fn test_unreadable_column_ignored_when_amount_is_clear() {
        let txn = normalize_one(
            0,
            &RawTransaction::new("2024-01-01", "Amazon")
                .with_deposits("-")
                .with_withdrawals("3,500.00"),
        )
        .unwrap();
        assert_eq!(txn.amount, -3500.0);
    }

    #[test]
    fn test_both_columns_nonzero_rejected() {
        let res = normalize_one(
            2,
            &RawTransaction::new("2024-01-01", "confused")
                .with_deposits(10.0)
                .with_withdrawals(20.0),
        );
        assert!(matches!(
            res,
            Err(InvalidTransactionError::AmbiguousDirection { index: 2, .. })
        ));
    }

    #[test]
    fn test_negative_column_rejected() {
        let res = normalize_one(
            0,
            &RawTransaction::new("2024-01-01", "odd").with_withdrawals(-20.0),
        );
        assert!(matches!(
            res,
            Err(InvalidTransactionError::NegativeColumn { field: "withdrawals", .. })
        ));
    }

    #[test]
    fn test_zero_columns_give_zero_amount() {
        let txn = normalize_one(
            0,
            &RawTransaction::new("2024-01-01", "mandate")
                .with_deposits(0.0)
                .with_withdrawals(0.0),
        )
        .unwrap();
        assert_eq!(txn.amount, 0.0);
    }

    #[test]
    fn test_balance_missing_is_none_not_zero() {
        let without = normalize_one(0, &RawTransaction::new("2024-01-01", "a").with_amount(1.0)).unwrap();
        assert_eq!(without.balance, None);

        let with = normalize_one(
            0,
            &RawTransaction::new("2024-01-01", "a")
                .with_amount(1.0)
                .with_balance("10,001.50"),
        )
        .unwrap();
        assert_eq!(with.balance, Some(10001.5));
    }

    #[test]
    fn test_description_whitespace_collapsed() {
        let txn = normalize_one(
            0,
            &RawTransaction::new("2024-01-01", "  UPI/DR/4012\n  SWIGGY   BLR ").with_amount(-99.0),
        )
        .unwrap();
        assert_eq!(txn.description, "UPI/DR/4012 SWIGGY BLR");
    }
}
