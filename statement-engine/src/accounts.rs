//! Per-account payments made / received roll-up.

use statement_core::{Account, AccountInfo, PaymentTotals, Summary};

pub fn summarize_account(info: &AccountInfo, summary: &Summary) -> Account {
    Account {
        account_name: info.account_name.clone(),
        bank_logo: info.bank_logo.clone(),
        account_number: info.account_number.clone(),
        payments_made: PaymentTotals {
            count: summary.debit_count,
            total: summary.total_spent.abs(),
        },
        payments_received: PaymentTotals {
            count: summary.credit_count,
            total: summary.total_received,
        },
    }
}
