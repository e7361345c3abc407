//! End-to-end pipeline: normalize, categorize, aggregate, assemble.

use statement_core::{
    AccountInfo, AnalysisResult, EngineError, InvalidTransactionError, RawTransaction,
    Transaction,
};
use tracing::{debug, info, warn};

use crate::accounts::summarize_account;
use crate::aggregator::aggregate;
use crate::assembler::assemble;
use crate::category_rules::RuleSet;
use crate::normalizer::normalize;

/// Contract plus the records that were dropped on the way.
///
/// An empty `result.transactions` with an empty `rejected` list means the
/// statement really had no transactions; a non-empty `rejected` list means
/// the input was partly malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: AnalysisResult,
    pub rejected: Vec<InvalidTransactionError>,
}

/// Stateless analyzer. Holds only its rule table, so one instance can serve
/// any number of threads by shared reference.
#[derive(Debug, Clone, Default)]
pub struct StatementAnalyzer {
    rules: RuleSet,
}

impl StatementAnalyzer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Assign a category to every transaction in place.
    pub fn categorize_all(&self, transactions: &mut [Transaction]) {
        for txn in transactions.iter_mut() {
            txn.category = self.rules.categorize(&txn.description).to_string();
        }
    }

    pub fn analyze(
        &self,
        raw: &[RawTransaction],
        page_count: i64,
        account: Option<&AccountInfo>,
    ) -> Result<Analysis, EngineError> {
        debug!(records = raw.len(), page_count, "normalizing statement records");
        let normalized = normalize(raw);
        for err in &normalized.rejected {
            warn!("dropping record: {err}");
        }

        let mut transactions = normalized.transactions;
        self.categorize_all(&mut transactions);
        debug!(transactions = transactions.len(), "categorized transactions");

        let (summary, breakdown) = aggregate(&transactions);
        let accounts = account.map(|info| vec![summarize_account(info, &summary)]);

        let result = assemble(transactions, summary, breakdown, page_count, accounts)?;
        info!(
            transactions = result.summary.total_transactions,
            rejected = normalized.rejected.len(),
            categories = result.category_breakdown.len(),
            "statement analyzed"
        );

        Ok(Analysis {
            result,
            rejected: normalized.rejected,
        })
    }
}
