//! Package pipeline output into the analysis contract, checking that the
//! pieces agree with each other.

use statement_core::{
    Account, AnalysisResult, CategoryBreakdown, EngineError, Summary, Transaction,
};

pub fn assemble(
    transactions: Vec<Transaction>,
    summary: Summary,
    category_breakdown: CategoryBreakdown,
    page_count: i64,
    accounts: Option<Vec<Account>>,
) -> Result<AnalysisResult, EngineError> {
    let page_count =
        u32::try_from(page_count).map_err(|_| EngineError::InvalidPageCount(page_count))?;

    if summary.total_transactions != transactions.len() {
        return Err(EngineError::InternalConsistency(format!(
            "summary counts {} transactions but {} were assembled",
            summary.total_transactions,
            transactions.len()
        )));
    }

    let bucketed: usize = category_breakdown.values().map(|b| b.count).sum();
    if bucketed != transactions.len() {
        return Err(EngineError::InternalConsistency(format!(
            "category breakdown covers {} transactions but {} were assembled",
            bucketed,
            transactions.len()
        )));
    }

    Ok(AnalysisResult {
        transactions,
        summary,
        category_breakdown,
        page_count,
        accounts,
    })
}
