use thiserror::Error;

/// A single raw record that cannot be normalized. The normalizer collects
/// these and drops the record; the rest of the batch carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidTransactionError {
    #[error("record {index}: unparseable date {value:?}")]
    UnparseableDate { index: usize, value: String },
    #[error("record {index}: no deposits, withdrawals or amount column present")]
    MissingAmount { index: usize },
    #[error("record {index}: no numeric amount column (first bad value: {field} = {value})")]
    NonNumeric {
        index: usize,
        field: &'static str,
        value: String,
    },
    #[error("record {index}: both deposits ({deposits}) and withdrawals ({withdrawals}) are nonzero")]
    AmbiguousDirection {
        index: usize,
        deposits: f64,
        withdrawals: f64,
    },
    #[error("record {index}: negative {field} column ({value})")]
    NegativeColumn {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

impl InvalidTransactionError {
    /// Position of the rejected record in the raw input.
    pub fn index(&self) -> usize {
        match self {
            InvalidTransactionError::UnparseableDate { index, .. }
            | InvalidTransactionError::MissingAmount { index }
            | InvalidTransactionError::NonNumeric { index, .. }
            | InvalidTransactionError::AmbiguousDirection { index, .. }
            | InvalidTransactionError::NegativeColumn { index, .. } => *index,
        }
    }
}

/// Batch-level failures. These are never recovered: the engine cannot trust
/// its own output once one of them fires.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid page count {0}: must be between 0 and 4294967295")]
    InvalidPageCount(i64),
    #[error("internal consistency check failed: {0}")]
    InternalConsistency(String),
}
