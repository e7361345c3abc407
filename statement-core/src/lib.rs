//! statement-core: data model, category labels and error taxonomy for statement analysis

pub mod analysis;
pub mod errors;
pub mod labels;
pub mod parse;
pub mod raw;
pub mod transaction;

pub use analysis::{
    Account, AccountInfo, AnalysisResult, CategoryBreakdown, CategoryBucket, PaymentTotals,
    Summary,
};
pub use errors::{EngineError, InvalidTransactionError};
pub use parse::{parse_amount, parse_statement_date};
pub use raw::{RawAmount, RawTransaction};
pub use transaction::Transaction;
